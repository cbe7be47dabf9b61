use crate::{
    element::{EH, FH, LH, RH, VH},
    error::Error,
    list::CircularList,
    mesh::Mesh,
};

impl Mesh {
    /// Check the boundary cycle of `f`.
    ///
    /// Consecutive loops must belong to `f` and have distinct edges, and the
    /// edge of each loop must connect its vertex to the vertex of the next
    /// loop. No vertex may appear twice on the boundary. The cycle must have
    /// as many loops as the face has edges.
    pub fn validate_loop(&self, f: FH) -> Result<(), Error> {
        let face = self.face_data(f)?;
        let mut seen: Vec<VH> = Vec::with_capacity(face.edge_count as usize);
        for l in self.cycle(face.first, true) {
            let l = l?;
            let lp = self.loop_data(l)?;
            let next = self.loop_data(lp.link.next)?;
            if next.link.prev != l {
                return Err(Error::BoundaryLinkMismatch(l));
            }
            if lp.face != f || next.face != f {
                return Err(Error::InconsistentFaceInLoop(l));
            }
            if lp.edge == next.edge {
                return Err(Error::RepeatedEdgeInLoop(l));
            }
            if lp.vertex == next.vertex {
                return Err(Error::RepeatedVertexInLoop(l));
            }
            let edge = self.edge_data(lp.edge)?;
            if !edge.has_vertex(lp.vertex) || !edge.has_vertex(next.vertex) {
                return Err(Error::LoopEdgeVertexMismatch(l));
            }
            if seen.contains(&lp.vertex) {
                return Err(Error::RepeatedVertexInLoop(l));
            }
            seen.push(lp.vertex);
        }
        if seen.len() != face.edge_count as usize {
            return Err(Error::BoundaryLengthMismatch(f, face.edge_count, seen.len()));
        }
        Ok(())
    }

    /// Check the radial cycle of the edge of `l`.
    ///
    /// Every radial link must wrap a distinct loop on that edge, starting at
    /// one of its endpoints, and the cycle must have as many links as the
    /// edge has faces.
    pub fn validate_radial(&self, l: LH) -> Result<(), Error> {
        let e = self.loop_data(l)?.edge;
        let edge = self.edge_data(e)?;
        let mut seen: Vec<RH> = Vec::with_capacity(edge.face_count as usize);
        for rh in self.cycle(l.radial_link(), true) {
            let rh = rh?;
            let lp = self.loop_data(rh.owner())?;
            let next = self.loop_data(lp.radial.next.owner())?;
            if next.radial.prev != rh {
                return Err(Error::RadialLinkMismatch(rh));
            }
            if seen.contains(&rh) {
                return Err(Error::RepeatedLoopInRadial(rh));
            }
            if lp.edge != e || next.edge != e {
                return Err(Error::InconsistentEdgeInRadial(rh));
            }
            if !edge.has_vertex(lp.vertex) {
                return Err(Error::RadialVertexMismatch(rh));
            }
            seen.push(rh);
        }
        if seen.len() != edge.face_count as usize {
            return Err(Error::RadialLengthMismatch(e, edge.face_count, seen.len()));
        }
        Ok(())
    }

    /// Check the disk cycle of `v`.
    ///
    /// Every disk link must refer to a distinct edge incident on `v`, and the
    /// cycle must have as many links as the vertex has edges. If `edge` is
    /// given, it must be found in the cycle.
    pub fn validate_disk(&self, v: VH, edge: Option<EH>) -> Result<(), Error> {
        let vert = self.vertex_data(v)?;
        let mut seen: Vec<EH> = Vec::with_capacity(vert.edge_count as usize);
        if let Some(head) = vert.disk {
            for dh in self.cycle(head, true) {
                let dh = dh?;
                let e = dh.edge();
                let link = self.try_link(dh).ok_or(Error::DeletedEdge(e))?;
                let next = self.try_link(link.next).ok_or(Error::NonCircular)?;
                if next.prev != dh {
                    return Err(Error::DiskLinkMismatch(dh));
                }
                if seen.contains(&e) {
                    return Err(Error::RepeatedEdgeInDisk(dh));
                }
                if self.edge_data(e)?.verts[dh.side()] != v {
                    return Err(Error::DiskVertexMismatch(dh));
                }
                seen.push(e);
            }
        }
        if seen.len() != vert.edge_count as usize {
            return Err(Error::DiskLengthMismatch(v, vert.edge_count, seen.len()));
        }
        match edge {
            Some(e) if !seen.contains(&e) => Err(Error::EdgeNotInDisk(v, e)),
            _ => Ok(()),
        }
    }

    /// Check that `e` connects two distinct live vertices, shows up in both
    /// their disk cycles, and has a radial cycle exactly when faces use it.
    pub fn validate_edge(&self, e: EH) -> Result<(), Error> {
        let edge = self.edge_data(e)?;
        let [a, b] = edge.verts;
        if a == b {
            return Err(Error::DegenerateEdge(a));
        }
        self.validate_disk(a, Some(e))?;
        self.validate_disk(b, Some(e))?;
        match edge.radial {
            Some(rh) if edge.face_count > 0 => self.validate_radial(rh.owner()),
            None if edge.face_count == 0 => Ok(()),
            _ => Err(Error::RadialHeadMismatch(e)),
        }
    }

    /// Check the topology of the whole mesh.
    ///
    /// Returns the first error found in any disk, radial or boundary cycle.
    pub fn check_topology(&self) -> Result<(), Error> {
        for v in self.vertices() {
            self.validate_disk(v, None)?;
        }
        for e in self.edges() {
            self.validate_edge(e)?;
        }
        let mut nloops = 0usize;
        for f in self.faces() {
            self.validate_loop(f)?;
            nloops += self.face_data(f)?.edge_count as usize;
        }
        for l in self.loops() {
            self.face_data(self.loop_data(l)?.face)?;
            self.validate_radial(l)?;
        }
        if nloops != self.num_loops() {
            return Err(Error::OrphanLoops(self.num_loops() - nloops));
        }
        log::trace!(
            "Checked {} vertices, {} edges, {} faces",
            self.num_vertices(),
            self.num_edges(),
            self.num_faces()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{EH, Error, Mesh, list::CircularList};
    use glam::vec3;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        let v = mesh.add_vertices(&[
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        ]);
        mesh.add_face(&v).expect("Cannot add face");
        mesh
    }

    #[test]
    fn t_valid_meshes() {
        quad().check_topology().expect("Topology errors");
        Mesh::unit_box()
            .expect("Cannot create box")
            .check_topology()
            .expect("Topology errors");
        Mesh::tetrahedron(1.0)
            .expect("Cannot create tetrahedron")
            .check_topology()
            .expect("Topology errors");
        Mesh::new().check_topology().expect("Topology errors");
    }

    #[test]
    fn t_boundary_length_mismatch() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        mesh.face_mut(f).edge_count = 5;
        assert_eq!(
            mesh.validate_loop(f),
            Err(Error::BoundaryLengthMismatch(f, 5, 4))
        );
        assert!(mesh.check_topology().is_err());
    }

    #[test]
    fn t_repeated_vertex_in_loop() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        let l = mesh.face_loop(f).unwrap();
        let next = mesh.loop_next(l).unwrap();
        let v = mesh.loop_vertex(l).unwrap();
        mesh.loop_mut(next).vertex = v;
        assert_eq!(mesh.validate_loop(f), Err(Error::RepeatedVertexInLoop(l)));
    }

    #[test]
    fn t_repeated_vertex_apart() {
        // Two triangles touching at a, threaded as a single boundary.
        let mut mesh = Mesh::new();
        let v = mesh.add_vertices(&[
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(-1.0, 0.0, 0.0),
            vec3(-1.0, -1.0, 0.0),
        ]);
        let vs = [v[0], v[1], v[2], v[0], v[3], v[4]];
        let edges: Vec<_> = (0..vs.len())
            .map(|i| mesh.add_edge(vs[i], vs[(i + 1) % vs.len()]).unwrap())
            .collect();
        let f = mesh.new_face(&vs, &edges);
        let loops = mesh.face_loops(f).unwrap();
        assert_eq!(
            mesh.validate_loop(f),
            Err(Error::RepeatedVertexInLoop(loops[3]))
        );
        assert_eq!(
            mesh.check_topology(),
            Err(Error::RepeatedVertexInLoop(loops[3]))
        );
    }

    #[test]
    fn t_loop_edge_vertex_mismatch() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        let loops = mesh.face_loops(f).unwrap();
        // Point the first loop at the edge of the third one.
        let e = mesh.loop_edge(loops[2]).unwrap();
        mesh.loop_mut(loops[0]).edge = e;
        assert_eq!(
            mesh.validate_loop(f),
            Err(Error::LoopEdgeVertexMismatch(loops[0]))
        );
    }

    #[test]
    fn t_broken_boundary_link() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        let loops = mesh.face_loops(f).unwrap();
        mesh.link_mut(loops[2]).prev = loops[0];
        assert_eq!(
            mesh.validate_loop(f),
            Err(Error::BoundaryLinkMismatch(loops[1]))
        );
    }

    #[test]
    fn t_disk_length_mismatch() {
        let mut mesh = quad();
        let v = mesh.vertices().next().unwrap();
        mesh.vertex_mut(v).edge_count = 3;
        assert_eq!(
            mesh.validate_disk(v, None),
            Err(Error::DiskLengthMismatch(v, 3, 2))
        );
    }

    #[test]
    fn t_edge_not_in_disk() {
        let mut mesh = quad();
        let a = mesh.add_vertex(vec3(5.0, 5.0, 5.0));
        let b = mesh.add_vertex(vec3(6.0, 5.0, 5.0));
        let e = mesh.add_edge(a, b).unwrap();
        let v = mesh.vertices().next().unwrap();
        assert_eq!(
            mesh.validate_disk(v, Some(e)),
            Err(Error::EdgeNotInDisk(v, e))
        );
        mesh.validate_disk(a, Some(e)).unwrap();
    }

    #[test]
    fn t_broken_disk_is_non_circular() {
        let mut mesh = quad();
        let v = mesh.vertices().next().unwrap();
        let head = mesh.vertex_disk_link(v).unwrap().unwrap();
        // Point the head at the disk link of an edge that does not exist.
        mesh.link_mut(head).next = EH::from(100u32).disk_link(0);
        assert_eq!(mesh.validate_disk(v, None), Err(Error::NonCircular));
    }

    #[test]
    fn t_corrupt_disk_blocks_edits() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        let verts = mesh.face_vertices(f).unwrap();
        let v = verts[0];
        let head = mesh.vertex_disk_link(v).unwrap().unwrap();
        mesh.link_mut(head).next = EH::from(100u32).disk_link(0);
        assert_eq!(
            mesh.next_edge_link(head.edge(), v, true),
            Err(Error::NonCircular)
        );
        // The previous link is intact.
        assert!(mesh.prev_edge_link(head.edge(), v).is_ok());
        assert_eq!(mesh.remove_vertex(v), Err(Error::NonCircular));
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_edges(), 4);
        assert_eq!(mesh.num_loops(), 4);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.face_vertices(f).unwrap(), verts);
        assert_eq!(mesh.vertex_edge_count(v).unwrap(), 2);
        assert_eq!(mesh.vertex_disk_link(v).unwrap(), Some(head));
    }

    #[test]
    fn t_radial_length_mismatch() {
        let mut mesh = quad();
        let e = mesh.edges().next().unwrap();
        mesh.edge_mut(e).face_count = 2;
        let l = mesh.edge_radial_link(e).unwrap().unwrap().owner();
        assert_eq!(
            mesh.validate_radial(l),
            Err(Error::RadialLengthMismatch(e, 2, 1))
        );
    }

    #[test]
    fn t_radial_head_mismatch() {
        let mut mesh = quad();
        let e = mesh.edges().next().unwrap();
        mesh.edge_mut(e).radial = None;
        assert_eq!(mesh.validate_edge(e), Err(Error::RadialHeadMismatch(e)));
    }

    #[test]
    fn t_orphan_loops() {
        let mut mesh = quad();
        let f = mesh.faces().next().unwrap();
        let e = mesh.edges().next().unwrap();
        let v = mesh.edge_vertices(e).unwrap().0;
        let l = mesh.new_loop(v, e, f);
        mesh.radial_append(e, l);
        // The loop is in the radial cycle but not in the boundary.
        mesh.validate_loop(f).unwrap();
        mesh.validate_radial(l).unwrap();
        assert_eq!(mesh.check_topology(), Err(Error::OrphanLoops(1)));
    }
}
