use crate::{
    element::{EH, FH, Handle, LH, VH},
    error::Error,
    list::CircularList,
    mesh::Mesh,
};

impl Mesh {
    /// Retire a loop that has been taken out of the boundary order of its
    /// face by the caller.
    fn drop_loop(&mut self, l: LH) {
        let (e, f, next) = {
            let lp = self.loop_mut(l);
            (lp.edge, lp.face, lp.link.next)
        };
        let face = self.face_mut(f);
        face.edge_count -= 1;
        if face.first == l {
            face.first = next;
        }
        self.unlink(l);
        self.radial_remove(e, l);
        self.loops.remove(l.index() as usize);
    }

    /// Undo a split: remove `v_kill` along with `e_kill`, and stretch the
    /// other edge of `v_kill` to reach the far endpoint of `e_kill`.
    ///
    /// `v_kill` must have exactly two edges. Every face through `v_kill` loses
    /// one corner, so none of them may be a triangle. The two far endpoints
    /// must not already be connected. Returns the stretched edge.
    /// ```text
    ///   a ---- e_kill ---- v_kill ---- e_keep ---- b
    ///
    ///   a ----------------- e_keep ---------------- b
    /// ```
    pub fn join_edge_kill_vert(&mut self, e_kill: EH, v_kill: VH) -> Result<EH, Error> {
        let a = self.other_vertex(e_kill, v_kill)?;
        let valence = self.vertex_edge_count(v_kill)?;
        if valence != 2 {
            return Err(Error::InvalidValence(v_kill, valence, 2));
        }
        let e_keep = self
            .disk_links(v_kill)?
            .into_iter()
            .map(|dh| dh.edge())
            .find(|e| *e != e_kill)
            .ok_or(Error::NonCircular)?;
        let b = self.other_vertex(e_keep, v_kill)?;
        if a == b {
            return Err(Error::DegenerateEdge(a));
        }
        let mut loops = Vec::new();
        for rh in self.radial_links(e_kill)? {
            let l = rh.owner();
            let lp = self.loop_data(l)?;
            if self.face_data(lp.face)?.edge_count <= 3 {
                return Err(Error::DegenerateFace(lp.face));
            }
            loops.push((l, lp.vertex == a, lp.link.next));
        }
        if let Some(e) = self.existing_edge(a, b)? {
            return Err(Error::EdgeExists(a, b, e));
        }
        // No more errors from this point.
        for (l, from_a, next) in loops {
            if from_a {
                // a -> v_kill -> b becomes a -> b, starting at a.
                self.loop_mut(next).vertex = a;
            }
            self.drop_loop(l);
        }
        self.kill_edge(e_kill);
        self.move_edge_endpoint(e_keep, v_kill, a);
        self.kill_vertex(v_kill);
        log::debug!("Joined {e_kill} into {e_keep}, removed {v_kill}");
        Ok(e_keep)
    }

    /// Merge `v_kill` into `v_keep`. All edges and face corners of `v_kill`
    /// are moved over to `v_keep`, and `v_kill` is removed. `v_keep` keeps its
    /// position.
    ///
    /// An edge from `v_kill` to a common neighbour of both vertices is
    /// spliced into the edge from `v_keep` to that neighbour. The two vertices
    /// must not be connected and must not be used by the same face, since
    /// either would produce a degenerate edge or face.
    pub fn splice_vertices(&mut self, v_keep: VH, v_kill: VH) -> Result<VH, Error> {
        if v_keep == v_kill {
            return Err(Error::DuplicateVertex(v_keep));
        }
        if let Some(e) = self.existing_edge(v_keep, v_kill)? {
            return Err(Error::EdgeExists(v_keep, v_kill, e));
        }
        let keep_edges = self.disk_links(v_keep)?;
        let kill_edges = self.disk_links(v_kill)?;
        let mut keep_faces = Vec::new();
        for dh in &keep_edges {
            for rh in self.radial_links(dh.edge())? {
                keep_faces.push(self.loop_face(rh.owner())?);
            }
        }
        let mut corners = Vec::new();
        let mut parallel = Vec::new();
        for dh in &kill_edges {
            let e = dh.edge();
            let mut loops = Vec::new();
            for rh in self.radial_links(e)? {
                let l = rh.owner();
                let lp = self.loop_data(l)?;
                if keep_faces.contains(&lp.face) {
                    return Err(Error::SharedFace(v_keep, v_kill, lp.face));
                }
                if lp.vertex == v_kill {
                    corners.push(l);
                }
                loops.push(l);
            }
            let n = self.other_vertex(e, v_kill)?;
            if let Some(dst) = self.existing_edge(v_keep, n)? {
                parallel.push((dst, e, loops));
            }
        }
        // No more errors from this point.
        for dh in kill_edges {
            self.move_edge_endpoint(dh.edge(), v_kill, v_keep);
        }
        for l in corners {
            self.loop_mut(l).vertex = v_keep;
        }
        for (dst, src, loops) in &parallel {
            self.merge_edge(*dst, *src, loops);
        }
        self.kill_vertex(v_kill);
        log::debug!(
            "Spliced {v_kill} into {v_keep}, merging {} edges",
            parallel.len()
        );
        Ok(v_keep)
    }

    /// Merge `e_src` into `e_dst`, which must connect the same two vertices.
    /// Every face using `e_src` is moved over to `e_dst`, and `e_src` is
    /// removed. Returns `e_dst`.
    ///
    /// Such parallel edges show up when two vertices with a common neighbour
    /// are spliced, which is how `splice_vertices` uses this.
    pub fn splice_edges(&mut self, e_dst: EH, e_src: EH) -> Result<EH, Error> {
        if e_dst == e_src {
            return Err(Error::DuplicateEdge(e_dst));
        }
        let (a, b) = self.edge_vertices(e_dst)?;
        let (c, d) = self.edge_vertices(e_src)?;
        if !((a == c && b == d) || (a == d && b == c)) {
            return Err(Error::EdgeEndpointMismatch(e_dst, e_src));
        }
        let loops = self
            .radial_links(e_src)?
            .into_iter()
            .map(|rh| rh.owner())
            .collect::<Vec<_>>();
        // No more errors from this point.
        self.merge_edge(e_dst, e_src, &loops);
        log::debug!("Spliced {e_src} into {e_dst}");
        Ok(e_dst)
    }

    /// Merge two faces that share exactly one edge into one, removing `fb`
    /// and the shared edge. Returns `fa`, which now has the combined boundary.
    ///
    /// Only the endpoints of the shared edge may be common to both faces, and
    /// the faces must traverse the shared edge in opposite directions. The
    /// shared edge is kept if other faces still use it.
    pub fn join_faces(&mut self, fa: FH, fb: FH) -> Result<FH, Error> {
        let aloops = self.face_loops(fa)?;
        let bloops = self.face_loops(fb)?;
        let mut shared = Vec::new();
        for la in &aloops {
            let e = self.loop_edge(*la)?;
            for lb in &bloops {
                if self.loop_edge(*lb)? == e {
                    shared.push((*la, *lb, e));
                }
            }
        }
        let &[(la, lb, e)] = shared.as_slice() else {
            return Err(Error::FacesNotAdjacent(fa, fb, shared.len()));
        };
        let averts = self.face_vertices(fa)?;
        let nshared = self
            .face_vertices(fb)?
            .iter()
            .filter(|v| averts.contains(v))
            .count();
        if nshared != 2 {
            return Err(Error::SharedVertices(fa, fb));
        }
        if self.loop_vertex(la)? == self.loop_vertex(lb)? {
            return Err(Error::WindingMismatch(e));
        }
        // No more errors from this point.
        let (a_prev, a_next) = {
            let link = self.loop_mut(la).link;
            (link.prev, link.next)
        };
        let (b_prev, b_next) = {
            let link = self.loop_mut(lb).link;
            (link.prev, link.next)
        };
        for l in &bloops {
            self.loop_mut(*l).face = fa;
        }
        // Bridge the two boundaries around the shared edge, leaving `la` and
        // `lb` in a cycle of their own.
        self.set_next(a_prev, b_next);
        self.set_next(b_prev, a_next);
        self.set_next(la, lb);
        self.set_next(lb, la);
        let face = self.face_mut(fa);
        face.edge_count = (aloops.len() + bloops.len() - 2) as u32;
        face.first = a_next;
        for l in [la, lb] {
            self.unlink(l);
            self.radial_remove(e, l);
            self.loops.remove(l.index() as usize);
        }
        self.faces.remove(fb.index() as usize);
        if self.edge_mut(e).face_count == 0 {
            self.kill_edge(e);
        }
        log::debug!("Joined {fb} into {fa} across {e}");
        Ok(fa)
    }
}
