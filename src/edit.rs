use crate::{
    element::{EH, FH, Face, LH, VH},
    error::Error,
    list::CircularList,
    mesh::Mesh,
};

/// Everything that has to go when an element is removed, gathered before
/// anything is touched.
#[derive(Default)]
struct Removal {
    faces: Vec<(FH, Vec<LH>)>,
    edges: Vec<EH>,
}

impl Removal {
    fn has_face(&self, f: FH) -> bool {
        self.faces.iter().any(|(fh, _)| *fh == f)
    }
}

impl Mesh {
    fn gather_face(&self, f: FH, removal: &mut Removal) -> Result<(), Error> {
        if !removal.has_face(f) {
            removal.faces.push((f, self.face_loops(f)?));
        }
        Ok(())
    }

    fn gather_edge(&self, e: EH, removal: &mut Removal) -> Result<(), Error> {
        for rh in self.radial_links(e)? {
            let f = self.loop_face(rh.owner())?;
            self.gather_face(f, removal)?;
        }
        removal.edges.push(e);
        Ok(())
    }

    fn apply_removal(&mut self, removal: &Removal) {
        for (f, loops) in &removal.faces {
            self.kill_face(*f, loops);
        }
        for e in &removal.edges {
            self.kill_edge(*e);
        }
    }

    /// Remove a face and its loops. The vertices and edges of the face are
    /// left in place.
    pub fn remove_face(&mut self, f: FH) -> Result<(), Error> {
        let loops = self.face_loops(f)?;
        log::debug!("Removing {f} with {} loops", loops.len());
        self.kill_face(f, &loops);
        Ok(())
    }

    /// Remove an edge, along with every face that uses it.
    pub fn remove_edge(&mut self, e: EH) -> Result<(), Error> {
        let mut removal = Removal::default();
        self.gather_edge(e, &mut removal)?;
        log::debug!("Removing {e} and {} faces", removal.faces.len());
        self.apply_removal(&removal);
        Ok(())
    }

    /// Remove a vertex, along with all its edges and every face using those
    /// edges.
    pub fn remove_vertex(&mut self, v: VH) -> Result<(), Error> {
        let mut removal = Removal::default();
        for dh in self.disk_links(v)? {
            self.gather_edge(dh.edge(), &mut removal)?;
        }
        log::debug!(
            "Removing {v}, {} edges and {} faces",
            removal.edges.len(),
            removal.faces.len()
        );
        self.apply_removal(&removal);
        self.kill_vertex(v);
        Ok(())
    }

    /// Split `e` by inserting a vertex between its endpoints.
    ///
    /// The edge `e` is kept, and now connects the inserted vertex to the
    /// endpoint that is not `existing`. A new edge connects `existing` to the
    /// inserted vertex. Every face using `e` gets one more loop so its
    /// boundary passes through the inserted vertex.
    ///
    /// If `new_vert` is `None`, a vertex is created at the midpoint of `e`.
    /// A given vertex must not be connected to either endpoint, nor be a
    /// corner of any face using `e`. Returns the inserted vertex and the new
    /// edge.
    /// ```text
    ///   existing --------- e --------- other
    ///
    ///   existing -- enew -- vnew -- e -- other
    /// ```
    pub fn split_edge(
        &mut self,
        e: EH,
        existing: VH,
        new_vert: Option<VH>,
    ) -> Result<(VH, EH), Error> {
        let other = self.other_vertex(e, existing)?;
        if let Some(v) = new_vert {
            if v == existing || v == other {
                return Err(Error::DegenerateEdge(v));
            }
            if let Some(ee) = self.existing_edge(existing, v)? {
                return Err(Error::EdgeExists(existing, v, ee));
            }
            if let Some(ee) = self.existing_edge(v, other)? {
                return Err(Error::EdgeExists(v, other, ee));
            }
        }
        let loops = self
            .radial_links(e)?
            .into_iter()
            .map(|rh| {
                let l = rh.owner();
                let lp = self.loop_data(l)?;
                if lp.vertex == existing || lp.vertex == other {
                    Ok((l, lp.vertex == existing, lp.face))
                } else {
                    Err(Error::LoopEdgeVertexMismatch(l))
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        if let Some(v) = new_vert {
            // A face would visit `v` twice.
            for (_, _, f) in &loops {
                if self.face_vertices(*f)?.contains(&v) {
                    return Err(Error::SharedFace(existing, v, *f));
                }
            }
        }
        // No more errors from this point.
        let vnew = match new_vert {
            Some(v) => v,
            None => {
                let mid = (self.point(existing)? + self.point(other)?) * 0.5;
                self.new_vertex(mid)
            }
        };
        let enew = self.new_edge(existing, vnew);
        for (l, from_existing, f) in loops {
            let lnew = if from_existing {
                // The loop ran existing -> other. It now starts at the new
                // vertex, and the new loop covers existing -> vnew before it.
                self.loop_mut(l).vertex = vnew;
                let lnew = self.new_loop(existing, enew, f);
                self.insert_before(l, lnew);
                let face = self.face_mut(f);
                if face.first == l {
                    face.first = lnew;
                }
                lnew
            } else {
                // The loop ran other -> existing, and now stops at vnew.
                let lnew = self.new_loop(vnew, enew, f);
                self.insert_after(l, lnew);
                lnew
            };
            self.radial_append(enew, lnew);
            self.face_mut(f).edge_count += 1;
        }
        self.move_edge_endpoint(e, existing, vnew);
        log::debug!("Split {e} at {vnew}, new edge {enew}");
        Ok((vnew, enew))
    }

    /// Cut `f` in two along a new edge between the vertices of the corners
    /// `la` and `lb`, which must be distinct and not next to each other on the
    /// boundary. If the two vertices are already connected, that edge is used
    /// instead of a new one.
    ///
    /// `f` keeps the corners from `la` up to `lb`, and the new face gets the
    /// corners from `lb` up to `la`. Returns the new face and the cutting
    /// edge.
    /// ```text
    ///   d ------- c            d ------- c
    ///   |         |            |  new  / |
    ///   |    f    |     =>     |     /   |
    ///   |         |            |   /   f |
    ///   a ------- b            a ------- b
    /// ```
    pub fn split_face(&mut self, f: FH, la: LH, lb: LH) -> Result<(FH, EH), Error> {
        let loops = self.face_loops(f)?;
        let n = loops.len();
        let ia = loops
            .iter()
            .position(|l| *l == la)
            .ok_or(Error::LoopNotInFace(la, f))?;
        let ib = loops
            .iter()
            .position(|l| *l == lb)
            .ok_or(Error::LoopNotInFace(lb, f))?;
        if ia == ib || (ia + 1) % n == ib || (ib + 1) % n == ia {
            return Err(Error::AdjacentLoops(la, lb));
        }
        let va = self.loop_vertex(la)?;
        let vb = self.loop_vertex(lb)?;
        let existing = self.existing_edge(va, vb)?;
        let old_first = self.face_data(f)?.first;
        // No more errors from this point.
        let e = match existing {
            Some(e) => e,
            None => self.new_edge(va, vb),
        };
        let a_prev = loops[(ia + n - 1) % n];
        let b_prev = loops[(ib + n - 1) % n];
        let kept = (ib + n - ia) % n;
        let fi = self.faces.push(Face {
            first: lb,
            edge_count: (n - kept + 1) as u32,
        });
        let fnew = FH::from(fi as u32);
        // `lf` closes f from vb back to va, `lnew` closes the new face from va
        // to vb.
        let lf = self.new_loop(vb, e, f);
        let lnew = self.new_loop(va, e, fnew);
        self.set_next(b_prev, lf);
        self.set_next(lf, la);
        self.set_next(a_prev, lnew);
        self.set_next(lnew, lb);
        for i in 0..(n - kept) {
            let l = loops[(ib + i) % n];
            self.loop_mut(l).face = fnew;
        }
        self.radial_append(e, lf);
        self.radial_append(e, lnew);
        if self.loop_mut(old_first).face == fnew {
            self.face_mut(fnew).first = old_first;
            self.face_mut(f).first = lf;
        } else {
            self.face_mut(fnew).first = lnew;
        }
        self.face_mut(f).edge_count = (kept + 1) as u32;
        log::debug!("Split {f} into {fnew} along {e}");
        Ok((fnew, e))
    }

    /// Reverse the winding of `f`, keeping its first vertex.
    pub fn flip_face(&mut self, f: FH) -> Result<(), Error> {
        let loops = self.face_loops(f)?;
        self.reverse_boundary(f, &loops);
        log::debug!("Flipped {f}");
        Ok(())
    }
}
