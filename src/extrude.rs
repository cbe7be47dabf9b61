use crate::{
    element::{EH, FH, VH},
    error::Error,
    mesh::Mesh,
};
use glam::Vec3;

impl Mesh {
    /// Create a copy of `v` displaced by `offset`, connected to `v` by a new
    /// edge. Returns the new vertex and the new edge.
    pub fn extrude_vertex(&mut self, v: VH, offset: Vec3) -> Result<(VH, EH), Error> {
        let pos = self.point(v)? + offset;
        let nv = self.new_vertex(pos);
        let ne = self.new_edge(v, nv);
        log::debug!("Extruded {v} to {nv}");
        Ok((nv, ne))
    }

    /// Sweep `e` along `offset`, creating a quad between the edge and its
    /// displaced copy. Returns the displaced copy of the edge.
    ///
    /// If a face already uses `e`, the new quad traverses `e` in the opposite
    /// direction, so that the two faces agree on their orientation.
    /// ```text
    ///   na ------ par ------ nb
    ///   |                    |
    ///   ea       (new)       eb
    ///   |                    |
    ///   a -------- e ------- b
    /// ```
    pub fn extrude_edge(&mut self, e: EH, offset: Vec3) -> Result<EH, Error> {
        let (v0, v1) = self.edge_vertices(e)?;
        let (a, b) = match self.edge_radial_link(e)? {
            Some(rh) if self.loop_vertex(rh.owner())? == v0 => (v1, v0),
            _ => (v0, v1),
        };
        let pa = self.point(a)? + offset;
        let pb = self.point(b)? + offset;
        // No more errors from this point.
        let na = self.new_vertex(pa);
        let nb = self.new_vertex(pb);
        let ea = self.new_edge(na, a);
        let eb = self.new_edge(b, nb);
        let par = self.new_edge(nb, na);
        let f = self.new_face(&[a, b, nb, na], &[e, eb, par, ea]);
        log::debug!("Extruded {e} into {f}, new edge {par}");
        Ok(par)
    }

    /// Sweep `f` along `offset`, creating one quad wall per edge of `f`, and a
    /// cap made of the displaced vertices. Returns the cap.
    ///
    /// The cap has the same winding as `f`. The original face is removed
    /// unless `keep_original` is true, in which case it is flipped to face
    /// away from the walls, and the result encloses a consistently oriented
    /// volume.
    pub fn extrude_face(&mut self, f: FH, offset: Vec3, keep_original: bool) -> Result<FH, Error> {
        let loops = self.face_loops(f)?;
        let verts = loops
            .iter()
            .map(|l| self.loop_vertex(*l))
            .collect::<Result<Vec<_>, Error>>()?;
        let edges = loops
            .iter()
            .map(|l| self.loop_edge(*l))
            .collect::<Result<Vec<_>, Error>>()?;
        let points = verts
            .iter()
            .map(|v| self.point(*v).map(|p| p + offset))
            .collect::<Result<Vec<_>, Error>>()?;
        // No more errors from this point.
        let n = verts.len();
        let nverts: Vec<VH> = points.iter().map(|p| self.new_vertex(*p)).collect();
        let sides: Vec<EH> = (0..n)
            .map(|i| self.new_edge(verts[i], nverts[i]))
            .collect();
        let tops: Vec<EH> = (0..n)
            .map(|i| self.new_edge(nverts[i], nverts[(i + 1) % n]))
            .collect();
        for i in 0..n {
            let j = (i + 1) % n;
            // The wall traverses the original edge the same way `f` does, and
            // the top edge against the cap.
            self.new_face(
                &[verts[i], verts[j], nverts[j], nverts[i]],
                &[edges[i], sides[j], tops[i], sides[i]],
            );
        }
        let cap = self.new_face(&nverts, &tops);
        if keep_original {
            // The walls took over the winding of `f` along its edges.
            self.reverse_boundary(f, &loops);
        } else {
            self.kill_face(f, &loops);
        }
        log::debug!("Extruded {f} into {cap} with {n} walls");
        Ok(cap)
    }
}
