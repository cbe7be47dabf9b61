use crate::{
    element::{EH, FH, VH},
    error::Error,
    mesh::Mesh,
};

impl Mesh {
    /// Add a vertex with no edges.
    pub fn add_vertex(&mut self, pos: glam::Vec3) -> VH {
        self.new_vertex(pos)
    }

    pub fn add_vertices(&mut self, positions: &[glam::Vec3]) -> Vec<VH> {
        positions.iter().map(|p| self.new_vertex(*p)).collect()
    }

    /// Add an edge connecting `a` and `b`.
    ///
    /// If the two vertices are already connected, the existing edge is
    /// returned and nothing is created.
    pub fn add_edge(&mut self, a: VH, b: VH) -> Result<EH, Error> {
        if let Some(e) = self.existing_edge(a, b)? {
            log::trace!("Reusing {e} between {a} and {b}");
            return Ok(e);
        }
        Ok(self.new_edge(a, b))
    }

    /// Add a face with the given boundary, creating any missing edges.
    ///
    /// If a face with the same boundary already exists, in either winding,
    /// it is returned and nothing is created. Nothing is created either when
    /// the face is rejected.
    pub fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error> {
        if verts.len() < 3 {
            return Err(Error::TooFewVertices(verts.len()));
        }
        self.check_distinct_vertices(verts)?;
        if let Some(f) = self.existing_face(verts)? {
            log::trace!("Reusing {f} for boundary {verts:?}");
            return Ok(f);
        }
        let edges = self.edges_from_verts(verts)?;
        Ok(self.new_face(verts, &edges))
    }

    pub fn add_tri_face(&mut self, v0: VH, v1: VH, v2: VH) -> Result<FH, Error> {
        self.add_face(&[v0, v1, v2])
    }

    pub fn add_quad_face(&mut self, v0: VH, v1: VH, v2: VH, v3: VH) -> Result<FH, Error> {
        self.add_face(&[v0, v1, v2, v3])
    }

    /// Add a face from its boundary vertices and the edges between them.
    ///
    /// `edges[i]` must connect `verts[i]` to `verts[i + 1]`, wrapping around
    /// at the end.
    pub fn add_face_with_edges(&mut self, verts: &[VH], edges: &[EH]) -> Result<FH, Error> {
        self.check_face_input(verts, edges)?;
        if let Some(f) = self.existing_face(verts)? {
            log::trace!("Reusing {f} for boundary {verts:?}");
            return Ok(f);
        }
        Ok(self.new_face(verts, edges))
    }

    fn check_face_input(&self, verts: &[VH], edges: &[EH]) -> Result<(), Error> {
        if verts.len() < 3 {
            return Err(Error::TooFewVertices(verts.len()));
        }
        if verts.len() != edges.len() {
            return Err(Error::MismatchedArrayLengths(verts.len(), edges.len()));
        }
        self.check_distinct_vertices(verts)?;
        for (i, e) in edges.iter().enumerate() {
            if edges[..i].contains(e) {
                return Err(Error::DuplicateEdge(*e));
            }
            let edge = self.edge_data(*e)?;
            let v = verts[i];
            if !edge.has_vertex(v) || !edge.has_vertex(verts[(i + 1) % verts.len()]) {
                return Err(Error::EdgeVertexMismatch(*e, v));
            }
        }
        Ok(())
    }
}
