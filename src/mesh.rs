use crate::{
    element::{DH, EH, Edge, FH, Face, Handle, LH, Loop, RH, VH, Vertex},
    error::Error,
    list::CircularList,
};
use stable_vec::StableVec;

/**
 * An editable polygon mesh.
 *
 * The mesh owns every vertex, edge, loop and face in one stable arena per
 * element kind. Elements are referred to by handles, and removing an element
 * never moves or reuses the slots of other elements, so handles held by the
 * caller stay meaningful: a handle to a removed element is reported as
 * deleted instead of silently referring to something else.
 */
#[derive(Debug, Clone)]
pub struct Mesh {
    pub(crate) vertices: StableVec<Vertex>,
    pub(crate) edges: StableVec<Edge>,
    pub(crate) loops: StableVec<Loop>,
    pub(crate) faces: StableVec<Face>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    pub fn new() -> Self {
        Mesh {
            vertices: StableVec::new(),
            edges: StableVec::new(),
            loops: StableVec::new(),
            faces: StableVec::new(),
        }
    }

    pub fn with_capacity(nverts: usize, nedges: usize, nfaces: usize) -> Self {
        Mesh {
            vertices: StableVec::with_capacity(nverts),
            edges: StableVec::with_capacity(nedges),
            loops: StableVec::with_capacity(nfaces * 4),
            faces: StableVec::with_capacity(nfaces),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.num_elements()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.num_elements()
    }

    pub fn num_loops(&self) -> usize {
        self.loops.num_elements()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.num_elements()
    }

    /// Iterate over the vertices of the mesh. The order carries no meaning.
    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<'_> {
        self.vertices.indices().map(|i| VH::from(i as u32))
    }

    pub fn edges(&self) -> impl Iterator<Item = EH> + use<'_> {
        self.edges.indices().map(|i| EH::from(i as u32))
    }

    pub fn loops(&self) -> impl Iterator<Item = LH> + use<'_> {
        self.loops.indices().map(|i| LH::from(i as u32))
    }

    pub fn faces(&self) -> impl Iterator<Item = FH> + use<'_> {
        self.faces.indices().map(|i| FH::from(i as u32))
    }

    pub fn is_valid_vertex(&self, v: VH) -> bool {
        self.vertices.get(v.index() as usize).is_some()
    }

    pub fn is_valid_edge(&self, e: EH) -> bool {
        self.edges.get(e.index() as usize).is_some()
    }

    pub fn is_valid_loop(&self, l: LH) -> bool {
        self.loops.get(l.index() as usize).is_some()
    }

    pub fn is_valid_face(&self, f: FH) -> bool {
        self.faces.get(f.index() as usize).is_some()
    }

    pub(crate) fn vertex_data(&self, v: VH) -> Result<&Vertex, Error> {
        self.vertices
            .get(v.index() as usize)
            .ok_or(Error::DeletedVertex(v))
    }

    pub(crate) fn edge_data(&self, e: EH) -> Result<&Edge, Error> {
        self.edges
            .get(e.index() as usize)
            .ok_or(Error::DeletedEdge(e))
    }

    pub(crate) fn loop_data(&self, l: LH) -> Result<&Loop, Error> {
        self.loops
            .get(l.index() as usize)
            .ok_or(Error::DeletedLoop(l))
    }

    pub(crate) fn face_data(&self, f: FH) -> Result<&Face, Error> {
        self.faces
            .get(f.index() as usize)
            .ok_or(Error::DeletedFace(f))
    }

    // The `_mut` accessors are only used after the handle has been validated,
    // so they panic on a removed element.

    pub(crate) fn vertex_mut(&mut self, v: VH) -> &mut Vertex {
        &mut self.vertices[v.index() as usize]
    }

    pub(crate) fn edge_mut(&mut self, e: EH) -> &mut Edge {
        &mut self.edges[e.index() as usize]
    }

    pub(crate) fn loop_mut(&mut self, l: LH) -> &mut Loop {
        &mut self.loops[l.index() as usize]
    }

    pub(crate) fn face_mut(&mut self, f: FH) -> &mut Face {
        &mut self.faces[f.index() as usize]
    }

    pub fn point(&self, v: VH) -> Result<glam::Vec3, Error> {
        Ok(self.vertex_data(v)?.pos)
    }

    pub fn set_point(&mut self, v: VH, pos: glam::Vec3) -> Result<(), Error> {
        self.vertex_data(v)?;
        self.vertex_mut(v).pos = pos;
        Ok(())
    }

    /// The position of `v` as `[x, y, z]`.
    pub fn to_array(&self, v: VH) -> Result<[f32; 3], Error> {
        Ok(self.point(v)?.to_array())
    }

    pub fn vertex_edge_count(&self, v: VH) -> Result<u32, Error> {
        Ok(self.vertex_data(v)?.edge_count)
    }

    /// The entry point into the disk cycle of `v`, if it has any edges.
    pub fn vertex_disk_link(&self, v: VH) -> Result<Option<DH>, Error> {
        Ok(self.vertex_data(v)?.disk)
    }

    pub fn edge_vertices(&self, e: EH) -> Result<(VH, VH), Error> {
        let edge = self.edge_data(e)?;
        Ok((edge.verts[0], edge.verts[1]))
    }

    pub fn edge_face_count(&self, e: EH) -> Result<u32, Error> {
        Ok(self.edge_data(e)?.face_count)
    }

    /// The entry point into the radial cycle of `e`, if any face uses it.
    pub fn edge_radial_link(&self, e: EH) -> Result<Option<RH>, Error> {
        Ok(self.edge_data(e)?.radial)
    }

    pub fn face_edge_count(&self, f: FH) -> Result<u32, Error> {
        Ok(self.face_data(f)?.edge_count)
    }

    /// The entry point into the boundary cycle of `f`.
    pub fn face_loop(&self, f: FH) -> Result<LH, Error> {
        Ok(self.face_data(f)?.first)
    }

    pub fn loop_vertex(&self, l: LH) -> Result<VH, Error> {
        Ok(self.loop_data(l)?.vertex)
    }

    pub fn loop_edge(&self, l: LH) -> Result<EH, Error> {
        Ok(self.loop_data(l)?.edge)
    }

    pub fn loop_face(&self, l: LH) -> Result<FH, Error> {
        Ok(self.loop_data(l)?.face)
    }

    pub fn loop_next(&self, l: LH) -> Result<LH, Error> {
        Ok(self.loop_data(l)?.link.next)
    }

    pub fn loop_prev(&self, l: LH) -> Result<LH, Error> {
        Ok(self.loop_data(l)?.link.prev)
    }

    pub fn has_vertex(&self, e: EH, v: VH) -> Result<bool, Error> {
        Ok(self.edge_data(e)?.has_vertex(v))
    }

    /// The endpoint of `e` that is not `v`.
    pub fn other_vertex(&self, e: EH, v: VH) -> Result<VH, Error> {
        self.edge_data(e)?
            .other(v)
            .ok_or(Error::InvalidVertex(v, e))
    }

    /// The disk link that threads `e` into the disk cycle of `v`.
    pub fn disk_link(&self, e: EH, v: VH) -> Result<DH, Error> {
        self.edge_data(e)?
            .side_of(v)
            .map(|side| e.disk_link(side))
            .ok_or(Error::InvalidVertex(v, e))
    }

    /// Step from `e` to the neighbouring disk link around `v`.
    pub fn next_edge_link(&self, e: EH, v: VH, forward: bool) -> Result<DH, Error> {
        let dh = self.disk_link(e, v)?;
        let link = self.try_link(dh).ok_or(Error::NonCircular)?;
        let next = if forward { link.next } else { link.prev };
        match self.try_link(next) {
            Some(_) => Ok(next),
            None => Err(Error::NonCircular),
        }
    }

    pub fn prev_edge_link(&self, e: EH, v: VH) -> Result<DH, Error> {
        self.next_edge_link(e, v, false)
    }

    /// The disk cycle of `v`, starting at its entry point. Fails if the cycle
    /// is corrupt.
    pub fn disk_links(&self, v: VH) -> Result<Vec<DH>, Error> {
        match self.vertex_data(v)?.disk {
            Some(dh) => self.snapshot(dh),
            None => Ok(Vec::new()),
        }
    }

    /// The radial cycle of `e`, starting at its entry point. Fails if the
    /// cycle is corrupt.
    pub fn radial_links(&self, e: EH) -> Result<Vec<RH>, Error> {
        match self.edge_data(e)?.radial {
            Some(rh) => self.snapshot(rh),
            None => Ok(Vec::new()),
        }
    }

    /// The boundary cycle of `f`, starting at its entry point. Fails if the
    /// cycle is corrupt.
    pub fn face_loops(&self, f: FH) -> Result<Vec<LH>, Error> {
        self.snapshot(self.face_data(f)?.first)
    }

    pub fn face_vertices(&self, f: FH) -> Result<Vec<VH>, Error> {
        self.face_loops(f)?
            .into_iter()
            .map(|l| self.loop_vertex(l))
            .collect()
    }

    pub fn face_edges(&self, f: FH) -> Result<Vec<EH>, Error> {
        self.face_loops(f)?
            .into_iter()
            .map(|l| self.loop_edge(l))
            .collect()
    }

    /// Check if walking the boundary cycle from `l`, forward or backward,
    /// visits exactly `verts` in order.
    pub fn loop_vertices_match(&self, l: LH, verts: &[VH], forward: bool) -> Result<bool, Error> {
        let mut count = 0usize;
        for lh in self.cycle(l, forward) {
            let lh = lh?;
            match verts.get(count) {
                Some(v) if *v == self.loop_vertex(lh)? => count += 1,
                _ => return Ok(false),
            }
        }
        Ok(count == verts.len())
    }

    /// Find the edge connecting `a` and `b`, if any.
    ///
    /// Only the disk cycle of whichever vertex has fewer edges is searched.
    pub fn existing_edge(&self, a: VH, b: VH) -> Result<Option<EH>, Error> {
        if a == b {
            return Err(Error::DegenerateEdge(a));
        }
        let va = self.vertex_data(a)?;
        let vb = self.vertex_data(b)?;
        let (v, start) = match (va.disk, vb.disk) {
            (Some(da), Some(db)) => {
                if va.edge_count < vb.edge_count {
                    (a, da)
                } else {
                    (b, db)
                }
            }
            _ => return Ok(None),
        };
        let other = if v == a { b } else { a };
        for dh in self.cycle(start, true) {
            let e = dh?.edge();
            if self.edge_data(e)?.has_vertex(other) {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }

    /// Find a face whose boundary visits exactly `verts`, in either winding.
    pub fn existing_face(&self, verts: &[VH]) -> Result<Option<FH>, Error> {
        let Some(&first) = verts.first() else {
            return Ok(None);
        };
        let Some(dstart) = self.vertex_data(first)?.disk else {
            return Ok(None);
        };
        for dh in self.cycle(dstart, true) {
            let Some(rstart) = self.edge_data(dh?.edge())?.radial else {
                continue;
            };
            for rh in self.cycle(rstart, true) {
                let l = rh?.owner();
                let lp = self.loop_data(l)?;
                if lp.vertex != first
                    || self.face_data(lp.face)?.edge_count as usize != verts.len()
                {
                    continue;
                }
                if self.loop_vertices_match(l, verts, true)?
                    || self.loop_vertices_match(l, verts, false)?
                {
                    return Ok(Some(lp.face));
                }
            }
        }
        Ok(None)
    }

    /// Get the edges connecting consecutive vertices of a closed polygon,
    /// creating the ones that don't exist yet.
    pub fn edges_from_verts(&mut self, verts: &[VH]) -> Result<Vec<EH>, Error> {
        self.check_distinct_vertices(verts)?;
        (0..verts.len())
            .map(|i| self.add_edge(verts[i], verts[(i + 1) % verts.len()]))
            .collect()
    }

    pub(crate) fn check_distinct_vertices(&self, verts: &[VH]) -> Result<(), Error> {
        for (i, v) in verts.iter().enumerate() {
            self.vertex_data(*v)?;
            if verts[..i].contains(v) {
                return Err(Error::DuplicateVertex(*v));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Handle, Mesh, VH};
    use glam::vec3;

    fn triangle() -> (Mesh, [VH; 3]) {
        let mut mesh = Mesh::new();
        let verts = [
            mesh.add_vertex(vec3(0.0, 0.0, 0.0)),
            mesh.add_vertex(vec3(1.0, 0.0, 0.0)),
            mesh.add_vertex(vec3(0.0, 1.0, 0.0)),
        ];
        mesh.add_face(&verts).expect("Cannot add face");
        (mesh, verts)
    }

    #[test]
    fn t_existing_edge() {
        let (mesh, [a, b, c]) = triangle();
        let e = mesh
            .existing_edge(a, b)
            .unwrap()
            .expect("Edge must exist");
        assert_eq!(mesh.existing_edge(b, a).unwrap(), Some(e));
        assert!(mesh.existing_edge(b, c).unwrap().is_some());
        assert_eq!(mesh.existing_edge(a, a), Err(Error::DegenerateEdge(a)));
    }

    #[test]
    fn t_existing_edge_lonely_vertex() {
        let (mut mesh, [a, ..]) = triangle();
        let d = mesh.add_vertex(vec3(5.0, 5.0, 5.0));
        assert_eq!(mesh.existing_edge(a, d).unwrap(), None);
        assert_eq!(mesh.existing_edge(d, a).unwrap(), None);
    }

    #[test]
    fn t_existing_face_either_winding() {
        let (mesh, [a, b, c]) = triangle();
        let f = mesh.faces().next().expect("Must have a face");
        assert_eq!(mesh.existing_face(&[a, b, c]).unwrap(), Some(f));
        assert_eq!(mesh.existing_face(&[a, c, b]).unwrap(), Some(f));
        // Rotations that don't start at the same vertex are found through
        // the loop anchored at the first vertex.
        assert_eq!(mesh.existing_face(&[b, c, a]).unwrap(), Some(f));
        assert_eq!(mesh.existing_face(&[a, b]).unwrap(), None);
        assert_eq!(mesh.existing_face(&[]).unwrap(), None);
    }

    #[test]
    fn t_edges_from_verts() {
        let mut mesh = Mesh::new();
        let verts: Vec<_> = (0..4)
            .map(|i| mesh.add_vertex(vec3(i as f32, 0.0, 0.0)))
            .collect();
        let edges = mesh.edges_from_verts(&verts).unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(mesh.num_edges(), 4);
        // Second call reuses everything.
        assert_eq!(mesh.edges_from_verts(&verts).unwrap(), edges);
        assert_eq!(mesh.num_edges(), 4);
        assert_eq!(
            mesh.edges_from_verts(&[verts[0], verts[1], verts[0]]),
            Err(Error::DuplicateVertex(verts[0]))
        );
        assert_eq!(mesh.num_edges(), 4);
    }

    #[test]
    fn t_accessors() {
        let (mesh, [a, b, _]) = triangle();
        let e = mesh.existing_edge(a, b).unwrap().unwrap();
        assert_eq!(mesh.other_vertex(e, a).unwrap(), b);
        assert_eq!(mesh.other_vertex(e, b).unwrap(), a);
        assert!(mesh.has_vertex(e, a).unwrap());
        assert_eq!(mesh.to_array(b).unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(mesh.edge_face_count(e).unwrap(), 1);
        assert_eq!(mesh.vertex_edge_count(a).unwrap(), 2);
        assert_eq!(a.valence(&mesh).unwrap(), 2);
        let f = mesh.faces().next().unwrap();
        assert_eq!(f.valence(&mesh).unwrap(), 3);
        assert_eq!(mesh.face_vertices(f).unwrap(), vec![a, b, VH::from(2u32)]);
        assert_eq!(f.index(), 0);
    }

    #[test]
    fn t_other_vertex_foreign() {
        let (mut mesh, [a, b, _]) = triangle();
        let d = mesh.add_vertex(vec3(3.0, 3.0, 3.0));
        let e = mesh.existing_edge(a, b).unwrap().unwrap();
        assert_eq!(mesh.other_vertex(e, d), Err(Error::InvalidVertex(d, e)));
        assert_eq!(e.other_vertex(&mesh, d), Err(Error::InvalidVertex(d, e)));
        assert_eq!(
            mesh.next_edge_link(e, d, true),
            Err(Error::InvalidVertex(d, e))
        );
    }

    #[test]
    fn t_next_prev_edge_link() {
        let (mesh, [a, b, c]) = triangle();
        let ab = mesh.existing_edge(a, b).unwrap().unwrap();
        let ca = mesh.existing_edge(c, a).unwrap().unwrap();
        // Only two edges around `a`, so both directions lead to the other.
        assert_eq!(mesh.next_edge_link(ab, a, true).unwrap().edge(), ca);
        assert_eq!(mesh.prev_edge_link(ab, a).unwrap().edge(), ca);
        assert_eq!(mesh.next_edge_link(ca, a, true).unwrap().edge(), ab);
    }
}
