/*!
Traversals over the neighbourhood of an element.

These walk the cycles without checking that they are circular, and stop
quietly at anything missing, so they are suitable for queries on a mesh that
is known to be healthy. Use [`Mesh::disk_links`], [`Mesh::radial_links`] and
[`Mesh::face_loops`] to get the same information with corruption reported as
an error.
*/

use crate::{
    element::{DH, EH, FH, Handle, LH, RH, VH},
    list::CircularList,
    mesh::Mesh,
};

impl Mesh {
    fn disk_head(&self, v: VH) -> Option<DH> {
        self.vertices.get(v.index() as usize).and_then(|v| v.disk)
    }

    fn radial_head(&self, e: EH) -> Option<RH> {
        self.edges.get(e.index() as usize).and_then(|e| e.radial)
    }

    fn boundary_head(&self, f: FH) -> Option<LH> {
        self.faces.get(f.index() as usize).map(|f| f.first)
    }

    /// Edges incident on `v`, in disk cycle order.
    pub fn ve_iter(&self, v: VH) -> impl Iterator<Item = EH> + use<'_> {
        self.cycle_unchecked(self.disk_head(v), true)
            .map(|dh: DH| dh.edge())
    }

    /// Vertices connected to `v` by an edge.
    pub fn vv_iter(&self, v: VH) -> impl Iterator<Item = VH> + use<'_> {
        self.cycle_unchecked(self.disk_head(v), true)
            .filter_map(move |dh: DH| {
                let edge = self.edges.get(dh.edge().index() as usize)?;
                Some(edge.verts[dh.side() ^ 1])
            })
    }

    /// Faces with a corner at `v`.
    pub fn vf_iter(&self, v: VH) -> impl Iterator<Item = FH> + use<'_> {
        self.ve_iter(v)
            .flat_map(move |e| self.el_iter(e))
            .filter_map(move |l| {
                let lp = self.loops.get(l.index() as usize)?;
                (lp.vertex == v).then_some(lp.face)
            })
    }

    /// Loops on `e`, one per face using it, in radial cycle order.
    pub fn el_iter(&self, e: EH) -> impl Iterator<Item = LH> + use<'_> {
        self.cycle_unchecked(self.radial_head(e), true)
            .map(|rh: RH| rh.owner())
    }

    /// Faces using `e`.
    pub fn ef_iter(&self, e: EH) -> impl Iterator<Item = FH> + use<'_> {
        self.el_iter(e)
            .filter_map(move |l| self.loops.get(l.index() as usize).map(|lp| lp.face))
    }

    /// Loops around `f`, in boundary order.
    pub fn fl_iter(&self, f: FH) -> impl Iterator<Item = LH> + use<'_> {
        self.cycle_unchecked(self.boundary_head(f), true)
    }

    /// Loops around `f`, against the boundary order.
    pub fn fl_rev_iter(&self, f: FH) -> impl Iterator<Item = LH> + use<'_> {
        self.cycle_unchecked(self.boundary_head(f), false)
    }

    pub fn fv_iter(&self, f: FH) -> impl Iterator<Item = VH> + use<'_> {
        self.fl_iter(f)
            .filter_map(move |l| self.loops.get(l.index() as usize).map(|lp| lp.vertex))
    }

    pub fn fe_iter(&self, f: FH) -> impl Iterator<Item = EH> + use<'_> {
        self.fl_iter(f)
            .filter_map(move |l| self.loops.get(l.index() as usize).map(|lp| lp.edge))
    }
}
