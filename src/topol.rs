/*!
Low level splicing of the disk, radial and boundary cycles.

Nothing in here validates its input. The operators in `create`, `edit`,
`extrude` and `join` check every precondition first and then call into these
helpers, which are not allowed to fail.
*/

use crate::{
    element::{DH, EH, Edge, FH, Face, Handle, LH, Loop, RH, VH, Vertex},
    list::{CircularList, Link},
    mesh::Mesh,
};

impl CircularList<DH> for Mesh {
    fn try_link(&self, h: DH) -> Option<&Link<DH>> {
        self.edges
            .get(h.edge().index() as usize)
            .map(|e| &e.disk[h.side()])
    }

    fn link_mut(&mut self, h: DH) -> &mut Link<DH> {
        &mut self.edge_mut(h.edge()).disk[h.side()]
    }

    fn max_cycle_len(&self) -> usize {
        self.edges.num_elements() * 2
    }
}

impl CircularList<LH> for Mesh {
    fn try_link(&self, h: LH) -> Option<&Link<LH>> {
        self.loops.get(h.index() as usize).map(|l| &l.link)
    }

    fn link_mut(&mut self, h: LH) -> &mut Link<LH> {
        &mut self.loop_mut(h).link
    }

    fn max_cycle_len(&self) -> usize {
        self.loops.num_elements()
    }
}

impl CircularList<RH> for Mesh {
    fn try_link(&self, h: RH) -> Option<&Link<RH>> {
        self.loops.get(h.owner().index() as usize).map(|l| &l.radial)
    }

    fn link_mut(&mut self, h: RH) -> &mut Link<RH> {
        &mut self.loop_mut(h.owner()).radial
    }

    fn max_cycle_len(&self) -> usize {
        self.loops.num_elements()
    }
}

impl Mesh {
    pub(crate) fn new_vertex(&mut self, pos: glam::Vec3) -> VH {
        let vi = self.vertices.push(Vertex {
            pos,
            disk: None,
            edge_count: 0,
        });
        VH::from(vi as u32)
    }

    /// Allocate an edge and thread it into the disk cycles of both endpoints.
    /// The caller guarantees `a != b` and that no edge connects them yet.
    pub(crate) fn new_edge(&mut self, a: VH, b: VH) -> EH {
        let placeholder = Link::lonely(DH::from(0u32));
        let ei = self.edges.push(Edge {
            verts: [a, b],
            disk: [placeholder, placeholder],
            radial: None,
            face_count: 0,
        });
        let e = EH::from(ei as u32);
        let (d0, d1) = e.disk_links();
        self.edge_mut(e).disk = [Link::lonely(d0), Link::lonely(d1)];
        self.disk_append(a, d0);
        self.disk_append(b, d1);
        e
    }

    /// Allocate a loop that is not part of any cycle yet.
    pub(crate) fn new_loop(&mut self, vertex: VH, edge: EH, face: FH) -> LH {
        let li = self.loops.push(Loop {
            vertex,
            edge,
            face,
            link: Link::lonely(LH::from(0u32)),
            radial: Link::lonely(RH::from(0u32)),
        });
        let l = LH::from(li as u32);
        let lp = self.loop_mut(l);
        lp.link = Link::lonely(l);
        lp.radial = Link::lonely(l.radial_link());
        l
    }

    /// Create a face from vertices and edges that are already known to be
    /// consistent, threading one new loop per corner into the boundary cycle
    /// and into the radial cycle of its edge.
    pub(crate) fn new_face(&mut self, verts: &[VH], edges: &[EH]) -> FH {
        debug_assert_eq!(verts.len(), edges.len());
        let fi = self.faces.push(Face {
            first: LH::from(0u32),
            edge_count: verts.len() as u32,
        });
        let f = FH::from(fi as u32);
        let mut prev: Option<LH> = None;
        for (v, e) in verts.iter().zip(edges.iter()) {
            let l = self.new_loop(*v, *e, f);
            match prev {
                Some(p) => self.insert_after(p, l),
                None => self.face_mut(f).first = l,
            }
            self.radial_append(*e, l);
            prev = Some(l);
        }
        f
    }

    /// Add the disk link `dh` to the disk cycle of `v`.
    pub(crate) fn disk_append(&mut self, v: VH, dh: DH) {
        let vert = self.vertex_mut(v);
        vert.edge_count += 1;
        let head = vert.disk;
        match head {
            Some(head) => self.insert_before(head, dh),
            None => {
                self.vertex_mut(v).disk = Some(dh);
                self.unlink(dh);
            }
        }
    }

    /// Remove the disk link `dh` from the disk cycle of `v`, moving the entry
    /// point of the cycle if it pointed at `dh`.
    pub(crate) fn disk_remove(&mut self, v: VH, dh: DH) {
        let next = self.link_mut(dh).next;
        self.unlink(dh);
        let vert = self.vertex_mut(v);
        vert.edge_count -= 1;
        if next == dh {
            vert.disk = None;
        } else if vert.disk == Some(dh) {
            vert.disk = Some(next);
        }
    }

    /// Add the loop `l` to the radial cycle of `e`.
    pub(crate) fn radial_append(&mut self, e: EH, l: LH) {
        let rh = l.radial_link();
        let edge = self.edge_mut(e);
        edge.face_count += 1;
        let head = edge.radial;
        match head {
            Some(head) => self.insert_before(head, rh),
            None => {
                self.edge_mut(e).radial = Some(rh);
                self.unlink(rh);
            }
        }
    }

    /// Remove the loop `l` from the radial cycle of `e`.
    pub(crate) fn radial_remove(&mut self, e: EH, l: LH) {
        let rh = l.radial_link();
        let next = self.link_mut(rh).next;
        self.unlink(rh);
        let edge = self.edge_mut(e);
        edge.face_count -= 1;
        if next == rh {
            edge.radial = None;
        } else if edge.radial == Some(rh) {
            edge.radial = Some(next);
        }
    }

    /// Move the endpoint `from` of `e` to `to`, carrying the disk link along.
    pub(crate) fn move_edge_endpoint(&mut self, e: EH, from: VH, to: VH) {
        let side = self.edge_mut(e).side_of(from).expect("Vertex is not on edge");
        let dh = e.disk_link(side);
        self.disk_remove(from, dh);
        self.edge_mut(e).verts[side] = to;
        self.disk_append(to, dh);
    }

    /// Move every loop of `src` over to `dst` and discard `src`. Both edges
    /// must connect the same two vertices, and `loops` must be the full radial
    /// cycle of `src`.
    pub(crate) fn merge_edge(&mut self, dst: EH, src: EH, loops: &[LH]) {
        for l in loops {
            self.radial_remove(src, *l);
            self.loop_mut(*l).edge = dst;
            self.radial_append(dst, *l);
        }
        self.kill_edge(src);
    }

    /// Reverse the winding of `f`. Each loop keeps its edge, and so its place
    /// in the radial cycle, but now starts at the far end of that edge.
    /// `loops` must be the full boundary cycle of `f`, in order.
    pub(crate) fn reverse_boundary(&mut self, f: FH, loops: &[LH]) {
        let n = loops.len();
        let verts: Vec<VH> = loops.iter().map(|l| self.loop_mut(*l).vertex).collect();
        for (i, l) in loops.iter().enumerate() {
            let lp = self.loop_mut(*l);
            lp.vertex = verts[(i + 1) % n];
            let Link { next, prev } = lp.link;
            lp.link = Link { next: prev, prev: next };
        }
        // Keep the face starting at the same vertex.
        if let Some(last) = loops.last() {
            self.face_mut(f).first = *last;
        }
    }

    /// Unlink and discard the loops of `f`, then the face itself. `loops` must
    /// be the full boundary cycle of `f`.
    pub(crate) fn kill_face(&mut self, f: FH, loops: &[LH]) {
        for l in loops {
            let e = self.loop_mut(*l).edge;
            self.unlink(*l);
            self.radial_remove(e, *l);
            self.loops.remove(l.index() as usize);
        }
        self.faces.remove(f.index() as usize);
    }

    /// Unlink and discard an edge that no face uses anymore.
    pub(crate) fn kill_edge(&mut self, e: EH) {
        debug_assert_eq!(self.edge_mut(e).face_count, 0);
        let [a, b] = self.edge_mut(e).verts;
        let (d0, d1) = e.disk_links();
        self.disk_remove(a, d0);
        self.disk_remove(b, d1);
        self.edges.remove(e.index() as usize);
    }

    /// Discard a vertex that has no edges anymore.
    pub(crate) fn kill_vertex(&mut self, v: VH) {
        debug_assert_eq!(self.vertex_mut(v).edge_count, 0);
        self.vertices.remove(v.index() as usize);
    }
}
