use crate::{error::Error, list::Link, mesh::Mesh};
use std::fmt::{Debug, Display};

/**
 * All elements of the mesh implement this trait. They are identified by their
 * index in the arena that owns them.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

macro_rules! impl_handle {
    ($name:ident, $label:literal) => {
        impl Handle for $name {
            fn index(&self) -> u32 {
                self.idx
            }
        }

        impl From<u32> for $name {
            fn from(idx: u32) -> Self {
                $name { idx }
            }
        }

        impl From<&u32> for $name {
            fn from(idx: &u32) -> Self {
                $name { idx: *idx }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $label, self.idx)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $label, self.idx)
            }
        }
    };
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VH {
    idx: u32,
}

/**
 * Edge handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EH {
    idx: u32,
}

/**
 * Loop handle. A loop is one corner of a face: it binds a vertex, the edge
 * leaving that vertex along the face boundary, and the face.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FH {
    idx: u32,
}

/**
 * Disk link handle. Every edge owns two disk links, one in the disk cycle of
 * each of its endpoints. The handle packs the edge index and the endpoint side
 * into a single integer, the same way a halfedge is derived from its edge.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DH {
    idx: u32,
}

/**
 * Radial link handle. Every loop owns exactly one radial link, which threads
 * the loop into the radial cycle of its edge.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RH {
    idx: u32,
}

impl_handle!(VH, "VH");
impl_handle!(EH, "EH");
impl_handle!(LH, "LH");
impl_handle!(FH, "FH");
impl_handle!(DH, "DH");
impl_handle!(RH, "RH");

impl VH {
    /// Check if this vertex is alive in the `mesh`.
    pub fn is_valid(self, mesh: &Mesh) -> bool {
        mesh.is_valid_vertex(self)
    }

    /// The number of edges incident on this vertex.
    pub fn valence(self, mesh: &Mesh) -> Result<usize, Error> {
        mesh.vertex_edge_count(self).map(|n| n as usize)
    }
}

impl EH {
    /// The disk link of this edge on the given endpoint side (0 or 1).
    pub fn disk_link(self, side: usize) -> DH {
        debug_assert!(side < 2);
        ((self.idx << 1) | side as u32).into()
    }

    pub fn disk_links(self) -> (DH, DH) {
        (self.disk_link(0), self.disk_link(1))
    }

    /// Check if this edge is alive in the `mesh`.
    pub fn is_valid(self, mesh: &Mesh) -> bool {
        mesh.is_valid_edge(self)
    }

    pub fn other_vertex(self, mesh: &Mesh, v: VH) -> Result<VH, Error> {
        mesh.other_vertex(self, v)
    }
}

impl DH {
    pub fn edge(self) -> EH {
        (self.idx >> 1).into()
    }

    /// The endpoint side of the edge this link belongs to.
    pub fn side(self) -> usize {
        (self.idx & 1) as usize
    }
}

impl LH {
    pub fn radial_link(self) -> RH {
        self.idx.into()
    }

    /// Check if this loop is alive in the `mesh`.
    pub fn is_valid(self, mesh: &Mesh) -> bool {
        mesh.is_valid_loop(self)
    }
}

impl RH {
    /// The loop wrapped by this radial link.
    pub fn owner(self) -> LH {
        self.idx.into()
    }
}

impl FH {
    /// Check if this face is alive in the `mesh`.
    pub fn is_valid(self, mesh: &Mesh) -> bool {
        mesh.is_valid_face(self)
    }

    pub fn valence(self, mesh: &Mesh) -> Result<usize, Error> {
        mesh.face_edge_count(self).map(|n| n as usize)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex {
    pub(crate) pos: glam::Vec3,
    pub(crate) disk: Option<DH>,
    pub(crate) edge_count: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub(crate) verts: [VH; 2],
    pub(crate) disk: [Link<DH>; 2],
    pub(crate) radial: Option<RH>,
    pub(crate) face_count: u32,
}

impl Edge {
    pub(crate) fn side_of(&self, v: VH) -> Option<usize> {
        if self.verts[0] == v {
            Some(0)
        } else if self.verts[1] == v {
            Some(1)
        } else {
            None
        }
    }

    pub(crate) fn has_vertex(&self, v: VH) -> bool {
        self.verts[0] == v || self.verts[1] == v
    }

    pub(crate) fn other(&self, v: VH) -> Option<VH> {
        self.side_of(v).map(|side| self.verts[side ^ 1])
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Loop {
    pub(crate) vertex: VH,
    pub(crate) edge: EH,
    pub(crate) face: FH,
    pub(crate) link: Link<LH>,
    pub(crate) radial: Link<RH>,
}

#[derive(Debug, Clone)]
pub(crate) struct Face {
    pub(crate) first: LH,
    pub(crate) edge_count: u32,
}
