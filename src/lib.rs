/*!
This is a BMesh style polygon mesh library: an editable mesh topology kernel
that supports local edit operators while keeping its connectivity consistent.

# Overview

+ Elements are stored in stable arenas inside a [`Mesh`] and referred to by
  handles: [`VH`] for vertices, [`EH`] for edges, [`LH`] for loops and [`FH`]
  for faces. Removing an element never moves other elements, and a handle to
  a removed element is reported as such instead of aliasing something else.

+ Connectivity is stored in three families of circular lists:

  + The disk cycle of a vertex, linking all the edges incident on the vertex.
    Each edge takes part in the disk cycles of both its endpoints through its
    two disk links ([`DH`]).

  + The radial cycle of an edge, linking one loop per face using the edge,
    through the radial link ([`RH`]) embedded in every loop.

  + The boundary cycle of a face, linking its loops in order. A loop is one
    corner of a face: the vertex, the edge leaving it along the boundary, and
    the face.

  Unlike a halfedge mesh, any number of faces may share an edge, and edges
  and vertices may exist without faces.

+ Creating elements is idempotent: adding an edge between two vertices that
  are already connected, or a face whose boundary already exists in either
  winding, returns the existing element.

+ Every operator checks all of its preconditions before modifying the mesh,
  so an operator that returns an [`Error`] leaves the mesh untouched.

+ The validators ([`Mesh::validate_loop`], [`Mesh::validate_radial`],
  [`Mesh::validate_disk`] and [`Mesh::check_topology`]) walk the cycles and
  report the first broken invariant.

+ The `extrude` and `join` features, both enabled by default, provide the
  extrusion operators and the join / splice operators respectively.
*/

mod check;
mod create;
mod edit;
mod element;
mod error;
mod iterator;
mod list;
mod macros;
mod mesh;
mod primitive;
mod topol;

#[cfg(feature = "extrude")]
mod extrude;
#[cfg(feature = "join")]
mod join;

pub use element::{DH, EH, FH, Handle, LH, RH, VH};
pub use error::Error;
pub use mesh::Mesh;
