use crate::element::{DH, EH, FH, LH, RH, VH};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Foreign or stale handles.
    #[error("{0} is not an endpoint of {1}")]
    InvalidVertex(VH, EH),
    #[error("{0} has been removed from the mesh")]
    DeletedVertex(VH),
    #[error("{0} has been removed from the mesh")]
    DeletedEdge(EH),
    #[error("{0} has been removed from the mesh")]
    DeletedLoop(LH),
    #[error("{0} has been removed from the mesh")]
    DeletedFace(FH),
    /// A checked walk around a circular list did not return to where it
    /// started.
    #[error("circular list did not return to its start")]
    NonCircular,
    // Construction preconditions.
    #[error("an edge cannot connect {0} to itself")]
    DegenerateEdge(VH),
    #[error("a face needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("expected as many edges as vertices, got {0} vertices and {1} edges")]
    MismatchedArrayLengths(usize, usize),
    #[error("{0} appears more than once")]
    DuplicateVertex(VH),
    #[error("{0} appears more than once")]
    DuplicateEdge(EH),
    #[error("{0} does not connect {1} to its successor")]
    EdgeVertexMismatch(EH, VH),
    #[error("{0} and {1} are already connected by {2}")]
    EdgeExists(VH, VH, EH),
    // Join and splice preconditions.
    #[error("{0} has {1} incident edges, expected {2}")]
    InvalidValence(VH, u32, u32),
    #[error("{0} would be left with fewer than 3 edges")]
    DegenerateFace(FH),
    #[error("{0} and {1} are both used by {2}")]
    SharedFace(VH, VH, FH),
    #[error("{0} and {1} share {2} edges, expected exactly 1")]
    FacesNotAdjacent(FH, FH, usize),
    #[error("{0} and {1} share more vertices than the endpoints of their common edge")]
    SharedVertices(FH, FH),
    #[error("both faces traverse {0} in the same direction")]
    WindingMismatch(EH),
    #[error("{0} and {1} connect different vertices")]
    EdgeEndpointMismatch(EH, EH),
    // Face split preconditions.
    #[error("{0} is not part of the boundary of {1}")]
    LoopNotInFace(LH, FH),
    #[error("{0} and {1} are the same or neighbouring corners")]
    AdjacentLoops(LH, LH),
    // Boundary cycle validation.
    #[error("{0} has {1} edges but its boundary cycle has {2} loops")]
    BoundaryLengthMismatch(FH, u32, usize),
    #[error("prev of {0} does not point back to its predecessor")]
    BoundaryLinkMismatch(LH),
    #[error("{0} belongs to a different face than its neighbours")]
    InconsistentFaceInLoop(LH),
    #[error("{0} shares its edge with the next loop")]
    RepeatedEdgeInLoop(LH),
    #[error("{0} starts at a vertex already visited by the boundary")]
    RepeatedVertexInLoop(LH),
    #[error("the edge of {0} does not contain its vertex and the next loop's vertex")]
    LoopEdgeVertexMismatch(LH),
    #[error("{0} loops are not part of any face boundary")]
    OrphanLoops(usize),
    // Radial cycle validation.
    #[error("{0} has {1} faces but its radial cycle has {2} links")]
    RadialLengthMismatch(EH, u32, usize),
    #[error("prev of {0} does not point back to its predecessor")]
    RadialLinkMismatch(RH),
    #[error("{0} wraps the same loop as the next radial link")]
    RepeatedLoopInRadial(RH),
    #[error("{0} wraps a loop on a different edge than the next radial link")]
    InconsistentEdgeInRadial(RH),
    #[error("the loop wrapped by {0} starts at a vertex that is not on its edge")]
    RadialVertexMismatch(RH),
    #[error("{0} has faces but no radial cycle, or a radial cycle but no faces")]
    RadialHeadMismatch(EH),
    // Disk cycle validation.
    #[error("{0} has {1} edges but its disk cycle has {2} links")]
    DiskLengthMismatch(VH, u32, usize),
    #[error("prev of {0} does not point back to its predecessor")]
    DiskLinkMismatch(DH),
    #[error("{0} refers to the same edge as the next disk link")]
    RepeatedEdgeInDisk(DH),
    #[error("the edge of {0} is not incident on the vertex of the disk cycle")]
    DiskVertexMismatch(DH),
    #[error("{1} is not in the disk cycle of {0}")]
    EdgeNotInDisk(VH, EH),
}
