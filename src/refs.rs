//! Read-only references to elements within a mesh.
//!
//! A reference is just a handle paired with the mesh it belongs to, which
//! lets the element answer questions that need the surrounding graph (a
//! face alone cannot compute its area). All methods hand out further
//! references borrowed from the same mesh, so queries chain naturally:
//! `mesh.get_half_edge(he).twin().face()`.

use std::fmt;

use cgmath::Point2;

use crate::{
    aabb::Aabb,
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
    mesh::Dcel,
};


/// A reference to a vertex within a mesh.
pub struct VertexRef<'a> {
    mesh: &'a Dcel,
    handle: VertexHandle,
}

/// A reference to a half edge within a mesh.
pub struct HalfEdgeRef<'a> {
    mesh: &'a Dcel,
    handle: HalfEdgeHandle,
}

/// A reference to a face within a mesh.
pub struct FaceRef<'a> {
    mesh: &'a Dcel,
    handle: FaceHandle,
}

macro_rules! impl_ref_basics {
    ($name:ident, $handle:ident) => {
        impl<'a> $name<'a> {
            pub(crate) fn new(mesh: &'a Dcel, handle: $handle) -> Self {
                Self { mesh, handle }
            }

            /// Returns the stored handle.
            pub fn handle(&self) -> $handle {
                self.handle
            }

            /// Returns a reference to the linked mesh.
            pub fn mesh(&self) -> &'a Dcel {
                self.mesh
            }
        }

        impl Clone for $name<'_> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl Copy for $name<'_> {}

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.handle).finish()
            }
        }

        impl PartialEq for $name<'_> {
            /// References are equal if they point to the same mesh and the
            /// same element.
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.mesh, other.mesh) && self.handle == other.handle
            }
        }

        impl Eq for $name<'_> {}
    };
}

impl_ref_basics!(VertexRef, VertexHandle);
impl_ref_basics!(HalfEdgeRef, HalfEdgeHandle);
impl_ref_basics!(FaceRef, FaceHandle);


// ===========================================================================
// ===== Vertex queries
// ===========================================================================

impl<'a> VertexRef<'a> {
    /// The position of this vertex.
    pub fn position(&self) -> Point2<f64> {
        self.mesh.vertices[self.handle].position
    }

    /// Number of edges attached to this vertex.
    pub fn degree(&self) -> usize {
        self.mesh.vertices[self.handle].incidence.len()
    }

    /// Iterator over the outgoing half edges of this vertex, in clockwise
    /// order.
    pub fn outgoing_half_edges(&self) -> impl Iterator<Item = HalfEdgeRef<'a>> + 'a {
        let mesh = self.mesh;
        mesh.vertices[self.handle]
            .incidence
            .iter()
            .map(move |&he| HalfEdgeRef::new(mesh, he))
    }
}


// ===========================================================================
// ===== Half edge queries
// ===========================================================================

impl<'a> HalfEdgeRef<'a> {
    /// The vertex this half edge emanates from.
    pub fn origin(&self) -> VertexRef<'a> {
        VertexRef::new(self.mesh, self.mesh.half_edges[self.handle].origin)
    }

    /// The vertex this half edge points to (its twin's origin).
    pub fn target(&self) -> VertexRef<'a> {
        self.twin().origin()
    }

    /// The opposite traversal of the same undirected edge.
    pub fn twin(&self) -> HalfEdgeRef<'a> {
        HalfEdgeRef::new(self.mesh, self.handle.twin())
    }

    /// The next half edge along the boundary of this half edge's face.
    pub fn next(&self) -> HalfEdgeRef<'a> {
        HalfEdgeRef::new(self.mesh, self.mesh.half_edges[self.handle].next)
    }

    /// The previous half edge along the boundary of this half edge's face.
    pub fn prev(&self) -> HalfEdgeRef<'a> {
        HalfEdgeRef::new(self.mesh, self.mesh.half_edges[self.handle].prev)
    }

    /// The face this half edge bounds.
    pub fn face(&self) -> Option<FaceRef<'a>> {
        self.mesh.half_edges[self.handle]
            .face
            .map(|fh| FaceRef::new(self.mesh, fh))
    }

    /// Polar angle (`0..2π`) of the direction from this half edge's head
    /// towards its origin.
    pub fn angle(&self) -> f64 {
        self.mesh.half_edges[self.handle].angle
    }

    /// Euclidean distance between the two endpoints.
    pub fn length(&self) -> f64 {
        self.mesh.half_edges[self.handle].length
    }
}


// ===========================================================================
// ===== Face queries
// ===========================================================================

impl<'a> FaceRef<'a> {
    /// The anchor half edge of the boundary cycle.
    pub fn boundary_start(&self) -> HalfEdgeRef<'a> {
        HalfEdgeRef::new(self.mesh, self.mesh.faces[self.handle].start)
    }

    /// Signed area of this face: positive for internal faces, non-positive
    /// for external ones. Computed once and cached until a structural edit
    /// invalidates it.
    pub fn area(&self) -> f64 {
        self.mesh.faces[self.handle].area(self.mesh)
    }

    /// Area minus the enclosed area of all [holes][FaceRef::holes].
    pub fn area_except_holes(&self) -> f64 {
        self.mesh.faces[self.handle].area_except_holes(self.mesh)
    }

    /// Whether this face encloses a bounded region (positive area).
    pub fn is_internal(&self) -> bool {
        self.mesh.faces[self.handle].is_internal(self.mesh)
    }

    /// Whether this face is unbounded or degenerate (non-positive area).
    pub fn is_external(&self) -> bool {
        self.mesh.faces[self.handle].is_external(self.mesh)
    }

    /// The vertices along the boundary, in traversal order (counter
    /// clockwise for internal faces).
    pub fn boundary_vertices(&self) -> &'a [VertexHandle] {
        self.mesh.faces[self.handle].boundary(self.mesh)
    }

    /// The positions of the boundary vertices, in traversal order.
    pub fn boundary_positions(&self) -> impl Iterator<Item = Point2<f64>> + 'a {
        self.mesh.faces[self.handle].boundary_positions(self.mesh)
    }

    /// Iterator over the half edges of the boundary cycle.
    pub fn half_edges(&self) -> impl Iterator<Item = HalfEdgeRef<'a>> + 'a {
        let mesh = self.mesh;
        mesh.cycle(mesh.faces[self.handle].start)
            .map(move |he| HalfEdgeRef::new(mesh, he))
    }

    /// Bounding box of the boundary vertices.
    pub fn bounding_box(&self) -> &'a Aabb {
        self.mesh.faces[self.handle].aabb(self.mesh)
    }

    /// Iterator over the holes of this face: the external faces lying
    /// entirely inside its boundary. Empty for external faces.
    pub fn holes(&self) -> impl Iterator<Item = FaceRef<'a>> + 'a {
        let mesh = self.mesh;
        mesh.faces[self.handle]
            .holes(mesh)
            .iter()
            .map(move |&fh| FaceRef::new(mesh, fh))
    }

    /// Number of holes of this face.
    pub fn num_holes(&self) -> usize {
        self.mesh.faces[self.handle].holes(self.mesh).len()
    }

    /// Whether this face's boundary and `other`'s describe the same cycle:
    /// same vertices in the same order, starting anywhere.
    pub fn same_boundary(&self, other: FaceRef<'_>) -> bool {
        crate::mesh::face::same_cycle(self.boundary_vertices(), other.boundary_vertices())
    }
}
