//! A planar doubly-connected edge list (DCEL).
//!
//! This crate maintains a topological view of a planar straight-line graph:
//! every undirected edge is split into a pair of directed *half edges*,
//! half edges are ordered by angle around their vertices, and the closed
//! `next` cycles that fall out of this ordering are the *faces* of the
//! plane subdivision — including the unbounded outside. The mesh supports
//! incremental edits ([`add_edge`][Dcel::add_edge],
//! [`remove_edge`][Dcel::remove_edge], [`split_edge`][Dcel::split_edge])
//! that patch the affected neighborhood instead of rebuilding, and lazy,
//! cached face queries: signed area, boundary vertex list, bounding box and
//! hole set ([`FaceRef`][refs::FaceRef]).
//!
//!
//! # Elements and handles
//!
//! All elements live in arenas owned by the [`Dcel`] and are addressed by
//! small typed handles ([`VertexHandle`], [`HalfEdgeHandle`],
//! [`FaceHandle`]) instead of references. Handles are assigned in
//! increasing order per mesh and are never reused until the mesh is
//! [cleared][Dcel::clear], so they are deterministic and cheap to store.
//! To actually query an element, pair its handle with the mesh again via
//! [`Dcel::get_vertex`], [`Dcel::get_half_edge`] or [`Dcel::get_face`].
//!
//!
//! # Orientation convention
//!
//! Incidence lists are sorted clockwise, which makes internal (bounded)
//! faces run counter clockwise and gives them positive signed area.
//! External faces — the unbounded outside as well as degenerate figures
//! like a bare line segment — have non-positive area. An external face
//! whose boundary lies entirely inside an internal face is reported as a
//! *hole* of that face.
//!
//!
//! # Example
//!
//! ```
//! use dcel::Dcel;
//!
//! // A triangle: one bounded face, one unbounded.
//! let mut mesh = Dcel::from_data(
//!     &[[-1.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
//!     &[[0, 1], [1, 2], [2, 0]],
//! );
//! assert_eq!(mesh.num_faces(), 2);
//! assert_eq!(mesh.internal_faces().count(), 1);
//!
//! let inner = mesh.internal_faces().next().unwrap();
//! assert_eq!(inner.area(), 1.0);
//! assert_eq!(inner.boundary_vertices().len(), 3);
//!
//! // Splitting an edge at a collinear point changes no area.
//! mesh.split_edge(-1.0, 0.0, 1.0, 0.0, 0.0, 0.0).unwrap();
//! let inner = mesh.internal_faces().next().unwrap();
//! assert_eq!(inner.area(), 1.0);
//! assert_eq!(inner.boundary_vertices().len(), 4);
//! ```
//!
//!
//! # Limits
//!
//! Coordinates are plain `f64` and all point lookups use exact float
//! equality; there is no snapping, no tolerance and no protection against
//! degenerate or near-collinear inputs beyond ordinary floating point
//! arithmetic. The mesh is a single-threaded data structure: queries cache
//! through interior mutability, so a `Dcel` is not `Sync` and concurrent
//! use requires an external lock around the whole mesh.

pub mod aabb;
pub mod handle;
pub mod polygon;
pub mod refs;

mod error;
mod map;
mod mesh;

pub use crate::{
    aabb::Aabb,
    error::Error,
    handle::{hsize, FaceHandle, Handle, HalfEdgeHandle, VertexHandle},
    mesh::Dcel,
    refs::{FaceRef, HalfEdgeRef, VertexRef},
};
