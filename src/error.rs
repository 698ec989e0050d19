//! Error type for the fallible edit operations.

use thiserror::Error;


/// Errors reported by [`Dcel::remove_edge`][crate::Dcel::remove_edge] and
/// [`Dcel::split_edge`][crate::Dcel::split_edge].
///
/// The failing operation returns before touching the mesh, so an `Err`
/// always leaves the mesh exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// No half edge runs from the first coordinate pair to the second.
    ///
    /// Coordinates are compared with exact float equality, the same way
    /// [`find_half_edge`][crate::Dcel::find_half_edge] compares them.
    #[error("no half edge from ({x1}, {y1}) to ({x2}, {y2})")]
    HalfEdgeNotFound { x1: f64, y1: f64, x2: f64, y2: f64 },
}
