//! Error types for polygon construction.

use thiserror::Error;

/// Errors raised when building a `Polygon`.
///
/// Queries never fail; only construction (and hull → polygon conversion) can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer than 3 vertices were supplied.
    #[error("invalid polygon: needs at least 3 points, got {len}")]
    InvalidPolygon { len: usize },

    /// A convex hull with fewer than 3 points cannot be used as a polygon.
    #[error("degenerate hull: {len} point(s), input is collinear")]
    DegenerateHull { len: usize },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
