//! Polygon geometry for walkable areas.
//!
//! A `Polygon` is built from an ordered vertex list and answers the queries a
//! point-and-click navigation layer needs: convex hull, concave vertices,
//! containment, closest boundary point and line of sight between two points.
//!
//! Conventions
//! - Points are `Vec2` (nalgebra `Vector2<f64>`) and compare by exact equality
//!   unless a polygon opts in to a tolerance via `GeomCfg::match_eps`.
//! - Derived data (segments, hull, triangles) is computed on first access and
//!   cached for the lifetime of the polygon.

pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PolygonError;
pub use geom2::{ConvexHull, EdgeScan, GeomCfg, Polygon, Segment};

/// Point / vector type used throughout the crate.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::PolygonError;
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        convex_hull, points_can_see_each_other, ConvexHull, DelaunayTriangulator, EdgeScan,
        GeomCfg, Polygon, Segment, Triangulator,
    };
    pub use crate::Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}
