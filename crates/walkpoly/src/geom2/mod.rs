//! 2D polygon geometry (vertex representation).
//!
//! Purpose
//! - Provide a single `Polygon` type owning an ordered vertex list, with lazily
//!   derived boundary segments, convex hull and triangulation.
//! - Keep the query set small: containment, closest boundary point, line of
//!   sight, hull and concave vertices.
//!
//! Assumptions and conventions
//! - The boundary is implicitly closed (last vertex joins the first).
//! - Simple polygons only; self-intersecting or collinear inputs are accepted
//!   but give undefined answers (no repair or validation beyond finiteness).
//! - Exact coordinate equality by default (`GeomCfg::match_eps == 0.0`).
//!
//! Code cross-refs: `Polygon`, `Segment`, `ConvexHull`, `GeomCfg`, `Triangulator`

mod hull;
mod polygon;
pub mod rand;
mod segment;
mod triangulate;
mod types;
mod util;
mod visibility;

pub use hull::{convex_hull, ConvexHull};
pub use polygon::Polygon;
pub use segment::Segment;
pub use triangulate::{DelaunayTriangulator, Triangle, Triangulator};
pub use types::{EdgeScan, GeomCfg};
pub use util::{cross, segments_cross};
pub use visibility::points_can_see_each_other;
