//! Line of sight between two points inside a polygon.
//!
//! Test order
//! 1. Both points inside (`is_point_inside`), else not visible.
//! 2. Identical points are visible.
//! 3. No proper crossing between `ab` and the scanned edges (`EdgeScan`).
//! 4. Midpoint of `ab` inside, which rejects segments that leave through a
//!    reflex corner without a proper crossing.

use super::polygon::Polygon;
use super::segment::Segment;
use super::types::EdgeScan;
use super::util::segments_cross;
use crate::Vec2;

/// Mutual visibility of `a` and `b` within `poly`.
pub fn points_can_see_each_other(poly: &Polygon, a: Vec2, b: Vec2, scan: EdgeScan) -> bool {
    if !poly.is_point_inside(a) || !poly.is_point_inside(b) {
        return false;
    }
    if a == b {
        return true;
    }
    if scanned_edges(poly, scan).any(|(c, d)| segments_cross(a, b, c, d)) {
        return false;
    }
    poly.is_point_inside(Segment::new(a, b).midpoint())
}

fn scanned_edges(poly: &Polygon, scan: EdgeScan) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let pts = poly.points();
    let n = pts.len();
    (0..n).map(move |i| match scan {
        EdgeScan::Boundary => (pts[i], pts[(i + 1) % n]),
        // `i % n == i`: each "edge" collapses to a single vertex.
        EdgeScan::Legacy => (pts[i], pts[i % n]),
    })
}
