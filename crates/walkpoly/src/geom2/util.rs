use std::cmp::Ordering;

use crate::{parallelogram_area, Vec2};

/// Orientation of `o → a → b`: positive for a CCW turn, negative for CW, zero
/// when collinear.
#[inline]
pub fn cross(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    parallelogram_area(a - o, b - o)
}

/// Lexicographic order by x, then y. NaN compares equal (inputs are finite).
#[inline]
pub(crate) fn cmp_xy(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Coordinate match: exact when `eps == 0`, else per-axis within `eps`.
#[inline]
pub(crate) fn points_match(p: Vec2, q: Vec2, eps: f64) -> bool {
    if eps > 0.0 {
        (p.x - q.x).abs() <= eps && (p.y - q.y).abs() <= eps
    } else {
        p == q
    }
}

/// Proper crossing test between segments `ab` and `cd`.
///
/// Solves `a + r (b - a) = c + s (d - c)`. Returns true only when both
/// parameters lie strictly inside `(0, 1)`. Parallel or collinear segments
/// (zero denominator) and touching endpoints (zero numerator) never count.
pub fn segments_cross(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let denominator = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    if denominator == 0.0 {
        return false;
    }
    let numerator1 = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let numerator2 = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);
    if numerator1 == 0.0 || numerator2 == 0.0 {
        return false;
    }
    let r = numerator1 / denominator;
    let s = numerator2 / denominator;
    (r > 0.0 && r < 1.0) && (s > 0.0 && s < 1.0)
}
