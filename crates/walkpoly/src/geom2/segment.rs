//! Boundary segment primitive.

use crate::Vec2;

/// Closed segment `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        (self.b - self.a).norm_squared()
    }

    /// Closest point on the segment to `p` (projection clamped to the endpoints).
    ///
    /// A zero-length segment returns `a`.
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        let ab = self.b - self.a;
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(&ab) / len2).clamp(0.0, 1.0);
        self.a + ab * t
    }

    /// Squared Euclidean distance from `p` to the segment.
    #[inline]
    pub fn distance2_to_point(&self, p: Vec2) -> f64 {
        (p - self.closest_point_to(p)).norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(s.closest_point_to(Vec2::new(-3.0, 4.0)), Vec2::new(0.0, 0.0));
        assert_eq!(s.closest_point_to(Vec2::new(12.0, -1.0)), Vec2::new(10.0, 0.0));
        assert_eq!(s.closest_point_to(Vec2::new(4.0, 2.0)), Vec2::new(4.0, 0.0));
        assert!((s.distance2_to_point(Vec2::new(4.0, 2.0)) - 4.0).abs() < 1e-12);
        assert!((s.distance2_to_point(Vec2::new(13.0, 4.0)) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_and_degenerate_segment() {
        let s = Segment::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 5.0));
        assert_eq!(s.midpoint(), Vec2::new(2.0, 3.0));
        let z = Segment::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert_eq!(z.length_squared(), 0.0);
        assert_eq!(z.closest_point_to(Vec2::new(5.0, 6.0)), Vec2::new(2.0, 2.0));
        assert!((z.distance2_to_point(Vec2::new(5.0, 6.0)) - 25.0).abs() < 1e-12);
    }
}
