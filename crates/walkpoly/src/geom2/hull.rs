//! Convex hull via Andrew's monotone chain.

use super::polygon::Polygon;
use super::types::GeomCfg;
use super::util::{cmp_xy, cross, points_match};
use crate::error::PolygonError;
use crate::Vec2;

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear and clockwise turns are popped (`cross <= 0`), so the result is
/// strictly convex. Inputs with fewer than 2 points are returned as-is; an
/// all-collinear input yields its two extreme points.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut pts: Vec<Vec2> = points.to_vec();
    pts.sort_by(cmp_xy);
    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Convex hull of a polygon's vertex set.
///
/// Invariants:
/// - Points are a subset of the source vertices, CCW, strictly convex.
/// - `len() < 3` only for all-collinear (or fully coincident) sources; such a
///   hull has no polygon form.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    points: Vec<Vec2>,
    cfg: GeomCfg,
}

impl ConvexHull {
    pub(crate) fn build(points: &[Vec2], cfg: GeomCfg) -> Self {
        let hull = convex_hull(points);
        if hull.len() < 3 {
            tracing::warn!(points = points.len(), hull = hull.len(), "degenerate convex hull");
        }
        Self { points: hull, cfg }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the hull bounds a 2D region (at least 3 points).
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.points.len() >= 3
    }

    /// Membership by coordinate match, using the source polygon's tolerance.
    pub fn has_point(&self, p: Vec2) -> bool {
        self.points
            .iter()
            .any(|&q| points_match(q, p, self.cfg.match_eps))
    }

    /// The hull as a polygon carrying the source polygon's configuration.
    pub fn to_polygon(&self) -> Result<Polygon, PolygonError> {
        if !self.is_proper() {
            return Err(PolygonError::DegenerateHull {
                len: self.points.len(),
            });
        }
        Polygon::with_cfg(self.points.clone(), self.cfg)
    }
}
