//! Simple polygon with write-once derived caches.

use std::sync::OnceLock;

use super::hull::ConvexHull;
use super::segment::Segment;
use super::triangulate::{DelaunayTriangulator, Triangle, Triangulator};
use super::types::{EdgeScan, GeomCfg};
use super::util::points_match;
use super::visibility;
use crate::error::PolygonError;
use crate::Vec2;

/// Simple polygon given by an ordered, implicitly closed vertex list.
///
/// Invariants:
/// - At least 3 vertices, all coordinates finite.
/// - Vertices never change after construction.
/// - `segments`, `hull` and `triangles` are caches set at most once
///   (`OnceLock`), so concurrent first access computes each exactly once.
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Vec2>,
    cfg: GeomCfg,
    segments: OnceLock<Vec<Segment>>,
    hull: OnceLock<ConvexHull>,
    triangles: OnceLock<Vec<Triangle>>,
}

impl Polygon {
    /// Build with the default configuration (exact matching, boundary edge scan).
    pub fn new(points: Vec<Vec2>) -> Result<Self, PolygonError> {
        Self::with_cfg(points, GeomCfg::default())
    }

    pub fn with_cfg(points: Vec<Vec2>, cfg: GeomCfg) -> Result<Self, PolygonError> {
        if points.len() < 3 {
            return Err(PolygonError::InvalidPolygon { len: points.len() });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(PolygonError::NonFinite { index });
        }
        Ok(Self {
            points,
            cfg,
            segments: OnceLock::new(),
            hull: OnceLock::new(),
            triangles: OnceLock::new(),
        })
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Boundary segments; segment `i` joins `points[i]` and `points[(i + 1) % n]`.
    pub fn segments(&self) -> &[Segment] {
        self.segments.get_or_init(|| {
            let n = self.points.len();
            tracing::trace!(n, "deriving boundary segments");
            (0..n)
                .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
                .collect()
        })
    }

    /// Convex hull of the vertex set (memoized).
    pub fn convex_hull(&self) -> &ConvexHull {
        self.hull.get_or_init(|| {
            let hull = ConvexHull::build(&self.points, self.cfg);
            tracing::debug!(points = self.points.len(), hull = hull.len(), "convex hull cached");
            hull
        })
    }

    /// Vertices not on the convex hull, in original order.
    pub fn concave_vertices(&self) -> Vec<Vec2> {
        let hull = self.convex_hull();
        self.points
            .iter()
            .copied()
            .filter(|&p| !hull.has_point(p))
            .collect()
    }

    /// Vertex membership by coordinate match (exact unless `match_eps > 0`).
    pub fn has_point(&self, p: Vec2) -> bool {
        self.points
            .iter()
            .any(|&q| points_match(q, p, self.cfg.match_eps))
    }

    /// Even-odd ray casting along +x.
    ///
    /// Edges with equal endpoint y are skipped. Points exactly on the boundary
    /// may land on either side.
    pub fn is_point_inside(&self, p: Vec2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if pi.y != pj.y && (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Boundary segment nearest to `p`; the first one wins on exact ties.
    pub fn closest_segment_to(&self, p: Vec2) -> &Segment {
        let segments = self.segments();
        let mut best = &segments[0];
        let mut best_d2 = best.distance2_to_point(p);
        for s in &segments[1..] {
            let d2 = s.distance2_to_point(p);
            if d2 < best_d2 {
                best = s;
                best_d2 = d2;
            }
        }
        best
    }

    /// Closest point on the boundary to `p`.
    #[inline]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        self.closest_segment_to(p).closest_point_to(p)
    }

    /// Line of sight between `a` and `b` using the configured edge scan.
    #[inline]
    pub fn points_can_see_each_other(&self, a: Vec2, b: Vec2) -> bool {
        self.points_can_see_each_other_with(a, b, self.cfg.edge_scan)
    }

    /// Line of sight with an explicit edge scan.
    pub fn points_can_see_each_other_with(&self, a: Vec2, b: Vec2, scan: EdgeScan) -> bool {
        visibility::points_can_see_each_other(self, a, b, scan)
    }

    /// Vertices as `[x, y]` pairs, the input format of triangulation routines.
    pub fn raw_vertices(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Delaunay triangles of the vertex set (memoized).
    ///
    /// Not constrained to the boundary: for concave polygons some triangles lie
    /// outside. Empty when the vertices are collinear.
    pub fn triangles(&self) -> &[Triangle] {
        self.triangles_with(&DelaunayTriangulator)
    }

    /// Triangles from a caller-supplied adapter. Memoized: once any adapter has
    /// run, later calls return the stored result without invoking `adapter`.
    pub fn triangles_with<T: Triangulator + ?Sized>(&self, adapter: &T) -> &[Triangle] {
        self.triangles.get_or_init(|| {
            let raw = self.raw_vertices();
            let tris = adapter.triangulate(&raw);
            tracing::debug!(vertices = raw.len(), triangles = tris.len(), "triangulation cached");
            tris
        })
    }
}

/// Equality on vertices and configuration; caches are ignored.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.cfg == other.cfg
    }
}
