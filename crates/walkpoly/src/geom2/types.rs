//! Configuration types for polygon queries.
//!
//! - `GeomCfg`: per-polygon matching tolerance and visibility edge scan.
//! - `EdgeScan`: which segments the line-of-sight test checks for crossings.

/// Edge set used by the line-of-sight crossing test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeScan {
    /// Test the true boundary edges `points[i] -> points[(i + 1) % n]`.
    #[default]
    Boundary,
    /// Test the degenerate pairs `points[i] -> points[i]`.
    ///
    /// A zero-length edge never yields a proper crossing, so visibility then
    /// reduces to the containment and midpoint checks. Kept for parity with
    /// walk areas authored against that behaviour.
    Legacy,
}

/// Geometry configuration carried by each polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Coordinate matching tolerance for `has_point` and concave extraction.
    /// `0.0` means exact `==` comparison.
    pub match_eps: f64,
    pub edge_scan: EdgeScan,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            match_eps: 0.0,
            edge_scan: EdgeScan::Boundary,
        }
    }
}

impl GeomCfg {
    /// Exact matching with the given edge scan.
    #[inline]
    pub fn with_edge_scan(edge_scan: EdgeScan) -> Self {
        Self {
            edge_scan,
            ..Self::default()
        }
    }
}
