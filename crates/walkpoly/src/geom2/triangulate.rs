//! Triangulation adapter.
//!
//! The polygon exports its vertices as `[x, y]` pairs and hands them to a
//! `Triangulator`; the result is memoized on the polygon. No constrained
//! triangulation is attempted for concave boundaries.

/// Triangle as indices into the polygon's vertex list.
pub type Triangle = [usize; 3];

/// External triangulation routine.
pub trait Triangulator {
    fn triangulate(&self, vertices: &[[f64; 2]]) -> Vec<Triangle>;
}

/// Delaunay triangulation of the vertex set via the `delaunator` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, vertices: &[[f64; 2]]) -> Vec<Triangle> {
        let pts: Vec<delaunator::Point> = vertices
            .iter()
            .map(|&[x, y]| delaunator::Point { x, y })
            .collect();
        delaunator::triangulate(&pts)
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect()
    }
}

impl<F> Triangulator for F
where
    F: Fn(&[[f64; 2]]) -> Vec<Triangle>,
{
    fn triangulate(&self, vertices: &[[f64; 2]]) -> Vec<Triangle> {
        self(vertices)
    }
}
