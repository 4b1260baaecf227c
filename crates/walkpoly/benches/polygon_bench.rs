//! Criterion benchmarks for polygon queries on random star-shaped polygons.
//! Focus sizes: n in {8, 32, 128, 512}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use walkpoly::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use walkpoly::{Polygon, Vec2};

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn random_queries(k: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| Vec2::new(rng.gen_range(-12.0..12.0), rng.gen_range(-12.0..12.0)))
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_polygon(n, 43),
                |p| {
                    let _h = p.convex_hull().len();
                },
                BatchSize::SmallInput,
            )
        });

        let poly = random_polygon(n, 44);
        let queries = random_queries(64, 45);
        group.bench_with_input(BenchmarkId::new("is_point_inside", n), &n, |b, _| {
            b.iter(|| queries.iter().filter(|&&q| poly.is_point_inside(q)).count())
        });
        group.bench_with_input(BenchmarkId::new("closest_point_to", n), &n, |b, _| {
            b.iter(|| {
                queries
                    .iter()
                    .map(|&q| poly.closest_point_to(q).x)
                    .sum::<f64>()
            })
        });
        group.bench_with_input(BenchmarkId::new("points_can_see_each_other", n), &n, |b, _| {
            b.iter(|| {
                queries
                    .windows(2)
                    .filter(|w| poly.points_can_see_each_other(w[0], w[1]))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
