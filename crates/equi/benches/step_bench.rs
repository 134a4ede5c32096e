//! Criterion benchmarks for one Gauss–Newton step and for symmetry discovery.
//! Focus sizes: prisms with k in {4, 8, 16, 32} sides.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p equi

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use equi::api::{prism, GaussNewton, RealizationEngine, Symmetries};
use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_coords(n: usize, seed: u64) -> DVector<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    DVector::from_fn(3 * n, |_, _| 3.0 * rng.gen::<f64>() - 1.5)
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    for &k in &[4usize, 8, 16, 32] {
        let graph = prism(k).expect("prism");
        let solver = GaussNewton::new(&graph);
        group.bench_with_input(BenchmarkId::new("gauss_newton_step", k), &k, |b, &k| {
            b.iter_batched(
                || random_coords(2 * k, 7),
                |x| {
                    let _next = solver.step(x);
                },
                BatchSize::SmallInput,
            )
        });
        let sym = Symmetries::compute(&graph);
        if let Some(d) = sym.group() {
            let caption = format!("D{k}h");
            if let Ok(concrete) = d.realize(&caption) {
                group.bench_with_input(BenchmarkId::new("symmetric_step", k), &k, |b, _| {
                    b.iter_batched(
                        || {
                            let mut e = RealizationEngine::new(&graph, &mut StdRng::seed_from_u64(3));
                            e.set_group(concrete.clone()).expect("degree");
                            e
                        },
                        |mut e| {
                            e.single_step(|_: usize, _: f64| {});
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    }
    group.finish();
}

fn bench_symmetries(c: &mut Criterion) {
    let mut group = c.benchmark_group("groups");
    for &k in &[4usize, 8, 16, 32] {
        let graph = prism(k).expect("prism");
        group.bench_with_input(BenchmarkId::new("classify_prism", k), &graph, |b, g| {
            b.iter(|| Symmetries::compute(g))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_symmetries);
criterion_main!(benches);
