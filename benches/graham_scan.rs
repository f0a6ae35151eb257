use boundary_hull::algorithms::convex_hull;
use boundary_hull::data::*;
use boundary_hull::pipeline::fix_sequence;
use boundary_hull::record::BoundaryPoint;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Points scattered over roughly one municipality, snapped to 1e-6 degrees.
fn gen_coords<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Point<f64, 2>> {
  (0..n)
    .map(|_| {
      let lon: i32 = rng.gen_range(4_700_000..5_000_000);
      let lat: i32 = rng.gen_range(52_200_000..52_500_000);
      Point::new([f64::from(lon) / 1e6, f64::from(lat) / 1e6])
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(1);
  for n in [100, 1_000, 10_000] {
    let pts = gen_coords(&mut rng, n);
    c.bench_function(&format!("convex_hull({})", n), |b| {
      b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
    });
  }

  let pts: Vec<Point<i32, 2>> = (0..10_000).map(|_| rng.gen()).collect();
  c.bench_function("convex_hull_i32(10000)", |b| {
    b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
  });

  let records: Vec<BoundaryPoint> = gen_coords(&mut rng, 10_000)
    .into_iter()
    .map(|pt| BoundaryPoint::new("0363", pt[0], pt[1]))
    .collect();
  c.bench_function("fix_sequence(10000)", |b| {
    b.iter_batched(|| records.clone(), fix_sequence, BatchSize::LargeInput)
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
