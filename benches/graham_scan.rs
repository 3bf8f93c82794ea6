use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hullscan::algorithms::convex_hull;
use hullscan::data::Point;

fn gen_points<T>(rng: &mut SmallRng, n: usize) -> Vec<Point<T>>
where
  Standard: Distribution<Point<T>>,
{
  (0..n).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0x1CEB00DA);
  let mut group = c.benchmark_group("convex_hull");
  for n in [100usize, 1_000, 10_000] {
    let ints: Vec<Point<i32>> = gen_points(&mut rng, n);
    group.bench_function(format!("i32/{}", n), |b| {
      b.iter_batched(|| ints.clone(), convex_hull, BatchSize::LargeInput)
    });

    let floats: Vec<Point<OrderedFloat<f64>>> = gen_points::<f64>(&mut rng, n)
      .into_iter()
      .map(|pt| pt.cast(OrderedFloat))
      .collect();
    group.bench_function(format!("f64/{}", n), |b| {
      b.iter_batched(|| floats.clone(), convex_hull, BatchSize::LargeInput)
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
