//! Benchmarks for smoothed noise generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use echo_dsp::dsp::noise;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::BUFFER_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BUFFER_SIZES {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        group.bench_with_input(BenchmarkId::new("smoothed_lfo", size), &size, |b, &size| {
            b.iter(|| noise::smoothed_lfo(black_box(size), 44_100.0, 0.05, 0.1, &mut rng))
        });

        let input: Vec<f32> = (0..size).map(|i| ((i * 31) % 17) as f32 - 8.0).collect();
        group.bench_with_input(BenchmarkId::new("moving_average", size), &size, |b, _| {
            b.iter(|| noise::moving_average(black_box(&input), black_box(noise::LFO_SMOOTHING)))
        });
    }

    group.finish();
}
