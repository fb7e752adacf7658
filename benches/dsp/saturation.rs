//! Benchmarks for tape saturation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use echo_dsp::dsp::saturation;

use crate::BUFFER_SIZES;

pub fn bench_saturation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/saturation");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin() * 1.5).collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("tape_saturate", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                saturation::tape_saturate_buffer(black_box(&mut buffer), black_box(1.0));
            })
        });
    }

    group.finish();
}
