//! Benchmarks for the one-pole tone filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use echo_dsp::dsp::OnePoleLowPass;

use crate::BUFFER_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.3).sin()).collect();

        let mut filter = OnePoleLowPass::new(1500.0, 44_100.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("one_pole_lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
