//! Benchmarks for the FFT spectral shaper.
//!
//! The 441-sample case is the 10ms window size; the larger ones match the
//! whole-buffer hiss pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use echo_dsp::dsp::SpectralShaper;

use crate::BUFFER_SIZES;

pub fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectral");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.7).sin()).collect();
        let mut shaper = SpectralShaper::new(44_100.0);

        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| shaper.lowpass(black_box(&input), black_box(1500.0)))
        });
    }

    group.finish();
}
