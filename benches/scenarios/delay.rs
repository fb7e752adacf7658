//! Benchmarks for complete delay passes.
//!
//! Digital mode is a tight read/mix/write loop. Analog mode adds the
//! modulation precompute, a random draw per sample and the tone path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use echo_dsp::{process_delay_seeded, DelayParams};

const SAMPLE_RATE: u32 = 44_100;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("delay");
    group.sample_size(20);

    // 0.5s and 2s of audio
    for &seconds in &[0.5f32, 2.0] {
        let len = (seconds * SAMPLE_RATE as f32) as usize;
        let input: Vec<f32> = (0..len).map(|i| (i as f32 * 0.05).sin()).collect();

        let digital = DelayParams::digital();
        group.bench_with_input(BenchmarkId::new("digital", len), &len, |b, _| {
            b.iter(|| process_delay_seeded(black_box(&input), SAMPLE_RATE, &digital, 0))
        });

        let tape = DelayParams::tape_echo();
        group.bench_with_input(BenchmarkId::new("analog", len), &len, |b, _| {
            b.iter(|| process_delay_seeded(black_box(&input), SAMPLE_RATE, &tape, 0))
        });

        let dry_tape = DelayParams::tape_echo().hiss_level(0.0);
        group.bench_with_input(BenchmarkId::new("analog_no_hiss", len), &len, |b, _| {
            b.iter(|| process_delay_seeded(black_box(&input), SAMPLE_RATE, &dry_tape, 0))
        });
    }

    group.finish();
}
