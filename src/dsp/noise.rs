//! Smoothed noise modulation sources.

/*
Smoothed Noise LFO
==================

Tape machines never run at a perfectly constant speed. The capstan wobbles,
the tape stretches, the motor drifts. Those variations are slow and irregular:
not a clean sine LFO, and not white noise either.

This module builds that kind of signal in three steps:

    1. white      n[i] ~ N(0, 1)                      (independent draws)
    2. smooth     s[i] = mean(n[i-100 .. i+99])       (200-sample window)
    3. modulate   m[i] = depth · s[i] · sin(2π·rate·i/sr)

The moving average removes the fast fluctuation; the slow carrier makes the
wander swell and recede. With a 200-sample window the smoothed noise has a
standard deviation of about 1/√200 ≈ 0.07, so the output usually stays well
inside ±depth. Gaussian tails mean there is no hard bound: callers treat the
result as unbounded in principle.

Vocabulary
----------

  pitch drift   Slow speed wander (carrier ~0.05 Hz). Pulls the echo sharp
                and flat over many seconds.

  flutter       Faster, shallower speed wobble (carrier ~0.5 Hz).

  hiss          Broadband tape noise. Built from the same white source but
                smoothed over a shorter window and darkened spectrally.

Randomness
----------

Every generator takes an explicit `Rng`. Pass a seeded generator
(`ChaCha8Rng::seed_from_u64`) for reproducible output.
*/

use std::f32::consts::TAU;

use rand::Rng;
use rand_distr::StandardNormal;

use super::amplify::apply_gain;
use super::spectral::SpectralShaper;

/// Smoothing window for drift and flutter.
pub const LFO_SMOOTHING: usize = 200;
/// Smoothing window for the hiss bed.
pub const HISS_SMOOTHING: usize = 50;
/// Spectral cutoff that darkens the hiss bed.
pub const HISS_CUTOFF_HZ: f32 = 500.0;

/// Draw `len` independent standard-normal samples.
pub fn white_noise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f32> {
    (0..len).map(|_| rng.sample::<f32, _>(StandardNormal)).collect()
}

/// Centered moving average with zero padding at the edges.
///
/// Output has the same length as the input. For an even `width` the window
/// covers `i - width/2 ..= i + width/2 - 1`.
pub fn moving_average(signal: &[f32], width: usize) -> Vec<f32> {
    let len = signal.len();
    if width <= 1 || len == 0 {
        return signal.to_vec();
    }

    let ahead = (width - 1) / 2;
    let behind = width - 1 - ahead;
    let scale = 1.0 / width as f32;

    // Running sum in f64 keeps long buffers from accumulating drift
    let mut sum: f64 = signal[..ahead.min(len)].iter().map(|&x| x as f64).sum();
    let mut out = Vec::with_capacity(len);

    for i in 0..len {
        if let Some(&entering) = signal.get(i + ahead) {
            sum += entering as f64;
        }
        out.push(sum as f32 * scale);
        if i >= behind {
            sum -= signal[i - behind] as f64;
        }
    }

    out
}

/// Slow band-limited random modulation: smoothed noise on a sine carrier.
pub fn smoothed_lfo<R: Rng + ?Sized>(
    len: usize,
    sample_rate: f32,
    rate_hz: f32,
    depth: f32,
    rng: &mut R,
) -> Vec<f32> {
    let noise = moving_average(&white_noise(len, rng), LFO_SMOOTHING);
    let step = TAU * rate_hz / sample_rate;

    noise
        .into_iter()
        .enumerate()
        .map(|(i, n)| depth * n * (step * i as f32).sin())
        .collect()
}

/// Dark tape-hiss bed scaled to `level`.
pub fn hiss_bed<R: Rng + ?Sized>(
    len: usize,
    level: f32,
    shaper: &mut SpectralShaper,
    rng: &mut R,
) -> Vec<f32> {
    let noise = moving_average(&white_noise(len, rng), HISS_SMOOTHING);
    let mut hiss = shaper.lowpass(&noise, HISS_CUTOFF_HZ);
    apply_gain(&mut hiss, level);
    hiss
}
