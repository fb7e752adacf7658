//! Feedback Delay - Digital Echo and Tape Echo
//!
//! One offline pass over a complete buffer. Every output sample reads a past
//! value from the feedback buffer, mixes it with the dry input, and writes the
//! input plus a scaled copy of the tap back into the buffer for later repeats.
//!
//! ```text
//!            ┌──────────────────────────────────────────────┐
//!            │                                              │
//! input ──┬──┴──→ (+) ──→ [feedback buffer] ──→ tap ──┬──→ ×feedback
//!         │                     ↑ read offset          │
//!         │                     │ (jitter, drift)      ↓
//!         │                                   [LPF] → [saturate]   (analog)
//!         │                                            │
//!         └── ×(1-mix) ──→ (+) ←── ×2·mix ─────────────┘
//!                           ↑
//!                  hiss ×(1-mix)                        (analog)
//!                           │
//!                           ↓
//!                    peak normalize ──→ output
//! ```
//!
//! # Modes
//!
//! - **Digital**: the tap sits a fixed `delay_time` behind the write cursor.
//!   Fully deterministic; the random source is never touched.
//! - **Analog**: the read offset moves. Each sample draws a fresh uniform
//!   jitter in `±timing_jitter` and adds a slow smoothed-noise drift. The tap
//!   then runs through a one-pole low-pass (state carried across samples) and
//!   unity-gain tape saturation. Because feedback re-injects the colored tap,
//!   each repeat comes back darker and more compressed than the last.
//!
//! # Per-sample Update
//!
//! ```text
//! out[i] = x[i]·(1-mix) + 2·tap·mix + hiss[i]·(1-mix)
//! buf[i] = x[i] + feedback·tap
//! ```
//!
//! The wet path is boosted by 2 before mixing; the finished buffer is
//! normalized to unit peak afterwards, so absolute levels are relative.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::dsp::amplify::normalize_peak;
use crate::dsp::delay::FeedbackBuffer;
use crate::dsp::filter::OnePoleLowPass;
use crate::dsp::noise::{hiss_bed, smoothed_lfo};
use crate::dsp::saturation::tape_saturate;
use crate::dsp::spectral::SpectralShaper;
use crate::error::{Error, Result};
use crate::params::{DelayMode, DelayParams};

/// Emphasis applied to the wet path only.
pub const WET_BOOST: f32 = 2.0;
/// Carrier rate of the slow pitch-drift modulation.
pub const DRIFT_RATE_HZ: f32 = 0.05;
/// Saturation gain for the echo tap.
const TAPE_GAIN: f32 = 1.0;

/// Run the delay with a thread-local random source.
pub fn process_delay(input: &[f32], sample_rate: u32, params: &DelayParams) -> Result<Vec<f32>> {
    process_delay_with_rng(input, sample_rate, params, &mut rand::thread_rng())
}

/// Run the delay with a reproducible random source.
pub fn process_delay_seeded(
    input: &[f32],
    sample_rate: u32,
    params: &DelayParams,
    seed: u64,
) -> Result<Vec<f32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    process_delay_with_rng(input, sample_rate, params, &mut rng)
}

/// Run the delay, drawing all randomness from `rng`.
///
/// Returns a buffer the same length as `input`, peak-normalized to unit
/// amplitude (left silent if the computed output is silent).
pub fn process_delay_with_rng<R: Rng + ?Sized>(
    input: &[f32],
    sample_rate: u32,
    params: &DelayParams,
    rng: &mut R,
) -> Result<Vec<f32>> {
    params.validate(sample_rate)?;
    validate_input(input)?;

    let sr = sample_rate as f32;
    let delay_samples = params.delay_samples(sample_rate);

    let tape = match params.mode {
        DelayMode::Digital => None,
        DelayMode::Analog => Some(TapeModulation::generate(input.len(), sr, params, rng)),
    };

    debug!(
        mode = %params.mode,
        delay_samples,
        input_len = input.len(),
        "starting delay pass"
    );

    // One cell per input sample; taps past the written region read silence
    let mut feedback = FeedbackBuffer::new(input.len());
    let mut tone = OnePoleLowPass::new(params.lp_cutoff, sr);
    let mut output = Vec::with_capacity(input.len());

    let dry_gain = 1.0 - params.mix;
    let wet_gain = WET_BOOST * params.mix;

    for (i, &dry) in input.iter().enumerate() {
        let (read_pos, delayed) = match &tape {
            None => (
                i as i64 - delay_samples as i64,
                feedback.read_behind(delay_samples),
            ),
            Some(tape) => {
                let jitter = if params.timing_jitter > 0.0 {
                    rng.gen_range(-params.timing_jitter..=params.timing_jitter)
                } else {
                    0.0
                };
                let read_pos = i as i64 - tape.read_offset(i, params.delay_time, jitter, sr);
                let raw = feedback.read_clamped(read_pos);
                (read_pos, tape_saturate(tone.next_sample(raw), TAPE_GAIN))
            }
        };

        let hiss = tape.as_ref().map_or(0.0, |t| t.hiss_at(i));
        let out = dry * dry_gain + delayed * wet_gain + hiss * dry_gain;
        if !out.is_finite() {
            return Err(Error::Diverged { index: i });
        }

        feedback.push(dry + params.feedback * delayed);
        output.push(out);

        if i % delay_samples == 0 {
            trace!(index = i, read_pos, delayed, out, "tap");
        }
    }

    match normalize_peak(&mut output) {
        Some(peak) => debug!(peak, "normalized output"),
        None => warn!("delay output is silent; skipping normalization"),
    }

    Ok(output)
}

fn validate_input(input: &[f32]) -> Result<()> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = input.iter().position(|s| !s.is_finite()) {
        return Err(Error::NonFiniteSample { index });
    }
    Ok(())
}

/// Precomputed analog-mode modulation, generated once before the loop.
struct TapeModulation {
    drift: Vec<f32>,
    flutter: Option<Vec<f32>>,
    hiss: Option<Vec<f32>>,
}

impl TapeModulation {
    fn generate<R: Rng + ?Sized>(len: usize, sr: f32, params: &DelayParams, rng: &mut R) -> Self {
        let hiss = (params.hiss_level > 0.0).then(|| {
            let mut shaper = SpectralShaper::new(sr);
            hiss_bed(len, params.hiss_level, &mut shaper, rng)
        });

        // Flutter is always drawn so seeded runs stay aligned whether or not
        // it moves the tap
        let flutter = smoothed_lfo(len, sr, params.flutter_rate, params.flutter_depth, rng);
        let drift = smoothed_lfo(len, sr, DRIFT_RATE_HZ, params.pitch_drift, rng);

        Self {
            drift,
            flutter: params.flutter_in_read_offset.then_some(flutter),
            hiss,
        }
    }

    /// Read offset in whole samples for output index `i`.
    #[inline]
    fn read_offset(&self, i: usize, delay_time: f32, jitter: f32, sr: f32) -> i64 {
        let flutter = self.flutter.as_ref().map_or(0.0, |f| f[i]);
        ((delay_time + jitter + self.drift[i] + flutter) * sr) as i64
    }

    #[inline]
    fn hiss_at(&self, i: usize) -> f32 {
        self.hiss.as_ref().map_or(0.0, |h| h[i])
    }
}
