//! Tape Saturation
//!
//! Analog tape and the electronics around it compress loud signals smoothly
//! instead of clipping them. This stage models that with a hyperbolic tangent
//! preceded by a small cubic term.
//!
//! # Transfer Function
//!
//! ```text
//! f(x) = tanh(g·x + 0.05·x³) / g
//! ```
//!
//! - The cubic pre-emphasis adds a touch of odd-harmonic coloration before
//!   the compression kicks in.
//! - `tanh` bends the curve toward ±1, so the output settles at ±1/g as the
//!   input grows without bound.
//! - Dividing by `g` keeps small signals near unity gain.
//!
//! # Gain Values
//!
//!   1.0  = Gentle tape compression (used by the echo path)
//!   2-4  = Audible warmth
//!   5+   = Heavy saturation, strongly limited output (±1/g)
//!
//! `g` must be nonzero. The stage does not check this.

/// Cubic pre-emphasis coefficient.
const CUBIC: f32 = 0.05;

/// Saturate one sample.
#[inline]
pub fn tape_saturate(sample: f32, gain: f32) -> f32 {
    (sample * gain + CUBIC * sample * sample * sample).tanh() / gain
}

/// Saturate an entire buffer in place.
pub fn tape_saturate_buffer(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample = tape_saturate(*sample, gain);
    }
}
