//! Short-window spectral low-pass.
//!
//! Transforms a whole window, multiplies every bin by a Gaussian taper
//! centered at 0 Hz, hard-zeros everything past 1.5× the cutoff, and
//! transforms back:
//!
//! ```text
//! taper(f) = exp(-(|f| / (0.5·fc))²)      |f| <= 1.5·fc
//! taper(f) = 0                            |f| >  1.5·fc
//! ```
//!
//! The smooth taper avoids the ringing a brick-wall cut produces on short
//! windows. This is an approximation, not a continuous-time filter: the
//! frequency resolution is `sample_rate / window_len`, so a window too short
//! to resolve the cutoff degenerates toward identity (a one-sample window only
//! has the DC bin, which the taper passes at unity gain).

use std::collections::HashMap;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Taper half-width as a fraction of the cutoff.
const TAPER_WIDTH: f32 = 0.5;
/// Bins beyond this multiple of the cutoff are zeroed.
const STOP_MULTIPLE: f32 = 1.5;

/// Spectral low-pass with cached FFT plans per window length.
pub struct SpectralShaper {
    sample_rate: f32,
    planner: FftPlanner<f32>,
    plans: HashMap<usize, (Arc<dyn Fft<f32>>, Arc<dyn Fft<f32>>)>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f32>>,
}

impl SpectralShaper {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            planner: FftPlanner::new(),
            plans: HashMap::new(),
            scratch: Vec::new(),
        }
    }

    /// Gain applied to a bin at `freq_hz` for the given cutoff.
    #[inline]
    pub fn taper(freq_hz: f32, cutoff_hz: f32) -> f32 {
        let f = freq_hz.abs();
        if f > cutoff_hz * STOP_MULTIPLE {
            return 0.0;
        }
        let x = f / (cutoff_hz * TAPER_WIDTH);
        (-x * x).exp()
    }

    /// Signed frequency of FFT bin `k` in a window of `len` samples.
    ///
    /// Bins past the midpoint are negative frequencies.
    #[inline]
    fn bin_frequency(&self, k: usize, len: usize) -> f32 {
        let resolution = self.sample_rate / len as f32;
        if k < (len + 1) / 2 {
            k as f32 * resolution
        } else {
            (k as f32 - len as f32) * resolution
        }
    }

    /// Low-pass a window, returning a new buffer of the same length.
    pub fn lowpass(&mut self, signal: &[f32], cutoff_hz: f32) -> Vec<f32> {
        let len = signal.len();
        if len == 0 {
            return Vec::new();
        }

        let (forward, inverse) = self
            .plans
            .entry(len)
            .or_insert_with(|| {
                (
                    self.planner.plan_fft_forward(len),
                    self.planner.plan_fft_inverse(len),
                )
            })
            .clone();

        let mut spectrum: Vec<Complex<f32>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());
        if self.scratch.len() < scratch_len {
            self.scratch.resize(scratch_len, Complex::new(0.0, 0.0));
        }

        forward.process_with_scratch(&mut spectrum, &mut self.scratch[..scratch_len]);

        for (k, bin) in spectrum.iter_mut().enumerate() {
            *bin *= Self::taper(self.bin_frequency(k, len), cutoff_hz);
        }

        inverse.process_with_scratch(&mut spectrum, &mut self.scratch[..scratch_len]);

        // rustfft does not normalize the inverse transform
        let norm = 1.0 / len as f32;
        spectrum.iter().map(|c| c.re * norm).collect()
    }
}
