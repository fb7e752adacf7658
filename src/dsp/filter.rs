//! One-pole low-pass used to darken the tape echo.
//!
//! ```text
//! y[n] = y[n-1] + α·(x[n] - y[n-1])      α = dt / (RC + dt)
//! ```
//!
//! The state is carried from sample to sample, so a stream of repeats gets
//! progressively darker as it is fed back through the delay.

use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct OnePoleLowPass {
    alpha: f32,
    state: f32,
}

impl OnePoleLowPass {
    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        Self {
            alpha: Self::compute_alpha(cutoff_hz, sample_rate),
            state: 0.0,
        }
    }

    #[inline]
    fn compute_alpha(cutoff_hz: f32, sample_rate: f32) -> f32 {
        let rc = 1.0 / (TAU * cutoff_hz);
        let dt = 1.0 / sample_rate;
        dt / (rc + dt)
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32) -> f32 {
        self.state += self.alpha * (sample - self.state);
        self.state
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }
}
