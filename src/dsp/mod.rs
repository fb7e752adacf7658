//! Low-level DSP primitives used by the delay core.
//!
//! Each primitive stays focused on its signal-processing math. The
//! orchestration (read offsets, mode selection, mixing) lives in
//! [`crate::delay`].

/// Peak measurement and normalization.
pub mod amplify;
/// Linear feedback storage with a single write cursor.
pub mod delay;
/// One-pole low-pass for tape darkening.
pub mod filter;
/// Smoothed noise LFOs and the hiss bed.
pub mod noise;
/// Tanh tape saturation.
pub mod saturation;
/// FFT-based short-window low-pass.
pub mod spectral;

pub use delay::FeedbackBuffer;
pub use filter::OnePoleLowPass;
pub use spectral::SpectralShaper;
