pub mod delay; // Feedback delay core
pub mod dsp;
pub mod error;
pub mod io; // WAV session driver
pub mod params;

pub use delay::{process_delay, process_delay_seeded, process_delay_with_rng};
pub use error::{Error, Result};
pub use params::{DelayMode, DelayParams};

/// Sample rate used when a caller does not choose one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
