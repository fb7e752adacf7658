// Purpose - session driver: load a WAV, run the delay, write a WAV

pub mod resample;
pub mod wav;

use std::path::Path;

use tracing::info;

use crate::delay::{process_delay, process_delay_seeded};
use crate::error::Result;
use crate::params::DelayParams;

/// Mono samples plus the rate they were recorded at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Load `input`, apply the delay at `sample_rate`, and write 16-bit PCM to
/// `output`. A `seed` makes analog mode reproducible.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    sample_rate: u32,
    params: &DelayParams,
    seed: Option<u64>,
) -> Result<SampleBuffer> {
    params.validate(sample_rate)?;

    let source = wav::load_mono(input.as_ref(), sample_rate)?;
    info!(
        path = %input.as_ref().display(),
        samples = source.len(),
        seconds = source.duration(),
        "loaded input"
    );

    let samples = match seed {
        Some(seed) => process_delay_seeded(&source.samples, sample_rate, params, seed)?,
        None => process_delay(&source.samples, sample_rate, params)?,
    };
    let rendered = SampleBuffer::new(samples, sample_rate);

    wav::write_pcm16(output.as_ref(), &rendered)?;
    info!(path = %output.as_ref().display(), mode = %params.mode, "wrote delayed audio");

    Ok(rendered)
}
