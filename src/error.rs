//! Error taxonomy for delay processing and the WAV session driver.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(u32),

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("input buffer is empty")]
    EmptyInput,

    #[error("input sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("output diverged to a non-finite value at sample {index}")]
    Diverged { index: usize },

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn param(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
