//! Processing parameters for one delay pass.
//!
//! Parameters are plain immutable values: build one, hand it to
//! [`process_delay`](crate::process_delay), and it is only read. Nothing is
//! carried between calls.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Signal path for the echo tap.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelayMode {
    /// Clean echo: fixed read offset, no coloration.
    #[default]
    Digital,
    /// Tape echo: jittered and drifting read offset, darkened and saturated
    /// repeats, optional hiss.
    Analog,
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayMode::Digital => f.write_str("digital"),
            DelayMode::Analog => f.write_str("analog"),
        }
    }
}

impl FromStr for DelayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digital" => Ok(DelayMode::Digital),
            "analog" | "tape" => Ok(DelayMode::Analog),
            other => Err(format!("unknown delay mode `{other}` (expected digital or analog)")),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayParams {
    /// Nominal echo spacing in seconds.
    pub delay_time: f32,
    /// Amount of the delayed tap fed back into the buffer.
    pub feedback: f32,
    /// Dry/wet balance, 0 = dry only, 1 = wet only.
    pub mix: f32,
    pub mode: DelayMode,
    /// Analog darkening cutoff in Hz.
    pub lp_cutoff: f32,
    /// Flutter carrier rate in Hz.
    pub flutter_rate: f32,
    /// Flutter depth in seconds.
    pub flutter_depth: f32,
    /// Slow drift depth in seconds.
    pub pitch_drift: f32,
    /// Bound of the per-sample uniform timing jitter, in seconds.
    pub timing_jitter: f32,
    /// Linear amplitude of the analog hiss bed.
    pub hiss_level: f32,
    /// Fold the flutter signal into the analog read offset.
    ///
    /// Off by default: flutter is generated but does not move the tap.
    pub flutter_in_read_offset: bool,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            delay_time: 0.25,
            feedback: 0.5,
            mix: 0.5,
            mode: DelayMode::Digital,
            lp_cutoff: 1500.0,
            flutter_rate: 0.5,
            flutter_depth: 0.005,
            pitch_drift: 0.1,
            timing_jitter: 0.05,
            hiss_level: 0.0001,
            flutter_in_read_offset: false,
        }
    }
}

impl DelayParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean quarter-second slapback.
    pub fn digital() -> Self {
        Self {
            lp_cutoff: 5000.0,
            ..Self::default()
        }
    }

    /// Dark, wobbly, long-tailed tape echo.
    pub fn tape_echo() -> Self {
        Self {
            feedback: 0.7,
            mix: 0.9,
            mode: DelayMode::Analog,
            lp_cutoff: 1000.0,
            ..Self::default()
        }
    }

    pub fn delay_time(mut self, seconds: f32) -> Self {
        self.delay_time = seconds;
        self
    }

    pub fn feedback(mut self, feedback: f32) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn mix(mut self, mix: f32) -> Self {
        self.mix = mix;
        self
    }

    pub fn mode(mut self, mode: DelayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn lp_cutoff(mut self, hz: f32) -> Self {
        self.lp_cutoff = hz;
        self
    }

    pub fn flutter(mut self, rate_hz: f32, depth_seconds: f32) -> Self {
        self.flutter_rate = rate_hz;
        self.flutter_depth = depth_seconds;
        self
    }

    pub fn pitch_drift(mut self, seconds: f32) -> Self {
        self.pitch_drift = seconds;
        self
    }

    pub fn timing_jitter(mut self, seconds: f32) -> Self {
        self.timing_jitter = seconds;
        self
    }

    pub fn hiss_level(mut self, level: f32) -> Self {
        self.hiss_level = level;
        self
    }

    pub fn flutter_in_read_offset(mut self, enabled: bool) -> Self {
        self.flutter_in_read_offset = enabled;
        self
    }

    /// Nominal delay in whole samples (truncated).
    pub fn delay_samples(&self, sample_rate: u32) -> usize {
        (self.delay_time * sample_rate as f32) as usize
    }

    /// Check every precondition before any processing starts.
    pub fn validate(&self, sample_rate: u32) -> Result<()> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        if !self.delay_time.is_finite() || self.delay_time <= 0.0 {
            return Err(Error::param("delay_time", self.delay_time, "must be a positive number of seconds"));
        }
        if self.delay_samples(sample_rate) == 0 {
            return Err(Error::param("delay_time", self.delay_time, "shorter than one sample"));
        }
        if !self.feedback.is_finite() {
            return Err(Error::param("feedback", self.feedback, "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.mix) {
            return Err(Error::param("mix", self.mix, "must be within 0..=1"));
        }
        if !self.lp_cutoff.is_finite() || self.lp_cutoff <= 0.0 {
            return Err(Error::param("lp_cutoff", self.lp_cutoff, "must be a positive frequency"));
        }
        non_negative("timing_jitter", self.timing_jitter)?;
        non_negative("pitch_drift", self.pitch_drift)?;
        non_negative("hiss_level", self.hiss_level)?;
        non_negative("flutter_rate", self.flutter_rate)?;
        non_negative("flutter_depth", self.flutter_depth)?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::param(name, value, "must be finite and non-negative"));
    }
    Ok(())
}
