//! WAV loading and saving.
//!
//! Loading always yields a normalized mono buffer at the requested rate:
//! channels are averaged, the rate is converted if needed, and the result is
//! scaled to unit peak. Saving writes mono 16-bit PCM.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, warn};

use super::resample::resample_linear;
use super::SampleBuffer;
use crate::dsp::amplify::normalize_peak;
use crate::error::{Error, Result};

/// Load a WAV file as normalized mono at `target_rate`.
pub fn load_mono(path: impl AsRef<Path>, target_rate: u32) -> Result<SampleBuffer> {
    if target_rate == 0 {
        return Err(Error::InvalidSampleRate(target_rate));
    }

    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(Error::UnsupportedFormat("zero channels".into()));
    }

    let interleaved = read_samples(&mut reader, spec)?;
    let mono = downmix(&interleaved, spec.channels as usize);

    debug!(
        channels = spec.channels,
        bits = spec.bits_per_sample,
        source_rate = spec.sample_rate,
        target_rate,
        frames = mono.len(),
        "decoded wav"
    );

    let mut samples = resample_linear(&mono, spec.sample_rate, target_rate);
    if normalize_peak(&mut samples).is_none() {
        warn!(path = %path.as_ref().display(), "input is silent");
    }

    Ok(SampleBuffer::new(samples, target_rate))
}

fn read_samples<R: std::io::Read>(reader: &mut WavReader<R>, spec: WavSpec) -> Result<Vec<f32>> {
    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => Ok(reader.samples::<f32>().collect::<std::result::Result<_, _>>()?),
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = 1.0 / (1u64 << (bits - 1)) as f32;
            Ok(reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()?)
        }
        (format, bits) => Err(Error::UnsupportedFormat(format!(
            "{bits}-bit {format:?} samples"
        ))),
    }
}

/// Average interleaved frames down to one channel.
pub fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    let scale = 1.0 / channels as f32;
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect()
}

/// Write mono 16-bit PCM. Samples are clamped to ±1 before scaling.
pub fn write_pcm16(path: impl AsRef<Path>, buffer: &SampleBuffer) -> Result<()> {
    if buffer.sample_rate == 0 {
        return Err(Error::InvalidSampleRate(buffer.sample_rate));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    let scale = i16::MAX as f32;
    for &s in &buffer.samples {
        writer.write_sample((s.clamp(-1.0, 1.0) * scale) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("echo_dsp_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_downmix_averages_frames() {
        let out = downmix(&[1.0, 0.0, 0.5, 0.5, -1.0, 1.0], 2);
        assert_eq!(out, vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_downmix_mono_is_copy() {
        assert_eq!(downmix(&[0.1, 0.2], 1), vec![0.1, 0.2]);
    }

    #[test]
    fn test_pcm16_roundtrip_normalizes() {
        let path = temp_path("roundtrip.wav");
        let buffer = SampleBuffer::new(vec![0.0, 0.25, -0.5, 0.1], 22_050);
        write_pcm16(&path, &buffer).unwrap();

        let loaded = load_mono(&path, 22_050).unwrap();
        assert_eq!(loaded.sample_rate, 22_050);
        assert_eq!(loaded.len(), 4);
        // -0.5 is the peak, so everything doubles
        assert!((loaded.samples[1] - 0.5).abs() < 1e-3);
        assert!((loaded.samples[2] + 1.0).abs() < 1e-3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_stereo_float_resamples() {
        let path = temp_path("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for _ in 0..800 {
            writer.write_sample(0.2f32).unwrap();
            writer.write_sample(0.6f32).unwrap();
        }
        writer.finalize().unwrap();

        let loaded = load_mono(&path, 16_000).unwrap();
        assert_eq!(loaded.sample_rate, 16_000);
        assert_eq!(loaded.len(), 1600);
        // Constant 0.4 after downmix, normalized to 1.0
        assert!(loaded.samples.iter().all(|&s| (s - 1.0).abs() < 1e-5));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_wav_error() {
        let result = load_mono(temp_path("does_not_exist.wav"), 44_100);
        assert!(matches!(result, Err(Error::Wav(_))));
    }

    #[test]
    fn test_write_clamps_out_of_range() {
        let path = temp_path("clamp.wav");
        write_pcm16(&path, &SampleBuffer::new(vec![2.0, -3.0], 8000)).unwrap();
        let mut reader = WavReader::open(&path).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![i16::MAX, -i16::MAX]);
        std::fs::remove_file(&path).ok();
    }
}
