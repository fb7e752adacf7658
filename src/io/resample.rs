//! Linear-interpolation sample-rate conversion.
//!
//! Good enough for bringing a source file onto the processing rate; it does
//! not band-limit, so downsampling by large ratios will alias.

/// Resample `samples` from `from_rate` to `to_rate`.
///
/// The output length is `len · to_rate / from_rate`, rounded, and at least one
/// sample for non-empty input.
pub fn resample_linear(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if samples.is_empty() || from_rate == to_rate || from_rate == 0 || to_rate == 0 {
        return samples.to_vec();
    }

    let step = from_rate as f64 / to_rate as f64;
    let out_len = ((samples.len() as f64 / step).round() as usize).max(1);
    let last = samples.len() - 1;

    (0..out_len)
        .map(|j| {
            let pos = j as f64 * step;
            let index = pos.floor() as usize;
            if index >= last {
                return samples[last];
            }
            let frac = (pos - index as f64) as f32;
            samples[index] + (samples[index + 1] - samples[index]) * frac
        })
        .collect()
}
