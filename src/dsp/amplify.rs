//! Peak measurement and normalization.

/*
Peak Normalization
==================

Offline effects can push a buffer well past full scale (the echo path boosts
the wet signal, feedback stacks repeats on top of each other). Rather than
clipping, the finished buffer is scaled so its loudest sample lands exactly
on ±1.0:

    peak      = max |x[i]|
    output[i] = x[i] / peak

Normalization only happens at buffer boundaries: after loading an input and
after the delay pass has produced its complete output. A silent buffer
(peak = 0) is left untouched.
*/

/// Largest absolute sample value in the buffer, 0.0 when empty.
#[inline]
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

/// Scale a buffer in place so its peak is 1.0.
///
/// Returns the peak that was divided out, or `None` if the buffer is silent
/// and was left as-is.
pub fn normalize_peak(buffer: &mut [f32]) -> Option<f32> {
    let peak = peak(buffer);
    if peak <= 0.0 {
        return None;
    }
    let scale = 1.0 / peak;
    for sample in buffer.iter_mut() {
        *sample *= scale;
    }
    Some(peak)
}

/// Multiply every sample by a constant gain.
pub fn apply_gain(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample *= gain;
    }
}
