//! Benchmarks for low-level DSP primitives.

mod filter;
mod noise;
mod saturation;
mod spectral;

pub use filter::bench_filter;
pub use noise::bench_noise;
pub use saturation::bench_saturation;
pub use spectral::bench_spectral;
