//! Complete delay passes over realistic buffer lengths.

mod delay;

pub use delay::bench_delay;
