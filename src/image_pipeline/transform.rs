//! Grid transform module
//!
//! This module contains the in-memory transforms applied between
//! decoding and encoding: nearest-neighbor resampling, intensity
//! histogram analysis, and per-channel bit-depth quantization.

mod histogram;
mod quantize;
mod resample;
pub mod types;

pub use histogram::Histogram;
pub use quantize::quantize;
pub use resample::resample;
pub use types::{QuantizationParams, QuantizeMode};
