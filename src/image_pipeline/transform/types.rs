//! Quantization parameter types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Channel mapping used by the quantizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeMode {
    /// Equal-width bins over 0..=255, each replaced by its midpoint.
    Uniform,
    /// Logarithmic mapping with `pivot + 1` as the log base.
    Log { pivot: u32 },
}

impl QuantizeMode {
    /// Maps the wire encoding of the mode argument: `-1` selects
    /// uniform quantization, any value `>= 1` is a logarithmic pivot.
    ///
    /// A pivot of `0` is rejected rather than floored: it would put a
    /// zero in the logarithm's denominator.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            -1 => Ok(Self::Uniform),
            pivot if pivot >= 1 => Ok(Self::Log {
                pivot: pivot as u32,
            }),
            other => Err(ConversionError::InvalidPivot(other)),
        }
    }
}

/// Parameters for one quantization pass. Channels (r, g, b) are mapped
/// independently with the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizationParams {
    /// Target bit depth per channel, valid range `1..=8`.
    pub bits_per_channel: u8,
    /// Uniform or pivot-based logarithmic mapping.
    pub mode: QuantizeMode,
}
