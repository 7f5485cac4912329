use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grid::{PixelGrid, Rgb};
use crate::image_pipeline::transform::types::{QuantizationParams, QuantizeMode};

/// Quantizes every channel of every pixel through the mapping selected
/// by `params`, producing a new grid of the same dimensions.
///
/// Channels are independent: r, g and b go through the same function
/// with the same parameters, and no state is carried between calls, so
/// pixels may be processed in any order.
pub fn quantize(src: &PixelGrid, params: &QuantizationParams) -> Result<PixelGrid> {
    if !(1..=8).contains(&params.bits_per_channel) {
        return Err(ConversionError::InvalidBitDepth(params.bits_per_channel));
    }

    let max_val = (1u32 << params.bits_per_channel) - 1;
    debug!(
        "Quantizing {}x{} grid: {} bits/channel, mode {:?}",
        src.width(),
        src.height(),
        params.bits_per_channel,
        params.mode
    );

    let mut dst = PixelGrid::new(src.width(), src.height());
    for y in 0..src.height() {
        for x in 0..src.width() {
            let px = src.get(x, y);
            dst.set(
                x,
                y,
                Rgb::new(
                    quantize_channel(px.r, max_val, params.mode),
                    quantize_channel(px.g, max_val, params.mode),
                    quantize_channel(px.b, max_val, params.mode),
                ),
            );
        }
    }

    Ok(dst)
}

/// Maps one channel value to its quantized representative.
///
/// Uniform mode divides 0..=255 into `max_val + 1` equal-width bins and
/// returns each bin's midpoint. Logarithmic mode returns
/// `floor(ln(value+1) / ln(pivot+1) * max_val)` clamped to `max_val`;
/// the result lives on the reduced `0..=max_val` scale, not back on
/// 0..=255.
fn quantize_channel(value: u8, max_val: u32, mode: QuantizeMode) -> u8 {
    match mode {
        QuantizeMode::Uniform => {
            let step = 256 / (max_val + 1);
            ((value as u32 / step) * step + step / 2) as u8
        }
        QuantizeMode::Log { pivot } => {
            let log_value =
                ((value as f64 + 1.0).ln() / (pivot as f64 + 1.0).ln() * max_val as f64) as u32;
            log_value.min(max_val) as u8
        }
    }
}
