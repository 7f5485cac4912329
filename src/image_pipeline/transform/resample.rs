use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grid::PixelGrid;

/// Resamples `src` to `floor(width*scale) x floor(height*scale)` with
/// nearest-neighbor sampling.
///
/// Each destination pixel `(x, y)` copies the source pixel at
/// `(floor(x/scale), floor(y/scale))`. When floating-point rounding at
/// the far edge maps a destination pixel past the last source row or
/// column, that pixel is left at the grid's default (black) instead of
/// reading out of bounds. Output dimensions are a deterministic
/// function of the input dimensions and the scale.
pub fn resample(src: &PixelGrid, scale: f32) -> Result<PixelGrid> {
    // NaN fails this comparison too, so it is rejected along with
    // zero and negative factors.
    if !(scale > 0.0) {
        return Err(ConversionError::InvalidScale(scale));
    }

    let dst_width = (src.width() as f32 * scale) as usize;
    let dst_height = (src.height() as f32 * scale) as usize;

    debug!(
        "Resampling {}x{} -> {}x{} (scale {})",
        src.width(),
        src.height(),
        dst_width,
        dst_height,
        scale
    );

    let mut dst = PixelGrid::new(dst_width, dst_height);
    for y in 0..dst_height {
        let py = (y as f32 / scale) as usize;
        if py >= src.height() {
            continue;
        }
        for x in 0..dst_width {
            let px = (x as f32 / scale) as usize;
            if px >= src.width() {
                continue;
            }
            dst.set(x, y, src.get(px, py));
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::grid::Rgb;

    fn gradient_grid(width: usize, height: usize) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (y * width + x) as u8;
                grid.set(x, y, Rgb::new(v, v.wrapping_add(1), v.wrapping_add(2)));
            }
        }
        grid
    }

    #[test]
    fn test_identity_scale_copies_every_pixel() {
        let src = gradient_grid(5, 3);
        let dst = resample(&src, 1.0).unwrap();

        assert_eq!(dst.width(), 5);
        assert_eq!(dst.height(), 3);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(dst.get(x, y), src.get(x, y));
            }
        }
    }

    #[test]
    fn test_upscale_2x_replicates_source_blocks() {
        let src = gradient_grid(2, 2);
        let dst = resample(&src, 2.0).unwrap();

        assert_eq!(dst.width(), 4);
        assert_eq!(dst.height(), 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(dst.get(x, y), src.get(x / 2, y / 2));
            }
        }
    }

    #[test]
    fn test_downscale_truncates_dimensions() {
        let src = gradient_grid(5, 5);
        let dst = resample(&src, 0.5).unwrap();

        assert_eq!(dst.width(), 2);
        assert_eq!(dst.height(), 2);
        assert_eq!(dst.get(1, 1), src.get(2, 2));
    }

    #[test]
    fn test_tiny_scale_yields_empty_grid() {
        let src = gradient_grid(2, 2);
        let dst = resample(&src, 0.25).unwrap();
        assert!(dst.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let src = gradient_grid(2, 2);
        assert!(matches!(
            resample(&src, 0.0),
            Err(ConversionError::InvalidScale(_))
        ));
        assert!(matches!(
            resample(&src, -1.5),
            Err(ConversionError::InvalidScale(_))
        ));
        assert!(matches!(
            resample(&src, f32::NAN),
            Err(ConversionError::InvalidScale(_))
        ));
    }
}
