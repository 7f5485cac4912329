//! Planar RGB frame reader.
//!
//! The input format is a headerless frame of exactly three contiguous
//! planes (all red bytes, then all green, then all blue), each plane
//! row-major at the caller-supplied dimensions. There is no metadata in
//! the byte stream; width and height travel out of band.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grid::{PixelGrid, Rgb};
use crate::image_pipeline::raw::reader::PlanarImageReader;

pub struct PlanarRgbReader;

impl PlanarImageReader for PlanarRgbReader {
    /// Decodes one planar RGB frame into a pixel grid.
    ///
    /// For the pixel at `(x, y)` the three channels live at the same
    /// row-major index in each plane: `r = data[ind]`,
    /// `g = data[ind + width*height]`, `b = data[ind + 2*width*height]`
    /// with `ind = y*width + x`. Bytes past the first frame are
    /// ignored, matching a fixed-size read from the front of the file.
    ///
    /// # Arguments
    ///
    /// * `width` - Frame width in pixels, must be non-zero
    /// * `height` - Frame height in pixels, must be non-zero
    /// * `data` - At least `width*height*3` bytes of planar RGB
    ///
    /// # Returns
    ///
    /// * `Ok(PixelGrid)` - Decoded `width x height` grid
    /// * `Err(ConversionError::InvalidDimensions)` - A dimension is zero
    /// * `Err(ConversionError::TruncatedInput)` - Buffer shorter than one frame
    fn read_planar(&self, width: usize, height: usize, data: &[u8]) -> Result<PixelGrid> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        let plane = width * height;
        let frame = plane * 3;
        if data.len() < frame {
            return Err(ConversionError::TruncatedInput {
                expected: frame,
                actual: data.len(),
            });
        }

        debug!(
            "Decoding planar frame: {}x{}, {} bytes available",
            width,
            height,
            data.len()
        );

        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let ind = y * width + x;
                grid.set(
                    x,
                    y,
                    Rgb::new(data[ind], data[ind + plane], data[ind + 2 * plane]),
                );
            }
        }

        Ok(grid)
    }
}
