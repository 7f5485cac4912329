use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grid::PixelGrid;

pub trait PlanarImageReader {
    fn read_planar(&self, width: usize, height: usize, data: &[u8]) -> Result<PixelGrid>;
}
