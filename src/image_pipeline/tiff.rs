//! TIFF writing module
//!
//! This module provides TIFF file writing capabilities with various
//! compression options, plus the pipeline configuration.

mod standard_tiff_writer;
mod writer;
pub mod types;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, PivotSelection, TiffCompression};
pub use writer::TiffWriter;
