//! Image processing pipeline module
//!
//! This module provides a structured approach to turning raw planar
//! RGB frames into processed images, with separate modules for frame
//! decoding, grid transforms, TIFF writing, and conversion
//! orchestration.

pub mod common;
pub mod conversions;
pub mod grid;
pub mod raw;
pub mod tiff;
pub mod transform;

pub use common::{
    ConversionError,
    Result,
};

pub use grid::{
    PixelGrid,
    Rgb,
};

pub use raw::{
    PlanarImageReader,
    PlanarRgbReader,
};

pub use transform::{
    Histogram,
    QuantizationParams,
    QuantizeMode,
    quantize,
    resample,
};

pub use tiff::{
    ConversionConfig,
    ConversionConfigBuilder,
    PivotSelection,
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
};

pub use conversions::{
    PlanarToTiffPipeline,
};
