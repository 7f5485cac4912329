use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Truncated planar input: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid scale factor: {0} (must be > 0)")]
    InvalidScale(f32),

    #[error("Invalid bit depth: {0} (must be in 1..=8)")]
    InvalidBitDepth(u8),

    #[error("Invalid quantization mode: {0} (must be -1 for uniform, or a pivot >= 1)")]
    InvalidPivot(i32),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
