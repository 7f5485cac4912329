//! Pipeline configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// How the quantization mode is resolved before quantizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotSelection {
    /// Derive the pivot from the intensity histogram of the grid as it
    /// enters the quantizer (after any resampling).
    Auto,
    /// Use this raw mode value: `-1` selects uniform quantization, a
    /// value `>= 1` is a logarithmic pivot.
    Fixed(i32),
}

/// Configuration for planar RGB to TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Resample factor applied after decoding, if any
    pub scale: Option<f32>,
    /// Quantization bit depth per channel; `None` skips quantization
    pub quantize_bits: Option<u8>,
    /// Pivot resolution for quantization, ignored when `quantize_bits`
    /// is `None`
    pub pivot: PivotSelection,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            scale: None,
            quantize_bits: None,
            pivot: PivotSelection::Auto,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    scale: Option<Option<f32>>,
    quantize_bits: Option<Option<u8>>,
    pivot: Option<PivotSelection>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn scale(mut self, scale: Option<f32>) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn quantize_bits(mut self, bits: Option<u8>) -> Self {
        self.quantize_bits = Some(bits);
        self
    }

    pub fn pivot(mut self, pivot: PivotSelection) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            scale: self.scale.unwrap_or(default.scale),
            quantize_bits: self.quantize_bits.unwrap_or(default.quantize_bits),
            pivot: self.pivot.unwrap_or(default.pivot),
        }
    }
}
