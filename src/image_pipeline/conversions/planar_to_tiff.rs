use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    grid::PixelGrid,
    raw::{PlanarImageReader, PlanarRgbReader},
    tiff::{ConversionConfig, PivotSelection, StandardTiffWriter, TiffWriter},
    transform::{Histogram, QuantizationParams, QuantizeMode, quantize, resample},
};

/// Orchestrates one frame through decode -> resample -> quantize ->
/// encode. Resampling always precedes quantization, and an auto pivot
/// is computed on the grid the quantizer actually sees.
pub struct PlanarToTiffPipeline<R: PlanarImageReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl PlanarToTiffPipeline<PlanarRgbReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: PlanarRgbReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: PlanarImageReader, W: TiffWriter> PlanarToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Resolves the configured quantization into concrete parameters,
    /// or `None` when no bit depth was requested. Auto pivot selection
    /// runs the histogram over `grid`.
    fn resolve_quantization(&self, grid: &PixelGrid) -> Result<Option<QuantizationParams>> {
        let Some(bits) = self.config.quantize_bits else {
            return Ok(None);
        };

        let mode = match self.config.pivot {
            PivotSelection::Fixed(raw) => QuantizeMode::from_raw(raw)?,
            PivotSelection::Auto => {
                let pivot = {
                    let _span = tracing::info_span!("select_pivot").entered();
                    Histogram::of(grid).optimal_pivot()
                };
                info!(pivot, "Optimal pivot selected from histogram");
                QuantizeMode::Log { pivot }
            }
        };

        Ok(Some(QuantizationParams {
            bits_per_channel: bits,
            mode,
        }))
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        width: usize,
        height: usize,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting planar RGB to TIFF conversion");

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let mut grid = {
            let _span = tracing::info_span!("decode_planar").entered();
            self.reader.read_planar(width, height, input_data)?
        };

        if let Some(scale) = self.config.scale {
            let _span = tracing::info_span!("resample", scale).entered();
            grid = resample(&grid, scale)?;
        }

        if let Some(params) = self.resolve_quantization(&grid)? {
            let _span =
                tracing::info_span!("quantize", bits = params.bits_per_channel).entered();
            grid = quantize(&grid, &params)?;
        }

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&grid, output, &self.config)?;
        }

        info!(
            width = grid.width(),
            height = grid.height(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(width, height, &input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
