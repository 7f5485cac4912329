use anyhow::{Context, bail};
use tracing::{error, info};

use planarview_rs::image_pipeline::{ConversionConfig, PivotSelection, PlanarToTiffPipeline};
use planarview_rs::logger;

const USAGE: &str = "usage: planarview <input.rgb> <width> <height> <output.tiff> [scale] [bits] [pivot|auto]";

struct Args {
    input: String,
    width: usize,
    height: usize,
    output: String,
    scale: Option<f32>,
    quantize_bits: Option<u8>,
    pivot: PivotSelection,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);

    let (Some(input), Some(width), Some(height), Some(output)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        bail!("{USAGE}");
    };

    let width: usize = width.parse().context("width must be an integer")?;
    let height: usize = height.parse().context("height must be an integer")?;

    let scale = args
        .next()
        .map(|s| s.parse::<f32>().context("scale must be a number"))
        .transpose()?;
    let quantize_bits = args
        .next()
        .map(|s| s.parse::<u8>().context("bits must be an integer"))
        .transpose()?;

    // Without an explicit pivot argument, quantization derives its
    // pivot from the intensity histogram.
    let pivot = match args.next() {
        None => PivotSelection::Auto,
        Some(s) if s == "auto" => PivotSelection::Auto,
        Some(s) => PivotSelection::Fixed(
            s.parse::<i32>()
                .context("pivot must be an integer or \"auto\"")?,
        ),
    };

    if args.next().is_some() {
        bail!("{USAGE}");
    }

    Ok(Args {
        input,
        width,
        height,
        output,
        scale,
        quantize_bits,
        pivot,
    })
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = parse_args()?;

    info!("Starting planarview...");

    let config = ConversionConfig::builder()
        .scale(args.scale)
        .quantize_bits(args.quantize_bits)
        .pivot(args.pivot)
        .build();
    let pipeline = PlanarToTiffPipeline::new(config);

    info!("Planar RGB to TIFF pipeline initialized");
    info!("Frame size: {}x{}", args.width, args.height);
    if let Some(scale) = pipeline.config().scale {
        info!("Scale factor: {}", scale);
    }
    if let Some(bits) = pipeline.config().quantize_bits {
        info!("Quantization: {} bits/channel, pivot {:?}", bits, pipeline.config().pivot);
    }

    match pipeline.convert_file(&args.input, &args.output, args.width, args.height) {
        Ok(_) => info!("Conversion successful!"),
        Err(e) => {
            error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
