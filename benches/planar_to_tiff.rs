use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use planarview_rs::image_pipeline::{
    ConversionConfig, PivotSelection, PlanarToTiffPipeline, TiffCompression,
};
use std::io::Cursor;

fn generate_planar_frame(width: usize, height: usize) -> Vec<u8> {
    let plane = width * height;
    let mut data = vec![0u8; plane * 3];
    for y in 0..height {
        for x in 0..width {
            let ind = y * width + x;
            data[ind] = ((x * 255) / width.max(1)) as u8;
            data[ind + plane] = ((y * 255) / height.max(1)) as u8;
            data[ind + 2 * plane] = ((x + y) % 256) as u8;
        }
    }
    data
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (128, 128, "128x128"),
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_planar_frame(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, data| {
            let config = ConversionConfig::default();
            let pipeline = PlanarToTiffPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(width, height, black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_scale_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_factors");
    let frame = generate_planar_frame(512, 512);

    for scale in [0.5f32, 1.0, 2.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{scale}")),
            &frame,
            |b, data| {
                let config = ConversionConfig::builder().scale(Some(scale)).build();
                let pipeline = PlanarToTiffPipeline::new(config);

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.convert(512, 512, black_box(data), &mut output);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_quantization_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantization_modes");
    let frame = generate_planar_frame(512, 512);

    let modes = vec![
        (PivotSelection::Fixed(-1), "uniform"),
        (PivotSelection::Fixed(128), "log_fixed_pivot"),
        (PivotSelection::Auto, "log_auto_pivot"),
    ];

    for (pivot, label) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, data| {
            let config = ConversionConfig::builder()
                .quantize_bits(Some(2))
                .pivot(pivot)
                .build();
            let pipeline = PlanarToTiffPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(512, 512, black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_methods");
    let frame = generate_planar_frame(512, 512);

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, data| {
            let config = ConversionConfig::builder().compression(compression).build();
            let pipeline = PlanarToTiffPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(512, 512, black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_scale_factors,
    benchmark_quantization_modes,
    benchmark_compression_methods
);
criterion_main!(benches);
