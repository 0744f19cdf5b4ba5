//! Benchmarks for skinlab-core analysis stages
//!
//! Run with: cargo bench -p skinlab-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use skinlab_core::texture::{analyze_texture, analyze_texture_multi_angle, calculate_glcm};
use skinlab_core::{
    analyze_face, AnalysisOptions, BoundingBox, GlcmParams, ImageBuffer, SixZoneFaceRegion,
};

/// Generate a synthetic skin-like image with fine pseudo-random texture
fn generate_test_face(width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        let noise = ((x.wrapping_mul(7919) ^ y.wrapping_mul(104_729)) % 24) as u8;
        [196 + noise / 2, 150 + noise, 130 + noise / 3, 255]
    })
}

/// Six zones laid out proportionally to the image size
fn proportional_regions(width: u32, height: u32) -> SixZoneFaceRegion {
    let bbox = |x: f32, y: f32, w: f32, h: f32| {
        BoundingBox::new(
            (x * width as f32) as u32,
            (y * height as f32) as u32,
            (w * width as f32) as u32,
            (h * height as f32) as u32,
        )
    };
    SixZoneFaceRegion {
        forehead: bbox(0.2, 0.05, 0.6, 0.15),
        eye_area: bbox(0.15, 0.25, 0.7, 0.08),
        nose: bbox(0.4, 0.35, 0.2, 0.25),
        left_cheek: bbox(0.08, 0.45, 0.22, 0.2),
        right_cheek: bbox(0.7, 0.45, 0.22, 0.2),
        chin: bbox(0.35, 0.78, 0.3, 0.15),
    }
}

/// Benchmark GLCM construction across gray level counts
fn bench_glcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("glcm");
    let image = generate_test_face(512, 512);
    group.throughput(Throughput::Elements(image.pixel_count() as u64));

    for levels in [16usize, 64, 256].iter() {
        let params = GlcmParams::new(*levels, 1, 0.0).unwrap();
        group.bench_with_input(BenchmarkId::new("calculate_glcm", levels), &params, |b, p| {
            b.iter(|| calculate_glcm(black_box(&image), black_box(p)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark single-angle vs. four-angle texture analysis
fn bench_texture(c: &mut Criterion) {
    let mut group = c.benchmark_group("texture");

    for size in [128, 256, 512].iter() {
        let image = generate_test_face(*size, *size);
        let label = format!("{}x{}", size, size);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("single_angle", &label),
            &image,
            |b, img| {
                let params = GlcmParams::default();
                b.iter(|| analyze_texture(black_box(img), &params).unwrap());
            },
        );

        group.bench_with_input(BenchmarkId::new("multi_angle", &label), &image, |b, img| {
            b.iter(|| analyze_texture_multi_angle(black_box(img), 64, 1).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full face analysis
fn bench_analyze_face(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_face");
    group.sample_size(20);

    for size in [256u32, 1024].iter() {
        let image = generate_test_face(*size, *size);
        let regions = proportional_regions(*size, *size);
        let options = AnalysisOptions::default();
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("analyze_face", format!("{}x{}", size, size)),
            &image,
            |b, img| {
                b.iter(|| analyze_face(black_box(img), &regions, &options).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_glcm, bench_texture, bench_analyze_face);
criterion_main!(benches);
