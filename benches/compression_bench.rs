use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};
use webp_squeeze::{search_quality, LibWebpEncoder, SearchParams, WebpEncoder};

fn create_test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503);
        Rgb([(v >> 8) as u8, ((x + y) % 256) as u8, (v >> 24) as u8])
    })
}

fn bench_single_encode(c: &mut Criterion) {
    let img = create_test_image(512, 512);
    let mut group = c.benchmark_group("single_encode");
    group.sample_size(10);

    for method in [0, 4, 6] {
        let encoder = LibWebpEncoder::with_method(method);
        group.bench_with_input(BenchmarkId::new("method", method), &method, |b, _| {
            b.iter(|| encoder.encode(black_box(&img), black_box(95)))
        });
    }

    group.finish();
}

fn bench_quality_search(c: &mut Criterion) {
    let img = create_test_image(512, 512);
    let encoder = LibWebpEncoder::new();
    let mut group = c.benchmark_group("quality_search");
    group.sample_size(10);

    // Budget of 1 byte forces the full descent down to the floor.
    for min_quality in [95u8, 85, 75] {
        let params = SearchParams::new(Some(1), Some(95), Some(min_quality), Some(2)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("floor", min_quality),
            &params,
            |b, params| b.iter(|| search_quality(black_box(&img), &encoder, params)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_encode, bench_quality_search);
criterion_main!(benches);
