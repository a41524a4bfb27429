use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use stegano_depth_core::media::image::{extract_carrier, extract_carrier_concurrent, LsbCodec};
use stegano_depth_core::CodecOptions;

pub fn image_decoding(c: &mut Criterion) {
    let plain_image = DynamicImage::ImageRgba8(RgbaImage::from_fn(512, 512, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    }));
    let opts = CodecOptions::default();
    let secret_image = DynamicImage::ImageRgba8(
        LsbCodec::hide(&plain_image, b"Hello World!", &opts).expect("Cannot hide secret message"),
    );

    c.bench_function("Image Decoding", |b| {
        b.iter(|| {
            LsbCodec::unveil(&secret_image, &opts).expect("Cannot unveil secret message");
        })
    });

    let rgba = secret_image.to_rgba8();
    c.bench_function("Carrier Extraction single pass", |b| {
        b.iter(|| extract_carrier(&rgba).expect("Cannot extract carrier"))
    });
    c.bench_function("Carrier Extraction concurrent", |b| {
        b.iter(|| extract_carrier_concurrent(&rgba, opts.workers).expect("Cannot extract carrier"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
