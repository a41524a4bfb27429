use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use stegano_depth_core::media::image::LsbCodec;
use stegano_depth_core::CodecOptions;

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = DynamicImage::ImageRgba8(RgbaImage::from_fn(512, 512, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    }));
    let secret_message = b"Hello World!";

    for depth in [0, 3, 7] {
        let opts = CodecOptions::within_depth(depth).expect("Invalid depth");
        c.bench_function(&format!("Image Encoding depth {depth}"), |b| {
            b.iter(|| {
                LsbCodec::hide(&plain_image, &secret_message[..], &opts)
                    .expect("Cannot hide secret message");
            })
        });
    }
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
