use criterion::{criterion_group, criterion_main, Criterion};
use stegano_depth_core::media::audio::{widen, LsbCodec};
use stegano_depth_core::CodecOptions;

pub fn audio_decoding(c: &mut Criterion) {
    let mut samples: Vec<u32> = (0..441_000)
        .map(|i| widen(((i as f32 / 9.0).sin() * 16_000.0) as i32))
        .collect();
    let opts = CodecOptions::within_depth(1).expect("Invalid depth");
    LsbCodec::hide(&mut samples, b"Hello World!", &opts).expect("Cannot hide secret message");

    c.bench_function("Audio Decoding", |b| {
        b.iter(|| {
            LsbCodec::unveil(&samples, &opts).expect("Cannot unveil secret message");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
