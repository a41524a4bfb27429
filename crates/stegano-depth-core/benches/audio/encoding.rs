use criterion::{criterion_group, criterion_main, Criterion};
use stegano_depth_core::media::audio::{widen, LsbCodec};
use stegano_depth_core::CodecOptions;

pub fn audio_encoding(c: &mut Criterion) {
    let samples: Vec<u32> = (0..441_000)
        .map(|i| widen(((i as f32 / 9.0).sin() * 16_000.0) as i32))
        .collect();
    let secret_message = b"Hello World!";
    let opts = CodecOptions::default();

    c.bench_function("Audio Encoding", |b| {
        b.iter(|| {
            let mut samples = samples.clone();
            LsbCodec::hide(&mut samples, &secret_message[..], &opts)
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
