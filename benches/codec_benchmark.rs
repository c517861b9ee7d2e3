use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordshare::codec::ByteWordCodec;
use wordshare::dictionary::Dictionary;
use wordshare::format::{parse, render};
use wordshare::provider::{SecretSharingProvider, ShamirProvider};

fn dictionary() -> Dictionary {
    let words: Vec<String> = (0..256).map(|i| format!("word{i}")).collect();
    Dictionary::parse(&words.join("\n")).unwrap()
}

fn bench_split(c: &mut Criterion) {
    c.bench_function("split", |b| {
        let secret = b"this is a very secret message";
        b.iter(|| ShamirProvider.split(black_box(5), black_box(10), black_box(secret)))
    });
}

fn bench_combine(c: &mut Criterion) {
    c.bench_function("combine", |b| {
        let tokens = ShamirProvider
            .split(5, 10, b"this is a very secret message")
            .unwrap();
        b.iter(|| ShamirProvider.combine(black_box(&tokens[..5])))
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("render", |b| {
        let dictionary = dictionary();
        let codec = ByteWordCodec::new(&dictionary);
        let tokens = ShamirProvider.split(5, 10, &[7u8; 200]).unwrap();
        b.iter(|| render(black_box(&tokens), 5, 10, &codec))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        let dictionary = dictionary();
        let codec = ByteWordCodec::new(&dictionary);
        let tokens = ShamirProvider.split(5, 10, &[7u8; 200]).unwrap();
        let text = render(&tokens, 5, 10, &codec).unwrap();
        b.iter(|| parse(black_box(&text), &codec))
    });
}

criterion_group!(benches, bench_split, bench_combine, bench_render, bench_parse);
criterion_main!(benches);
