use std::{borrow::Cow, hint::black_box};

use cerdiff::{DEVA, LATN, NaiveSegmenter, Normalizer, Scorer, compute_cer, compute_word_diff};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

const BENGALI_POOL: &[&str] = &[
    "আমি",
    "বাংলায়",
    "গান",
    "গাই",
    "আমার",
    "সোনার",
    "বাংলা",
    "তোমায়",
    "ভালোবাসি",
    "পড়া",
    "ক্ষত্রিয়",
];

/// Space-separated Bengali words with occasional dandas and double spaces.
fn corpus_bengali(seed: u64, words: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for i in 0..words {
        if i > 0 {
            out.push(' ');
            if rng.random_bool(0.05) {
                out.push(' ');
            }
        }
        out.push_str(BENGALI_POOL[rng.random_range(0..BENGALI_POOL.len())]);
        if rng.random_bool(0.1) {
            out.push('।');
        }
    }
    out
}

/// A copy of `reference` with roughly `rate` of its words swapped out.
fn corrupt(reference: &str, seed: u64, rate: f64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    reference
        .split(' ')
        .map(|word| {
            if rng.random_bool(rate) {
                BENGALI_POOL[rng.random_range(0..BENGALI_POOL.len())]
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = Normalizer::default();
    let dirty = corpus_bengali(7, 200);
    let normalized = normalizer.normalize(dirty.as_str()).unwrap().into_owned();
    let plain = "আমি গান গাই ".repeat(100).trim_end().to_owned();
    let zero_copy = matches!(normalizer.normalize(plain.as_str()).unwrap(), Cow::Borrowed(_));
    assert!(zero_copy, "nukta-free clean text should not be copied");

    for (label, text) in [("dirty", &dirty), ("normalized", &normalized), ("plain", &plain)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("beng", label), text, |b, t| {
            b.iter(|| normalizer.normalize(black_box(t.as_str())).unwrap())
        });
    }

    let deva = Normalizer::new(DEVA);
    let text = "\u{091C}\u{093C}िंदगी, नमस्ते।  ".repeat(50);
    group.bench_function("deva", |b| {
        b.iter(|| deva.normalize(black_box(text.as_str())).unwrap())
    });
    group.finish();
}

fn bench_cer(c: &mut Criterion) {
    let mut group = c.benchmark_group("cer");
    for words in [10, 50, 200] {
        let reference = corpus_bengali(words as u64, words);
        let hypothesis = corrupt(&reference, 99, 0.2);
        group.throughput(Throughput::Bytes(reference.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("uax29", words),
            &(reference.as_str(), hypothesis.as_str()),
            |b, &(r, h)| b.iter(|| compute_cer(black_box(r), black_box(h)).unwrap()),
        );
    }

    let naive = Scorer::builder().segmenter(NaiveSegmenter).build();
    let reference = corpus_bengali(3, 50);
    let hypothesis = corrupt(&reference, 4, 0.2);
    group.bench_function("naive/50", |b| {
        b.iter(|| naive.cer(black_box(reference.as_str()), black_box(hypothesis.as_str())).unwrap())
    });

    let latin = Scorer::builder().script(LATN).build();
    group.bench_function("latn/kitten", |b| {
        b.iter(|| latin.cer(black_box("kitten"), black_box("sitting")).unwrap())
    });
    group.finish();
}

fn bench_word_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_diff");
    for words in [10, 50, 120] {
        let reference = corpus_bengali(words as u64 + 1, words);
        let hypothesis = corrupt(&reference, 5, 0.2);
        group.bench_with_input(
            BenchmarkId::from_parameter(words),
            &(reference.as_str(), hypothesis.as_str()),
            |b, &(r, h)| b.iter(|| compute_word_diff(black_box(r), black_box(h)).unwrap()),
        );
    }

    // Above the token limit: measures the guard, not the alignment.
    let reference = corpus_bengali(11, 1_000);
    let hypothesis = corrupt(&reference, 12, 0.2);
    group.bench_function("guarded/1000", |b| {
        b.iter(|| compute_word_diff(black_box(reference.as_str()), black_box(hypothesis.as_str())).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_cer, bench_word_diff);
criterion_main!(benches);
