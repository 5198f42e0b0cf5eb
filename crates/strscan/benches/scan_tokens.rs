//! Benchmark – tokenizing with `strscan::Scanner` through each pattern kind.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use regex::Regex;
use strscan::{Pattern, RegexPattern, Scanner};

/// Produce a *deterministic* source of `words` identifiers separated by
/// single spaces, with a number every tenth word.
fn make_payload(words: usize) -> String {
    let mut s = String::with_capacity(words * 8);
    for i in 0..words {
        if i % 10 == 9 {
            s.push_str(&i.to_string());
        } else {
            s.push_str("ident_");
            s.push(char::from(b'a' + u8::try_from(i % 26).unwrap()));
        }
        s.push(' ');
    }
    s
}

/// Scan words and whitespace until the end, returning the number of tokens.
/// Anchored attempts that fail are the hot path: every word is first tried
/// as a number.
fn run_tokens<P: Pattern + ?Sized>(payload: &str, number: &P, word: &P, space: &P) -> usize {
    let mut s = Scanner::new(payload);
    let mut tokens = 0usize;
    while !s.eos() {
        if s.scan(number).unwrap().is_some() || s.scan(word).unwrap().is_some() {
            tokens += 1;
        }
        s.skip(space).unwrap();
    }
    tokens
}

fn bench_scan_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_tokens");

    for &words in &[100usize, 1_000, 10_000] {
        let payload = make_payload(words);

        let regexes = [
            Regex::new(r"\d+").unwrap(),
            Regex::new(r"[a-z_]+").unwrap(),
            Regex::new(r"\s+").unwrap(),
        ];
        group.bench_with_input(BenchmarkId::new("regex", words), &payload, |b, p| {
            b.iter(|| black_box(run_tokens(black_box(p), &regexes[0], &regexes[1], &regexes[2])));
        });

        let compiled = [
            RegexPattern::new(r"\d+").unwrap(),
            RegexPattern::new(r"[a-z_]+").unwrap(),
            RegexPattern::new(r"\s+").unwrap(),
        ];
        group.bench_with_input(BenchmarkId::new("regex_pattern", words), &payload, |b, p| {
            b.iter(|| {
                black_box(run_tokens(black_box(p), &compiled[0], &compiled[1], &compiled[2]))
            });
        });

        group.bench_with_input(BenchmarkId::new("get_char", words), &payload, |b, p| {
            b.iter(|| {
                let mut s = Scanner::new(black_box(p.as_str()));
                let mut n = 0usize;
                while s.get_char().is_some() {
                    n += 1;
                }
                black_box(n)
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_scan_tokens }
criterion_main!(benches);
