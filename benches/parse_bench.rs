#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hornlog::{horn, KnowledgeBase};

/// Builds TELL text mixing facts, rules and convertible disjunctions.
fn mixed_tell(clauses: usize) -> String {
    let mut tell = String::new();
    for i in 0..clauses {
        match i % 3 {
            0 => tell.push_str(&format!("F{i}; ")),
            1 => tell.push_str(&format!("F{} & F{} => D{i}; ", i - 1, i)),
            _ => tell.push_str(&format!("~F{} || ~D{} || C{i}; ", i - 2, i - 1)),
        }
    }
    tell
}

/// Benchmark for the Horn-form check over a large clause list
fn bench_horn_check(c: &mut Criterion) {
    let tell = mixed_tell(300);

    c.bench_function("horn_check", |b| {
        b.iter(|| horn::is_horn_form(black_box(&tell)));
    });
}

/// Benchmark for full knowledge-base construction
fn bench_kb_parse(c: &mut Criterion) {
    let tell = mixed_tell(300);

    c.bench_function("kb_parse", |b| {
        b.iter(|| KnowledgeBase::parse(black_box(&tell)).unwrap());
    });
}

criterion_group!(benches, bench_horn_check, bench_kb_parse);
criterion_main!(benches);
