#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hornlog::{engine, KnowledgeBase, Literal};

/// Builds TELL text for a linear implication chain `S0; S0=>S1; ...`.
fn chain_tell(length: usize) -> String {
    let mut tell = String::from("S0");
    for i in 0..length {
        tell.push_str(&format!("; S{i}=>S{}", i + 1));
    }
    tell
}

/// Benchmark for chaining through a long implication chain
fn bench_chain_entailment(c: &mut Criterion) {
    let kb = KnowledgeBase::parse(&chain_tell(200)).unwrap();
    let query = Literal::positive("S200");

    c.bench_function("chain_entailment", |b| {
        b.iter(|| engine::run(black_box(&kb), black_box(&query)));
    });
}

/// Benchmark for draining the agenda when the query is never derivable
fn bench_exhaustion(c: &mut Criterion) {
    let kb = KnowledgeBase::parse(&chain_tell(200)).unwrap();
    let query = Literal::positive("Unreachable");

    c.bench_function("exhaustion", |b| {
        b.iter(|| engine::run(black_box(&kb), black_box(&query)));
    });
}

/// Benchmark for a wide rule table where every conclusion shares premises
fn bench_wide_rule_table(c: &mut Criterion) {
    let mut tell = String::from("A; B");
    for i in 0..200 {
        tell.push_str(&format!("; A & B => R{i}"));
    }
    let kb = KnowledgeBase::parse(&tell).unwrap();
    let query = Literal::positive("R199");

    c.bench_function("wide_rule_table", |b| {
        b.iter(|| engine::run(black_box(&kb), black_box(&query)));
    });
}

criterion_group!(
    benches,
    bench_chain_entailment,
    bench_exhaustion,
    bench_wide_rule_table
);
criterion_main!(benches);
