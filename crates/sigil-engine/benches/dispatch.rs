//! Benchmarks for patching and method dispatch

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sigil_engine::builtins::ARRAY;
use sigil_engine::Runtime;
use sigil_sdk::Value;

fn bench_patch(c: &mut Criterion) {
    let runtime = Runtime::new();
    c.bench_function("patch", |b| {
        b.iter(|| {
            runtime
                .patch(ARRAY, |receiver, _args| Ok(receiver), Some("bench"))
                .unwrap()
        })
    });
}

fn bench_invoke_symbol(c: &mut Criterion) {
    let runtime = Runtime::new();
    let key = runtime
        .patch(
            ARRAY,
            |receiver, _args| {
                let elements = receiver.as_array().unwrap().read();
                Ok(elements.last().cloned().unwrap_or(Value::null()))
            },
            Some("last"),
        )
        .unwrap();
    let arr = Value::array((0..16).map(Value::int).collect());

    c.bench_function("invoke_symbol", |b| {
        b.iter(|| runtime.invoke(black_box(&arr), &key, &[]).unwrap())
    });
}

fn bench_invoke_named(c: &mut Criterion) {
    let runtime = Runtime::new();
    let arr = Value::array((0..16).map(Value::int).collect());

    c.bench_function("invoke_named", |b| {
        b.iter(|| runtime.invoke_named(black_box(&arr), "last", &[]).unwrap())
    });
}

criterion_group!(benches, bench_patch, bench_invoke_symbol, bench_invoke_named);
criterion_main!(benches);
