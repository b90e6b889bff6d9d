//! Benchmarks for throw/recover.
//!
//! Compares recovering a thrown error against propagating the same error
//! with `?`. Each benchmark pair does EQUIVALENT work.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use thrower::{recover, recover_or_default, ThrowExt};

// ============================================================
// Test helpers
// ============================================================

#[inline(never)]
fn io_err(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg)
}

#[inline(never)]
fn fallible_ok() -> Result<i32, io::Error> {
    Ok(42)
}

#[inline(never)]
fn fallible_err() -> Result<i32, io::Error> {
    Err(io_err("fail"))
}

#[inline(never)]
fn deep_throw(depth: u32) -> i32 {
    if depth == 0 {
        return fallible_err().or_throw();
    }
    deep_throw(depth - 1) + 1
}

#[inline(never)]
fn deep_result(depth: u32) -> Result<i32, thrower::Error> {
    if depth == 0 {
        return Ok(fallible_err()?);
    }
    Ok(deep_result(depth - 1)? + 1)
}

// ============================================================
// 1. SUCCESS PATH: nothing thrown
// ============================================================

fn bench_success_recover(c: &mut Criterion) {
    c.bench_function("success_recover", |b| {
        b.iter(|| {
            let result = recover(|| fallible_ok().or_throw());
            black_box(result.unwrap_or(0))
        })
    });
}

fn bench_success_rust(c: &mut Criterion) {
    c.bench_function("success_rust", |b| {
        b.iter(|| {
            let result: Result<i32, thrower::Error> = fallible_ok().map_err(Into::into);
            black_box(result.unwrap_or(0))
        })
    });
}

// ============================================================
// 2. ERROR PATH: one frame
// ============================================================

fn bench_error_recover(c: &mut Criterion) {
    c.bench_function("error_recover", |b| {
        b.iter(|| {
            let result = recover(|| fallible_err().or_throw());
            black_box(result.map_err(|e| e.to_string().len()))
        })
    });
}

fn bench_error_discard(c: &mut Criterion) {
    c.bench_function("error_discard", |b| {
        b.iter(|| {
            let result: i32 = recover_or_default(|| fallible_err().or_throw());
            black_box(result)
        })
    });
}

fn bench_error_rust(c: &mut Criterion) {
    c.bench_function("error_rust", |b| {
        b.iter(|| {
            let result: Result<i32, thrower::Error> = fallible_err().map_err(Into::into);
            black_box(result.map_err(|e| e.to_string().len()))
        })
    });
}

// ============================================================
// 3. DEEP: error raised 16 frames down
// ============================================================

fn bench_deep_recover(c: &mut Criterion) {
    c.bench_function("deep_recover", |b| {
        b.iter(|| black_box(recover(|| deep_throw(black_box(16))).is_err()))
    });
}

fn bench_deep_rust(c: &mut Criterion) {
    c.bench_function("deep_rust", |b| {
        b.iter(|| black_box(deep_result(black_box(16)).is_err()))
    });
}

criterion_group!(success_path, bench_success_recover, bench_success_rust);

criterion_group!(error_path, bench_error_recover, bench_error_discard, bench_error_rust);

criterion_group!(deep, bench_deep_recover, bench_deep_rust);

criterion_main!(success_path, error_path, deep);
