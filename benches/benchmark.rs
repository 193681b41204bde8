//! Benchmarks for the grid cipher engines.
//!
//! Measures key setup, encrypt/decrypt throughput for Playfair and ADFGVX,
//! and how ADFGVX scales with the transposition keyword width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridcrypt::{Adfgvx, Cipher, Playfair};

const BENCH_KEYWORD: &str = "PLAYFAIREXAMPLE";
const BENCH_GRID: &str = "NA1C3H8TB2OME5WRPD4F6G7I9J0KLQSUVXYZ";
const BENCH_TRANSPOSITION_KEY: &str = "PRIVACY";

/// Message lengths, in plaintext symbols.
const MESSAGE_LENGTHS: &[usize] = &[64, 1024, 16384];

/// Lower-case alphanumeric message of `len` symbols.
fn message(len: usize) -> String {
    "thequickbrownfoxjumpsoverthelazydog0123456789"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Benchmarks engine construction from key material.
fn bench_key_setup(c: &mut Criterion) {
    c.bench_function("playfair_from_keyword", |b| {
        b.iter(|| Playfair::from_keyword(black_box(BENCH_KEYWORD)).unwrap());
    });
    c.bench_function("adfgvx_from_grid_text", |b| {
        b.iter(|| {
            Adfgvx::from_grid_text(black_box(BENCH_GRID), black_box(BENCH_TRANSPOSITION_KEY))
                .unwrap()
        });
    });
}

/// Benchmarks Playfair encrypt and decrypt across message lengths.
fn bench_playfair(c: &mut Criterion) {
    let cipher = Playfair::from_keyword(BENCH_KEYWORD).unwrap();

    let mut group = c.benchmark_group("playfair");
    for &len in MESSAGE_LENGTHS {
        let plaintext: String = message(len)
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect();
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        group.throughput(Throughput::Bytes(plaintext.len() as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", len), &plaintext, |b, text| {
            b.iter(|| cipher.encrypt(black_box(text)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", len), &ciphertext, |b, text| {
            b.iter(|| cipher.decrypt(black_box(text)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks ADFGVX encrypt and decrypt across message lengths.
fn bench_adfgvx(c: &mut Criterion) {
    let cipher = Adfgvx::from_grid_text(BENCH_GRID, BENCH_TRANSPOSITION_KEY).unwrap();

    let mut group = c.benchmark_group("adfgvx");
    for &len in MESSAGE_LENGTHS {
        let plaintext = message(len);
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", len), &plaintext, |b, text| {
            b.iter(|| cipher.encrypt(black_box(text)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", len), &ciphertext, |b, text| {
            b.iter(|| cipher.decrypt(black_box(text)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks ADFGVX encryption with 3, 7 and 20 transposition columns.
///
/// The substitution cost is fixed, so the spread shows the cost of the
/// column batching and reordering.
fn bench_adfgvx_keyword_width(c: &mut Criterion) {
    let keywords: &[&str] = &["KEY", "PRIVACY", "CRYPTOGRAPHYISHARDER"];
    let plaintext = message(1024);

    let mut group = c.benchmark_group("adfgvx_keyword_width");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    for keyword in keywords {
        let cipher = Adfgvx::from_grid_text(BENCH_GRID, keyword).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(keyword.len()),
            &plaintext,
            |b, text| {
                b.iter(|| cipher.encrypt(black_box(text)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_key_setup,
    bench_playfair,
    bench_adfgvx,
    bench_adfgvx_keyword_width
);
criterion_main!(benches);
