// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tessera::{AlphabetName, BiasPolicy, Generator, GeneratorConfig, SilentAdvisorySink};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench generate
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Alphabet shapes: masked (64), rejection (62, 10)
// =============================================================================

fn bench_alphabets(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_alphabet");
    configure_group(&mut group);

    let generator = Generator::new().with_sink(SilentAdvisorySink);

    for name in [
        AlphabetName::UrlSafe,
        AlphabetName::Alphanumeric,
        AlphabetName::Numeric,
    ] {
        for length in [8usize, 21, 256] {
            group.throughput(Throughput::Elements(length as u64));

            group.bench_with_input(
                BenchmarkId::new(name.key(), length),
                &length,
                |b, &length| {
                    b.iter(|| black_box(generator.generate(length, name)));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// StrictUnbiased vs FastModulo on a 62-symbol alphabet
// =============================================================================

fn bench_bias_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_bias_policy");
    configure_group(&mut group);

    for policy in [BiasPolicy::StrictUnbiased, BiasPolicy::FastModulo] {
        let generator = Generator::new()
            .with_sink(SilentAdvisorySink)
            .with_config(GeneratorConfig::default().with_bias_policy(policy));

        for length in [32usize, 1024] {
            group.throughput(Throughput::Elements(length as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), length),
                &length,
                |b, &length| {
                    b.iter(|| black_box(generator.generate(length, AlphabetName::Alphanumeric)));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Incremental vs indexed assembly around the cut-over
// =============================================================================

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_assembly");
    configure_group(&mut group);

    let incremental = Generator::new()
        .with_sink(SilentAdvisorySink)
        .with_config(GeneratorConfig::default().with_incremental_threshold(usize::MAX));
    let indexed = Generator::new()
        .with_sink(SilentAdvisorySink)
        .with_config(GeneratorConfig::default().with_incremental_threshold(0));

    for length in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("incremental", length), &length, |b, &l| {
            b.iter(|| black_box(incremental.generate(l, AlphabetName::UrlSafe)));
        });
        group.bench_with_input(BenchmarkId::new("indexed", length), &length, |b, &l| {
            b.iter(|| black_box(indexed.generate(l, AlphabetName::UrlSafe)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_alphabets, bench_bias_policy, bench_assembly);
criterion_main!(benches);
