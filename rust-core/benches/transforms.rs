//! Transform and filter benchmarks
//!
//! Run with: cargo bench -p scope-dsp-core --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scope_dsp::filters::kernels::LOWPASS_100HZ_ORDER20;
use scope_dsp::filters::FirFilter;
use scope_dsp::spectrum::{dft_complex, radix2_fft, recursive_fft, PlannedFft};
use std::f64::consts::TAU;

fn test_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let t = n as f64 / 5000.0;
            (TAU * 60.0 * t).sin() + 0.5 * (TAU * 900.0 * t).sin()
        })
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    for size in [64usize, 128, 256, 512] {
        let signal = test_signal(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("direct_dft", size), &signal, |b, s| {
            b.iter(|| dft_complex(black_box(s), size))
        });

        group.bench_with_input(BenchmarkId::new("radix2", size), &signal, |b, s| {
            b.iter(|| radix2_fft(black_box(s)))
        });

        group.bench_with_input(BenchmarkId::new("recursive", size), &signal, |b, s| {
            b.iter(|| recursive_fft(black_box(s)))
        });

        if let Ok(mut planned) = PlannedFft::new(size) {
            group.bench_with_input(BenchmarkId::new("planned", size), &signal, |b, s| {
                b.iter(|| planned.process(black_box(s)))
            });
        }
    }

    group.finish();
}

fn bench_fir(c: &mut Criterion) {
    let mut group = c.benchmark_group("fir");
    let signal = test_signal(512);
    group.throughput(Throughput::Elements(signal.len() as u64));

    group.bench_function("lowpass_21tap_512", |b| {
        b.iter_batched(
            || FirFilter::new(LOWPASS_100HZ_ORDER20.to_vec()),
            |filter| filter.map(|mut f| f.filter_sequence(black_box(&signal))),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_fir);
criterion_main!(benches);
