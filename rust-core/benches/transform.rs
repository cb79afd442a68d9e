use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fourier_lab::signal::{add_noise, combine, synthesize, RngSource};
use fourier_lab::spectrum::{DirectTransform, FftEngine, SpectralTransform};

/// Two-tone noisy test signal of `n` samples at 1 kHz
fn demo_signal(n: usize) -> Vec<f64> {
    let a = synthesize(5.0, 1.0, n, 1000.0).expect("valid tone");
    let b = synthesize(50.0, 0.5, n, 1000.0).expect("valid tone");
    let combined = combine(&[a, b], n).expect("equal lengths");
    add_noise(&combined, 0.5, &mut RngSource::seeded(1)).expect("valid intensity")
}

fn forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    for &n in &[256usize, 1000] {
        let signal = demo_signal(n);

        group.bench_with_input(BenchmarkId::new("direct", n), &signal, |bench, sig| {
            let mut engine = DirectTransform;
            bench.iter(|| engine.forward(black_box(sig)))
        });
        group.bench_with_input(BenchmarkId::new("fft", n), &signal, |bench, sig| {
            let mut engine = FftEngine::new();
            bench.iter(|| engine.forward(black_box(sig)))
        });
    }
    group.finish();
}

fn round_trip(c: &mut Criterion) {
    let signal = demo_signal(1000);
    let spectrum = fourier_lab::forward_transform(&signal);

    c.bench_function("inverse_direct_1000", |bench| {
        let mut engine = DirectTransform;
        bench.iter(|| engine.inverse(black_box(&spectrum)))
    });
    c.bench_function("inverse_fft_1000", |bench| {
        let mut engine = FftEngine::new();
        bench.iter(|| engine.inverse(black_box(&spectrum)))
    });
}

criterion_group!(benches, forward, round_trip);
criterion_main!(benches);
