use accel_features::{FeatureConfig, FeatureExtractor, Sample};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn window(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.04;
            [t.sin(), (2.0 * t).cos(), 9.81 + 0.05 * t]
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::default();
    let complex = FeatureExtractor::new(FeatureConfig::complex_spectrum()).unwrap();

    for len in [25, 100, 400] {
        let w = window(len);
        c.bench_function(&format!("extract_{}", len), |b| {
            b.iter(|| extractor.extract(black_box(&w)))
        });
        c.bench_function(&format!("extract_complex_{}", len), |b| {
            b.iter(|| complex.extract(black_box(&w)))
        });
    }
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
