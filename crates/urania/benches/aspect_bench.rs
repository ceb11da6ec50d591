use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectCalculator;
use urania::chart::Planet;
use urania::zodiac::{sign_from_abs_degree, Locale};

fn bench_classify(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("classify", |b| {
        b.iter(|| calculator.classify(black_box(117.5)))
    });
}

fn bench_sign_from_abs_degree(c: &mut Criterion) {
    c.bench_function("sign_from_abs_degree", |b| {
        b.iter(|| sign_from_abs_degree(black_box(-734.25)))
    });
}

fn bench_compute_chart_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    let planets: Vec<Planet> = (0..10)
        .map(|i| {
            Planet::from_longitude(
                format!("planet_{}", i),
                (i as f64) * 30.0 + 1.5,
                (i % 12 + 1) as u8,
                Locale::En,
            )
        })
        .collect();

    c.bench_function("compute_chart_aspects", |b| {
        b.iter(|| calculator.compute_chart_aspects(black_box(&planets)))
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_sign_from_abs_degree,
    bench_compute_chart_aspects
);
criterion_main!(benches);
