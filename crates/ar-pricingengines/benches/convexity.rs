use ar_instruments::{CapletKernel, DigitalCapletKernel, FloaterKernel};
use ar_pricingengines::ConvexityEngine;
use ar_termstructures::{LiborVolatility, RateCurvePoint};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_convexity(c: &mut Criterion) {
    let curve = RateCurvePoint::from_bonds(1.0, 2.0, 0.95, 0.91).unwrap();
    let vol = LiborVolatility::new(0.2).unwrap();
    let engine = ConvexityEngine::new(curve, vol);

    let caplet = CapletKernel::new(&curve, vol, 10_000.0, 0.044);
    let digital = DigitalCapletKernel::new(&curve, vol, 10_000.0, 0.044);
    let floater = FloaterKernel::new(&curve, 10_000.0);

    let mut group = c.benchmark_group("arrears");
    group.bench_function("caplet", |b| {
        b.iter(|| engine.calculate(black_box(&caplet)).unwrap())
    });
    group.bench_function("digital_caplet", |b| {
        b.iter(|| engine.calculate(black_box(&digital)).unwrap())
    });
    group.bench_function("floater", |b| {
        b.iter(|| engine.calculate(black_box(&floater)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_convexity);
criterion_main!(benches);
