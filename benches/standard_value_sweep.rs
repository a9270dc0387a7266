use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mfb_bandpass::circuits::DesignTarget;
use mfb_bandpass::series::StandardValueSet;
use mfb_bandpass::sweep::{sweep, SweepConfig};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_value_sweep");
    let config = SweepConfig::default();
    let table = StandardValueSet::resistors();

    for &(f, q, a) in &[(1.0e3, 1.0, 1.0), (455.0e3, 10.0, 20.0)] {
        let target = DesignTarget::new(f, q, a, 1.0).expect("valid target");
        group.bench_function(BenchmarkId::new("e12_over_e24", f), |b| {
            b.iter(|| sweep(black_box(&target), config.capacitance_bases(), &table))
        });
    }

    group.bench_function("resistor_table", |b| b.iter(StandardValueSet::resistors));
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
