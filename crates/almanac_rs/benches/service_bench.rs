use almanac_rs::Almanac;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn service_bench(c: &mut Criterion) {
    let almanac = Almanac::embedded().unwrap();

    let mut group = c.benchmark_group("service");
    group.bench_function("biorhythm", |b| {
        b.iter(|| almanac.biorhythm(black_box("1990-01-01"), black_box("2025-09-23")))
    });
    group.bench_function("maya_info", |b| {
        b.iter(|| almanac.maya_info(black_box("2025-09-23")))
    });
    group.bench_function("maya_birth_info", |b| {
        b.iter(|| almanac.maya_birth_info(black_box(Some("1990-01-01"))))
    });
    group.bench_function("dress_range_around", |b| {
        b.iter(|| almanac.dress_range_around(black_box("2025-09-23"), 1, 6))
    });
    group.finish();
}

criterion_group!(benches, service_bench);
criterion_main!(benches);
