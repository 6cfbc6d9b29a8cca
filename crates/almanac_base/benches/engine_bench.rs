use almanac_base::{
    biorhythm, biorhythm_range, birth_info, dress_day, energy_scores, kin_epoch, label_hash,
    lcg_draws, maya_day, maya_range,
};
use almanac_config::GuideConfig;
use almanac_time::{CalendarDate, DateRange};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

fn seed_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");
    group.bench_function("label_hash", |b| b.iter(|| label_hash(black_box("青色系"))));
    let epoch = kin_epoch(&GuideConfig::embedded().unwrap().maya);
    group.bench_function("kin_of", |b| {
        b.iter(|| epoch.kin_of(black_box(date("1990-01-01"))))
    });
    group.bench_function("lcg_draws", |b| {
        b.iter(|| lcg_draws::<5>(black_box(20_250_923)))
    });
    group.finish();
}

fn biorhythm_bench(c: &mut Criterion) {
    let cycles = GuideConfig::embedded().unwrap().biorhythm.cycles;
    let birth = date("1990-01-01");
    let target = date("2025-09-23");
    let range = DateRange::around(target, 30, 30).unwrap();

    let mut group = c.benchmark_group("biorhythm");
    group.bench_function("single_day", |b| {
        b.iter(|| biorhythm(&cycles, black_box(birth), black_box(target)))
    });
    group.bench_function("range_61_days", |b| {
        b.iter(|| biorhythm_range(&cycles, black_box(birth), black_box(&range)))
    });
    group.finish();
}

fn maya_bench(c: &mut Criterion) {
    let config = GuideConfig::embedded().unwrap();
    let target = date("2025-09-23");
    let week = DateRange::around(target, 3, 3).unwrap();

    let mut group = c.benchmark_group("maya");
    group.bench_function("energy_scores", |b| {
        b.iter(|| energy_scores(black_box(target), black_box(183)))
    });
    group.bench_function("maya_day", |b| {
        b.iter(|| maya_day(&config.maya, black_box(target)))
    });
    group.bench_function("maya_range_7_days", |b| {
        b.iter(|| maya_range(&config.maya, black_box(&week)))
    });
    group.bench_function("birth_info", |b| {
        b.iter(|| birth_info(&config.maya, black_box(date("1990-01-01"))))
    });
    group.finish();
}

fn dress_bench(c: &mut Criterion) {
    let config = GuideConfig::embedded().unwrap();
    let target = date("2025-09-23");

    let mut group = c.benchmark_group("dress");
    group.bench_function("dress_day", |b| {
        b.iter(|| dress_day(&config.dress, black_box(target)))
    });
    group.finish();
}

criterion_group!(benches, seed_bench, biorhythm_bench, maya_bench, dress_bench);
criterion_main!(benches);
