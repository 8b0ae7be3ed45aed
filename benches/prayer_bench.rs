use criterion::{black_box, criterion_group, criterion_main, Criterion};
use salah_times::{
    moon_azimuth, prayer_times, qibla_azimuth, CalculationSettings, Location, MoonAccuracy,
    TimeZoneOffset,
};

// 2024-03-20 12:00 UTC
const INSTANT: i64 = 1_710_936_000;

fn prayer_times_bench(c: &mut Criterion) {
    let medina = Location::default();
    let arctic = Location::new(69.65, 18.96);
    let zone = TimeZoneOffset::default();
    let settings = CalculationSettings::default();

    let mut group = c.benchmark_group("prayer_times");
    group.bench_function("mid_latitude", |b| {
        b.iter(|| prayer_times(black_box(INSTANT), black_box(&medina), zone, &settings))
    });
    group.bench_function("high_latitude", |b| {
        b.iter(|| prayer_times(black_box(INSTANT + 92 * 86400), black_box(&arctic), zone, &settings))
    });
    group.finish();
}

fn azimuth_bench(c: &mut Criterion) {
    let medina = Location::default();
    let london = Location::new(51.5, -0.13);

    let mut group = c.benchmark_group("azimuth");
    group.bench_function("qibla", |b| b.iter(|| qibla_azimuth(black_box(&london))));
    for accuracy in [MoonAccuracy::MeanAnomaly, MoonAccuracy::Full] {
        group.bench_function(format!("moon_level_{}", accuracy.level()), |b| {
            b.iter(|| moon_azimuth(black_box(INSTANT as f64), &medina, accuracy))
        });
    }
    group.finish();
}

criterion_group!(benches, prayer_times_bench, azimuth_bench);
criterion_main!(benches);
