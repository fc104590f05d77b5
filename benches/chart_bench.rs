use celestial_core::{current_positions, find_aspects, moon_phase, natal_chart};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_natal_chart(c: &mut Criterion) {
    c.bench_function("natal_chart", |b| {
        b.iter(|| {
            natal_chart(
                black_box("1990-11-29"),
                black_box(Some("06:30")),
                black_box(40.7128),
                black_box(-74.0060),
            )
        })
    });
}

fn bench_find_aspects(c: &mut Criterion) {
    let chart = natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060).unwrap();
    let instant = Utc.with_ymd_and_hms(2024, 4, 8, 18, 20, 0).unwrap();
    let transits = current_positions(instant);

    c.bench_function("find_aspects", |b| {
        b.iter(|| find_aspects(black_box(&transits), black_box(&chart.planets)))
    });
}

fn bench_moon_phase(c: &mut Criterion) {
    let instant = Utc.with_ymd_and_hms(2024, 4, 8, 18, 20, 0).unwrap();
    c.bench_function("moon_phase", |b| b.iter(|| moon_phase(black_box(instant))));
}

criterion_group!(benches, bench_natal_chart, bench_find_aspects, bench_moon_phase);
criterion_main!(benches);
