// Criterion benchmarks for Flyby

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flyby::core::{distance_filter, flatten_matches, FilterOptions, Flyby};
use flyby::models::RawResponse;
use serde_json::json;

fn create_payload(count: usize) -> RawResponse {
    let matches: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "otherActivity": {
                    "id": i,
                    "name": format!("Activity {}", i),
                    "activityType": "Ride",
                    "athleteId": i % 100,
                },
                "correlation": {
                    "distance": 1_000.0 + (i as f64 * 397.0) % 200_000.0,
                    "elapsedTime": 3600,
                    "closestDistance": 10.0,
                    "spatialCorrelation": 0.5,
                    "startTime": 1_500_000_000u64,
                }
            })
        })
        .collect();

    serde_json::from_value(json!({
        "activity": { "id": 1 },
        "matches": matches,
        "athletes": {},
    }))
    .expect("benchmark payload must parse")
}

fn bench_flatten(c: &mut Criterion) {
    let raw = create_payload(751);

    c.bench_function("flatten_751", |b| {
        b.iter(|| flatten_matches(black_box(&raw.matches)));
    });
}

fn bench_distance_filter(c: &mut Criterion) {
    let fb = Flyby::new(create_payload(751));
    let records = fb.flatten();

    let mut group = c.benchmark_group("distance_filter");

    for (name, options) in [
        ("all", FilterOptions::all()),
        ("around", FilterOptions::around(100.0)),
        ("between", FilterOptions::between(90.0, 110.0)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &options, |b, options| {
            let pass = distance_filter(options);
            b.iter(|| records.iter().filter(|r| pass(black_box(*r))).count());
        });
    }

    group.finish();
}

fn bench_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("ids");

    for count in [100, 751, 5000] {
        let fb = Flyby::new(create_payload(count));
        let options = FilterOptions::around(100.0);

        group.bench_with_input(BenchmarkId::from_parameter(count), &fb, |b, fb| {
            b.iter(|| fb.ids(black_box(&options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_distance_filter, bench_ids);
criterion_main!(benches);
