use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use shutterplan::config::PlannerConfig;
use shutterplan::models::{SkyConditions, SunWindow, Task, WeatherSample};
use shutterplan::services::{compute_sun_window, find_matching_windows};

fn forecast_horizon() -> (Vec<WeatherSample>, Vec<SunWindow>) {
    let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

    let samples: Vec<WeatherSample> = (0..72)
        .map(|h| {
            WeatherSample::from_conditions(
                start + Duration::hours(h),
                SkyConditions {
                    clouds: ((h * 7) % 100) as f64,
                    precip: if h % 13 == 0 { 0.6 } else { 0.0 },
                    visibility: 20.0,
                    temp: 15.0,
                },
            )
        })
        .collect();

    let sun_windows: Vec<SunWindow> = (0..3)
        .map(|d| {
            let date = NaiveDate::from_ymd_opt(2026, 6, 1 + d).unwrap();
            let sunrise = Utc.with_ymd_and_hms(2026, 6, 1 + d, 5, 30, 0).unwrap();
            let sunset = Utc.with_ymd_and_hms(2026, 6, 1 + d, 20, 0, 0).unwrap();
            compute_sun_window(date, sunrise, sunset)
        })
        .collect();

    (samples, sun_windows)
}

fn bench_matching(c: &mut Criterion) {
    let (samples, sun_windows) = forecast_horizon();
    let config = PlannerConfig::default();

    let cloudy: Task = serde_json::from_str(
        r#"{"id": "bench-cloudy", "title": "bench", "condition": "cloudy", "time_window": "any_day"}"#,
    )
    .unwrap();
    let golden: Task = serde_json::from_str(
        r#"{"id": "bench-golden", "title": "bench", "condition": "golden-hour-any", "time_window": "any_day"}"#,
    )
    .unwrap();

    c.bench_function("match_weather_driven_72h", |b| {
        b.iter(|| find_matching_windows(&cloudy, &samples, &sun_windows, &config))
    });

    c.bench_function("match_sun_synchronized_3d", |b| {
        b.iter(|| find_matching_windows(&golden, &samples, &sun_windows, &config))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
