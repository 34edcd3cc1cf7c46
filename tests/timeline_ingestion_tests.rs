use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{RawPoint, SampleTime, SavedPoint};
use timeline_rs::render::NullRenderer;

#[test]
fn date_samples_are_normalized_to_epoch_millis() {
    let start = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("start time");
    let data: Vec<RawPoint> = (0..4)
        .map(|i| RawPoint::new(start + Duration::milliseconds(i * 250), i as f64))
        .collect();

    let mut timeline =
        Timeline::new(NullRenderer::default(), TimelineConfig::bounded(500.0)).expect("timeline init");
    timeline.recompute(&data);

    let base = start.timestamp_millis() as f64;
    let saved = timeline.saved_data();
    // the sample 750ms back is retained, then moved onto the window edge
    assert_eq!(saved.len(), 4);
    assert_eq!(saved[0].time, base + 250.0);
    assert!((saved[0].value - 1.0).abs() <= 1e-9);
    assert_eq!(saved[3], SavedPoint::new(base + 750.0, 3.0));
}

#[test]
fn mixed_time_representations_share_one_axis() {
    let start = Utc.timestamp_millis_opt(1_000).single().expect("time");
    let data = vec![
        RawPoint::new(start, 1.0),
        RawPoint::new(2_000.0, 2.0),
        RawPoint::new(3_000_i64, 3.0),
    ];

    let mut timeline =
        Timeline::new(NullRenderer::default(), TimelineConfig::default()).expect("timeline init");
    timeline.recompute(&data);

    let times: Vec<_> = timeline.saved_data().iter().map(|point| point.time).collect();
    assert_eq!(times, vec![1_000.0, 2_000.0, 3_000.0]);
}

#[test]
fn decimal_values_are_accepted() {
    let time = Utc.timestamp_millis_opt(42).single().expect("time");
    let point = RawPoint::from_decimal(time, Decimal::new(12_345, 2)).expect("decimal point");
    assert_eq!(point.time, SampleTime::Date(time));
    assert!((point.value - 123.45).abs() <= 1e-12);
    assert_eq!(point.normalized().time, 42.0);
}

#[test]
fn raw_points_deserialize_from_numbers_or_dates() {
    let data: Vec<RawPoint> = serde_json::from_str(
        r#"[
            { "time": 1000.0, "value": 1.5 },
            { "time": "1970-01-01T00:00:02Z", "value": 2.5 }
        ]"#,
    )
    .expect("raw json");
    assert_eq!(data[0].time.as_millis(), 1_000.0);
    assert_eq!(data[1].time.as_millis(), 2_000.0);
}
