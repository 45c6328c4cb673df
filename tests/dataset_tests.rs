use chrono::{TimeZone, Utc};
use range_chart::ChartError;
use range_chart::core::{Dataset, DatasetBuilder, DatasetSource, SeriesId, SeriesMeta};

fn source(times: Vec<i64>, series_a: Vec<i64>, series_b: Vec<i64>) -> DatasetSource {
    DatasetSource {
        times,
        series_a,
        series_b,
        meta_a: SeriesMeta::new("#0", "#3DC23F").with_kind("line"),
        meta_b: SeriesMeta::new("#1", "#F34C44").with_kind("line"),
        time_kind: "x".to_owned(),
    }
}

#[test]
fn valid_source_exposes_extents_and_diffs() {
    let dataset = Dataset::new(source(
        vec![10, 20, 30, 40],
        vec![3, -2, 8, 5],
        vec![1, 4, 2, 12],
    ))
    .expect("valid dataset");

    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.min_time(), 10);
    assert_eq!(dataset.max_time(), 40);
    assert_eq!(dataset.time_span(), 30);
    assert_eq!(dataset.global_min(), -2);
    assert_eq!(dataset.global_max(), 12);
    assert_eq!(dataset.diff(SeriesId::A), 10);
    assert_eq!(dataset.diff(SeriesId::B), 11);
    assert_eq!(dataset.value_diff(), 14);
    assert_eq!(dataset.meta(SeriesId::B).color, "#F34C44");
    assert_eq!(dataset.time_kind(), "x");
}

#[test]
fn value_diff_is_measured_from_zero_baseline() {
    let dataset = Dataset::new(source(vec![1, 2], vec![50, 80], vec![60, 70])).expect("dataset");
    assert_eq!(dataset.value_diff(), 80);
}

#[test]
fn window_max_is_inclusive_over_both_series() {
    let dataset = Dataset::new(source(
        vec![1, 2, 3, 4],
        vec![1, 9, 2, 3],
        vec![4, 1, 7, 11],
    ))
    .expect("dataset");

    assert_eq!(dataset.window_max(0, 0), Some(4));
    assert_eq!(dataset.window_max(1, 2), Some(9));
    assert_eq!(dataset.window_max(2, 3), Some(11));
    assert_eq!(dataset.window_max(3, 1), None);
    assert_eq!(dataset.window_max(0, 4), None);
}

#[test]
fn too_few_samples_are_rejected() {
    let err = Dataset::new(source(vec![1], vec![1], vec![1])).expect_err("one sample");
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = Dataset::new(source(vec![1, 2, 3], vec![1, 2, 3], vec![1, 2])).expect_err("lengths");
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}

#[test]
fn non_increasing_times_are_rejected() {
    let duplicate = Dataset::new(source(vec![1, 2, 2], vec![1, 2, 3], vec![1, 2, 3]));
    assert!(matches!(duplicate, Err(ChartError::InvalidDataset(_))));

    let reversed = Dataset::new(source(vec![3, 2, 1], vec![1, 2, 3], vec![1, 2, 3]));
    assert!(matches!(reversed, Err(ChartError::InvalidDataset(_))));
}

#[test]
fn builder_converts_datetimes_to_unix_seconds() {
    let mut builder = DatasetBuilder::new(
        SeriesMeta::new("Joined", "#3DC23F"),
        SeriesMeta::new("Left", "#F34C44"),
    )
    .with_time_kind("x");
    builder
        .push_datetime_sample(Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap(), 37, 22)
        .push_datetime_sample(Utc.with_ymd_and_hms(2019, 3, 2, 0, 0, 0).unwrap(), 20, 12);

    let dataset = builder.build().expect("dataset");
    assert_eq!(dataset.times(), &[1_551_398_400, 1_551_484_800]);
    assert_eq!(dataset.values(SeriesId::A), &[37, 20]);
    assert_eq!(dataset.meta(SeriesId::A).name, "Joined");
}

#[test]
fn source_deserializes_from_loader_json() {
    let json = r##"{
        "times": [1, 2, 3],
        "series_a": [5, 6, 7],
        "series_b": [1, 1, 1],
        "meta_a": { "name": "#0", "color": "#3DC23F", "kind": "line" },
        "meta_b": { "name": "#1", "color": "#F34C44", "kind": "line" },
        "time_kind": "x"
    }"##;
    let source: DatasetSource = serde_json::from_str(json).expect("parse source");
    let dataset = Dataset::try_from(source).expect("valid dataset");
    assert_eq!(dataset.global_max(), 7);
}

#[test]
fn builder_truncates_millisecond_feed_timestamps() {
    let mut builder = DatasetBuilder::new(
        SeriesMeta::new("a", "#3DC23F"),
        SeriesMeta::new("b", "#F34C44"),
    );
    builder
        .push_millis_sample(1_542_412_800_000, 37, 22)
        .push_millis_sample(1_542_499_200_500, 20, 12);
    let dataset = builder.build().expect("dataset");
    assert_eq!(dataset.times(), &[1_542_412_800, 1_542_499_200]);
}

#[test]
fn sub_second_feed_collapses_into_duplicate_times() {
    let mut builder = DatasetBuilder::new(SeriesMeta::default(), SeriesMeta::default());
    builder
        .push_millis_sample(1_000, 1, 1)
        .push_millis_sample(1_500, 2, 2);
    assert!(matches!(builder.build(), Err(ChartError::InvalidDataset(_))));
}

#[test]
fn time_span_wider_than_i64_is_rejected() {
    let err = Dataset::new(source(vec![i64::MIN, i64::MAX], vec![1, 2], vec![1, 2]))
        .expect_err("time span overflow");
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}

#[test]
fn value_extent_wider_than_i64_is_rejected() {
    let err = Dataset::new(source(vec![1, 2], vec![i64::MIN, i64::MAX], vec![0, 0]))
        .expect_err("value extent overflow");
    assert!(matches!(err, ChartError::InvalidDataset(_)));

    // Only the zero-baseline extent overflows here.
    let err = Dataset::new(source(vec![1, 2], vec![i64::MIN, -1], vec![i64::MAX, 0]))
        .expect_err("baseline extent overflow");
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}

#[test]
fn widest_representable_extents_are_accepted() {
    let dataset = Dataset::new(source(
        vec![i64::MIN, -1],
        vec![0, i64::MAX],
        vec![1, 2],
    ))
    .expect("extents fit in i64");
    assert_eq!(dataset.time_span(), i64::MAX);
    assert_eq!(dataset.value_diff(), i64::MAX);
}
