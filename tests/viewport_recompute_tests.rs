use approx::assert_relative_eq;
use range_chart::core::{
    Dataset, DatasetSource, PaneRole, PaneSize, RecomputeOutcome, RetainReason, SeriesId,
    SeriesMeta, Viewport, VisibleRange,
};

const DAY: i64 = 86_400;
const START: i64 = 1_542_412_800;

fn ten_day_dataset() -> Dataset {
    let times = (0..10).map(|i| START + i * DAY).collect();
    Dataset::new(DatasetSource {
        times,
        series_a: vec![1, 5, 3, 8, 2, 9, 4, 7, 6, 10],
        series_b: vec![2, 3, 1, 4, 2, 5, 3, 2, 1, 3],
        meta_a: SeriesMeta::new("#0", "#3DC23F"),
        meta_b: SeriesMeta::new("#1", "#F34C44"),
        time_kind: "x".to_owned(),
    })
    .expect("valid dataset")
}

#[test]
fn full_range_projects_every_sample_from_left_edge() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Main);
    let outcome = viewport.recompute(
        &dataset,
        VisibleRange::full(&dataset),
        PaneSize::new(400, 600),
        None,
    );

    assert_eq!(outcome, RecomputeOutcome::Updated { visible_max: 10 });
    let path = viewport.path(SeriesId::A);
    assert_eq!(path.len(), 10);
    assert_eq!(path[0].x, 0.0);
    assert_relative_eq!(path[9].x, 400.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.y_scale(), 60.0);
    // value 10 sits on the top edge, value 1 one unit above the bottom
    assert_relative_eq!(path[9].y, 0.0);
    assert_relative_eq!(path[0].y, 540.0);
    assert_eq!(viewport.path(SeriesId::B).len(), 10);
}

#[test]
fn window_includes_bracketing_samples() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Main);
    let range = VisibleRange::new(START + 2 * DAY + DAY / 2, START + 5 * DAY + DAY / 2)
        .expect("range");
    let outcome = viewport.recompute(&dataset, range, PaneSize::new(400, 600), None);

    let window = viewport.index_window().expect("window");
    assert_eq!((window.from, window.to), (2, 6));
    assert_eq!(viewport.path(SeriesId::A).len(), 5);
    assert_eq!(outcome.visible_max(), Some(9));
    assert_eq!(viewport.path(SeriesId::A)[0].x, 0.0);
}

#[test]
fn override_scale_wins_and_y_stays_inside_pane() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Main);
    viewport.recompute(
        &dataset,
        VisibleRange::full(&dataset),
        PaneSize::new(400, 100),
        Some(50.0),
    );

    assert_eq!(viewport.y_scale(), 50.0);
    for point in viewport.path(SeriesId::A) {
        assert!((0.0..=100.0).contains(&point.y));
    }
    assert_eq!(viewport.path(SeriesId::A)[0].y, 50.0);
}

#[test]
fn non_positive_override_falls_back_to_fitted_scale() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Overview);
    viewport.recompute(
        &dataset,
        VisibleRange::full(&dataset),
        PaneSize::new(400, 100),
        Some(0.0),
    );
    assert_relative_eq!(viewport.y_scale(), 10.0);
}

#[test]
fn recompute_is_idempotent() {
    let dataset = ten_day_dataset();
    let range = VisibleRange::new(START + DAY, START + 7 * DAY).expect("range");
    let mut viewport = Viewport::new(PaneRole::Main);
    viewport.recompute(&dataset, range, PaneSize::new(320, 240), None);
    let first = viewport.clone();
    viewport.recompute(&dataset, range, PaneSize::new(320, 240), None);
    assert_eq!(viewport, first);
}

#[test]
fn range_outside_data_retains_previous_geometry() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Main);
    viewport.recompute(
        &dataset,
        VisibleRange::full(&dataset),
        PaneSize::new(400, 600),
        None,
    );
    let before = viewport.clone();

    let past_end = VisibleRange::new(START + 20 * DAY, START + 30 * DAY).expect("range");
    let outcome = viewport.recompute(&dataset, past_end, PaneSize::new(400, 600), None);

    assert_eq!(outcome, RecomputeOutcome::Retained(RetainReason::EmptyWindow));
    assert_eq!(viewport, before);
}

#[test]
fn zero_sized_pane_is_a_no_op() {
    let dataset = ten_day_dataset();
    let mut viewport = Viewport::new(PaneRole::Overview);
    let outcome = viewport.recompute(
        &dataset,
        VisibleRange::full(&dataset),
        PaneSize::new(0, 100),
        None,
    );

    assert_eq!(outcome, RecomputeOutcome::Retained(RetainReason::InvalidPane));
    assert!(!viewport.has_geometry());
    assert!(viewport.path(SeriesId::A).is_empty());
}

#[test]
fn range_from_fractions_never_collapses() {
    let dataset = ten_day_dataset();
    let range = VisibleRange::from_fractions(&dataset, 0.5, 0.5);
    assert!(range.start() < range.end());

    let at_end = VisibleRange::from_fractions(&dataset, 1.0, 1.0);
    assert_eq!(at_end.end(), dataset.max_time());
    assert!(at_end.start() < at_end.end());

    let reversed = VisibleRange::from_fractions(&dataset, 0.75, 0.25);
    assert!(reversed.start() < reversed.end());
}
