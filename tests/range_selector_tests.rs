use range_chart::core::{Dataset, DatasetSource, SeriesMeta};
use range_chart::interaction::{
    DragGesture, DragTarget, RangeSelector, SelectionBand, SelectionState,
};

const TOP: f64 = 700.0;
const MID_Y: f64 = 750.0;

fn selector(left: f64, right: f64) -> RangeSelector {
    let mut selector = RangeSelector::new(SelectionBand::new(left, right), 20.0, 48.0);
    selector.set_pane_geometry(400.0, TOP, 100.0);
    selector
}

fn dataset() -> Dataset {
    Dataset::new(DatasetSource {
        times: vec![0, 100, 200, 300, 400],
        series_a: vec![1, 2, 3, 4, 5],
        series_b: vec![1, 1, 1, 1, 1],
        meta_a: SeriesMeta::new("a", "#3DC23F"),
        meta_b: SeriesMeta::new("b", "#F34C44"),
        time_kind: "x".to_owned(),
    })
    .expect("dataset")
}

#[test]
fn touch_delta_separates_edge_from_center() {
    let selector = selector(100.0, 300.0);
    assert_eq!(selector.hit_test(119.0, MID_Y), Some(DragTarget::LeftEdge));
    assert_eq!(selector.hit_test(121.0, MID_Y), Some(DragTarget::Center));
    assert_eq!(selector.hit_test(81.0, MID_Y), Some(DragTarget::LeftEdge));
    assert_eq!(selector.hit_test(79.0, MID_Y), None);
    assert_eq!(selector.hit_test(290.0, MID_Y), Some(DragTarget::RightEdge));
    assert_eq!(selector.hit_test(200.0, MID_Y), Some(DragTarget::Center));
}

#[test]
fn pointer_outside_overview_strip_is_ignored() {
    let mut selector = selector(100.0, 300.0);
    assert_eq!(selector.hit_test(200.0, 100.0), None);
    assert_eq!(selector.pointer_down(200.0, 100.0), SelectionState::Idle);
}

#[test]
fn narrow_band_edges_resolve_to_nearest() {
    let selector = selector(100.0, 130.0);
    assert_eq!(selector.hit_test(110.0, MID_Y), Some(DragTarget::LeftEdge));
    assert_eq!(selector.hit_test(125.0, MID_Y), Some(DragTarget::RightEdge));
    // equal distance keeps the left edge
    assert_eq!(selector.hit_test(115.0, MID_Y), Some(DragTarget::LeftEdge));
}

#[test]
fn center_drag_preserves_width_and_clamps_to_pane() {
    let mut selector = selector(100.0, 300.0);
    assert_eq!(
        selector.pointer_down(150.0, MID_Y),
        SelectionState::DraggingCenter
    );
    assert_eq!(
        selector.gesture(),
        Some(DragGesture::Center {
            offset: 50.0,
            width: 200.0
        })
    );

    assert!(selector.pointer_move(200.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(150.0, 350.0));

    assert!(selector.pointer_move(500.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(200.0, 400.0));

    assert!(selector.pointer_move(-100.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(0.0, 200.0));
}

#[test]
fn left_edge_drag_respects_minimum_width() {
    let mut selector = selector(100.0, 300.0);
    assert_eq!(
        selector.pointer_down(105.0, MID_Y),
        SelectionState::DraggingLeftEdge
    );
    assert!(selector.pointer_move(185.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(180.0, 300.0));

    assert!(selector.pointer_move(400.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(252.0, 300.0));

    assert!(selector.pointer_move(-50.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(0.0, 300.0));
}

#[test]
fn right_edge_drag_mirrors_left_edge() {
    let mut selector = selector(100.0, 300.0);
    assert_eq!(
        selector.pointer_down(310.0, MID_Y),
        SelectionState::DraggingRightEdge
    );
    assert!(selector.pointer_move(360.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(100.0, 350.0));

    assert!(selector.pointer_move(0.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(100.0, 148.0));

    assert!(selector.pointer_move(900.0, MID_Y));
    assert_eq!(selector.band(), SelectionBand::new(100.0, 400.0));
}

#[test]
fn moves_follow_pointer_without_accumulating() {
    let mut selector = selector(100.0, 300.0);
    selector.pointer_down(200.0, MID_Y);
    selector.pointer_move(230.0, MID_Y);
    selector.pointer_move(230.0, MID_Y);
    assert_eq!(selector.band(), SelectionBand::new(130.0, 330.0));
    assert!(!selector.pointer_move(230.0, MID_Y));
}

#[test]
fn up_and_cancel_reset_to_idle() {
    let mut selector = selector(100.0, 300.0);
    selector.pointer_down(200.0, MID_Y);
    selector.pointer_up();
    assert_eq!(selector.state(), SelectionState::Idle);
    assert!(!selector.pointer_move(250.0, MID_Y));

    selector.pointer_down(100.0, MID_Y);
    selector.pointer_cancel();
    assert_eq!(selector.state(), SelectionState::Idle);
    assert_eq!(selector.band(), SelectionBand::new(100.0, 300.0));
}

#[test]
fn band_maps_linearly_onto_time() {
    let dataset = dataset();
    let selector = selector(100.0, 300.0);
    let range = selector.visible_range(&dataset);
    assert_eq!((range.start(), range.end()), (100, 300));
}
