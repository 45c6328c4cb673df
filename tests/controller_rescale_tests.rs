use approx::assert_relative_eq;
use range_chart::animation::AnimatedField;
use range_chart::api::{ChartController, ChartControllerConfig};
use range_chart::core::{Dataset, DatasetSource, SeriesMeta};
use range_chart::interaction::SelectionBand;
use range_chart::render::NullRenderer;

const DAY: i64 = 86_400;
const OVERVIEW_Y: f64 = 750.0;

/// Low values on the left, a tall plateau on the right.
fn step_dataset() -> Dataset {
    Dataset::new(DatasetSource {
        times: (0..10).map(|i| 1_546_300_800 + i * DAY).collect(),
        series_a: vec![10, 12, 11, 9, 10, 100, 95, 98, 97, 99],
        series_b: vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
        meta_a: SeriesMeta::new("Joined", "#3DC23F"),
        meta_b: SeriesMeta::new("Left", "#F34C44"),
        time_kind: "x".to_owned(),
    })
    .expect("valid dataset")
}

fn controller(config: ChartControllerConfig) -> ChartController<NullRenderer> {
    let mut controller = ChartController::new(
        NullRenderer::default(),
        config.with_initial_band(0.0, 100.0),
    )
    .expect("controller init");
    controller.load_dataset(step_dataset());
    controller.resize(400, 800).expect("resize");
    controller
}

fn drag_band_to_right_end(controller: &mut ChartController<NullRenderer>) {
    controller.pointer_down(50.0, OVERVIEW_Y);
    controller.pointer_move(350.0, OVERVIEW_Y);
    controller.pointer_up();
    assert_eq!(controller.selection_band(), SelectionBand::new(300.0, 400.0));
}

#[test]
fn first_layout_snaps_grid_without_animation() {
    let controller = controller(ChartControllerConfig::default());
    assert_eq!(controller.grid().current_max(), 12);
    assert!(controller.grid().outgoing_ticks().is_none());
    assert!(!controller.is_animating());
    assert_relative_eq!(controller.main_viewport().y_scale(), 50.0);
}

#[test]
fn large_max_change_starts_rescale_transition() {
    let mut controller = controller(ChartControllerConfig::default());
    drag_band_to_right_end(&mut controller);

    assert_eq!(controller.main_viewport().visible_max(), 99);
    assert_eq!(controller.grid().current_max(), 99);
    assert_eq!(
        controller.grid().outgoing_ticks(),
        Some([0, 2, 4, 6, 8, 10].as_slice())
    );
    let animator = controller.animator();
    assert!(animator.is_active(AnimatedField::GridOffsetA));
    assert!(animator.is_active(AnimatedField::GridOffsetB));
    assert!(animator.is_active(AnimatedField::VerticalScale));
    // paths still use the previous scale until the first tick
    assert_relative_eq!(controller.main_viewport().y_scale(), 50.0);
}

#[test]
fn ticks_interpolate_offsets_and_scale() {
    let mut controller = controller(ChartControllerConfig::default());
    drag_band_to_right_end(&mut controller);
    let target_scale = 600.0 / 99.0;

    assert!(controller.tick(1_000.0));
    assert_relative_eq!(controller.grid().offset_a_multiplier(), 1.0);
    assert_relative_eq!(controller.grid().offset_b_multiplier(), 0.5);

    assert!(controller.tick(1_250.0));
    assert_relative_eq!(controller.grid().offset_a_multiplier(), 2.0);
    assert_relative_eq!(controller.grid().offset_b_multiplier(), 0.75);
    assert_relative_eq!(
        controller.main_viewport().y_scale(),
        (50.0 + target_scale) / 2.0,
        epsilon = 1e-9
    );

    assert!(controller.tick(1_500.0));
    assert!(!controller.is_animating());
    assert!(controller.grid().outgoing_ticks().is_none());
    assert_relative_eq!(controller.grid().offset_a_multiplier(), 3.0);
    assert_relative_eq!(controller.grid().offset_b_multiplier(), 1.0);
    assert_relative_eq!(controller.main_viewport().y_scale(), target_scale, epsilon = 1e-9);

    assert!(!controller.tick(1_600.0));
}

#[test]
fn new_rescale_supersedes_running_one() {
    let mut controller = controller(ChartControllerConfig::default());
    drag_band_to_right_end(&mut controller);
    controller.tick(0.0);
    controller.tick(250.0);
    let mid_scale = controller.main_viewport().y_scale();

    controller.pointer_down(350.0, OVERVIEW_Y);
    controller.pointer_move(50.0, OVERVIEW_Y);
    controller.pointer_up();

    assert_eq!(controller.grid().current_max(), 12);
    let record = controller
        .animator()
        .record(AnimatedField::VerticalScale)
        .expect("scale animation");
    assert_relative_eq!(record.from, mid_scale, epsilon = 1e-9);
    assert_relative_eq!(record.to, 50.0);
    assert_eq!(record.started_at_ms, None);
}

#[test]
fn zero_duration_rescale_applies_immediately() {
    let mut controller = controller(ChartControllerConfig::default().with_rescale_duration_ms(0.0));
    drag_band_to_right_end(&mut controller);

    assert!(!controller.is_animating());
    assert_eq!(controller.grid().current_max(), 99);
    assert!(controller.grid().outgoing_ticks().is_none());
    assert_relative_eq!(
        controller.main_viewport().y_scale(),
        600.0 / 99.0,
        epsilon = 1e-9
    );
}

#[test]
fn small_max_change_keeps_grid() {
    let mut controller = controller(ChartControllerConfig::default());
    controller.pointer_down(50.0, OVERVIEW_Y);
    controller.pointer_move(60.0, OVERVIEW_Y);
    controller.pointer_up();

    assert_eq!(controller.grid().current_max(), 12);
    assert!(!controller.is_animating());
}

#[test]
fn resize_cancels_scale_animation_but_keeps_grid_motion() {
    let mut controller = controller(ChartControllerConfig::default());
    drag_band_to_right_end(&mut controller);
    controller.tick(0.0);
    controller.tick(100.0);

    controller.resize(400, 1_600).expect("resize");

    assert!(!controller.animator().is_active(AnimatedField::VerticalScale));
    assert!(controller.animator().is_active(AnimatedField::GridOffsetA));
    assert_relative_eq!(
        controller.main_viewport().y_scale(),
        1_200.0 / 99.0,
        epsilon = 1e-9
    );
}
