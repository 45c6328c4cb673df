use tracing::{debug, trace, warn};

use crate::animation::{AnimatedField, AnimationRecord};
use crate::core::{RecomputeOutcome, VisibleRange, fitted_y_scale};
use crate::render::Renderer;

use super::{ChartController, InvalidationTopic};

impl<R: Renderer> ChartController<R> {
    /// Advances every running rescale animation to `now_ms`.
    ///
    /// `now_ms` is a monotonic host timestamp in milliseconds. Returns `true`
    /// when at least one animated value changed, meaning a redraw is due.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let samples = self.animator.tick(now_ms);
        if samples.is_empty() {
            return false;
        }

        let mut scale_changed = false;
        for sample in &samples {
            match sample.field {
                AnimatedField::GridOffsetA => {
                    self.grid.set_offset_a_multiplier(sample.value);
                    if sample.finished {
                        self.grid.clear_outgoing();
                    }
                }
                AnimatedField::GridOffsetB => self.grid.set_offset_b_multiplier(sample.value),
                AnimatedField::VerticalScale => scale_changed = true,
            }
        }
        trace!(now_ms, samples = samples.len(), scale_changed, "rescale tick");

        self.invalidate(InvalidationTopic::Grid);
        if scale_changed {
            self.refresh_main();
        }
        true
    }

    /// Recomputes both panes for the current layout.
    pub(super) fn relayout(&mut self) {
        if !self.layout.is_valid() {
            return;
        }
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };

        let overview_size = self.layout.overview;
        let overview_scale = fitted_y_scale(overview_size.height_px(), dataset.value_diff());
        let outcome = self.overview.recompute(
            dataset,
            VisibleRange::full(dataset),
            overview_size,
            Some(overview_scale),
        );
        if let RecomputeOutcome::Retained(reason) = outcome {
            warn!(?reason, "overview recompute retained previous geometry");
        }
        self.invalidate(InvalidationTopic::Overview);
        self.refresh_main();
    }

    /// Recomputes the main pane for the current band and triggers a rescale
    /// when the visible maximum moved out of tolerance.
    pub(super) fn refresh_main(&mut self) -> Option<RecomputeOutcome> {
        let dataset = self.dataset.as_ref()?;
        let range = self.selector.visible_range(dataset);
        let scale_override = self.main_scale_override();
        let outcome = self
            .main
            .recompute(dataset, range, self.layout.main, scale_override);

        match outcome {
            RecomputeOutcome::Updated { visible_max } => {
                trace!(
                    start = range.start(),
                    end = range.end(),
                    visible_max,
                    "main pane recomputed"
                );
                self.invalidate(InvalidationTopic::MainPane);
                self.apply_rescale(visible_max);
            }
            RecomputeOutcome::Retained(reason) => {
                warn!(?reason, "main recompute retained previous geometry");
            }
        }
        Some(outcome)
    }

    /// Vertical scale the main pane must use right now.
    ///
    /// An in-flight scale animation wins; otherwise the scale follows the
    /// grid ceiling so grid lines and paths agree. `None` before the first
    /// rescale lets the viewport fit its own maximum.
    pub(super) fn main_scale_override(&self) -> Option<f64> {
        self.animator
            .current_value(AnimatedField::VerticalScale)
            .or_else(|| {
                self.grid.is_initialized().then(|| {
                    fitted_y_scale(self.layout.main.height_px(), self.grid.current_max())
                })
            })
    }

    fn apply_rescale(&mut self, visible_max: i64) {
        if !self.grid.needs_rescale(visible_max) {
            return;
        }

        let initial = !self.grid.is_initialized();
        let from_scale = self.main.y_scale();
        let old_max = self.grid.retarget(visible_max);
        let to_scale = fitted_y_scale(self.layout.main.height_px(), visible_max);
        let duration_ms = self.config.rescale_duration_ms;
        self.invalidate(InvalidationTopic::Grid);

        if initial || duration_ms <= 0.0 {
            debug!(old_max, new_max = visible_max, "grid rescaled without transition");
            self.grid.settle();
            self.animator.clear();
            if from_scale != to_scale {
                self.recompute_main_at_scale(to_scale);
            }
            return;
        }

        debug!(
            old_max,
            new_max = visible_max,
            from_scale,
            to_scale,
            duration_ms,
            "rescale transition started"
        );
        let curves = self.grid.curves();
        self.animator.start(AnimationRecord::new(
            AnimatedField::GridOffsetA,
            curves.outgoing.from,
            curves.outgoing.to,
            duration_ms,
        ));
        self.animator.start(AnimationRecord::new(
            AnimatedField::GridOffsetB,
            curves.incoming.from,
            curves.incoming.to,
            duration_ms,
        ));
        if scales_differ(from_scale, to_scale) {
            self.animator.start(AnimationRecord::new(
                AnimatedField::VerticalScale,
                from_scale,
                to_scale,
                duration_ms,
            ));
        } else {
            self.animator.cancel(AnimatedField::VerticalScale);
        }
    }

    fn recompute_main_at_scale(&mut self, y_scale: f64) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let range = self.selector.visible_range(dataset);
        let outcome = self
            .main
            .recompute(dataset, range, self.layout.main, Some(y_scale));
        if outcome.is_updated() {
            self.invalidate(InvalidationTopic::MainPane);
        }
    }
}

fn scales_differ(a: f64, b: f64) -> bool {
    (a - b).abs() > f64::EPSILON * a.abs().max(b.abs()).max(1.0)
}
