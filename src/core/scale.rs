use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_px;
use crate::core::{PaneSize, ScreenPoint, VisibleRange};

/// Data-space to pane-space transform for one recompute pass.
///
/// `x_scale` and `y_scale` are pixels per data unit. Y grows downward from
/// the pane's bottom edge and is clamped into `[0, height]` so transient scale
/// mismatches during a rescale never draw outside the pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneProjection {
    origin_time: i64,
    x_scale: f64,
    y_scale: f64,
    height: f64,
}

impl PaneProjection {
    /// Builds the projection for `range` on a pane of `size`.
    ///
    /// `y_scale` is the caller-provided override when finite and positive,
    /// otherwise `height / visible_max` (with `visible_max` floored at 1).
    #[must_use]
    pub fn new(
        range: VisibleRange,
        size: PaneSize,
        visible_max: i64,
        y_scale_override: Option<f64>,
    ) -> Self {
        let height = size.height_px();
        let x_scale = size.width_px() / range.span() as f64;
        let y_scale = y_scale_override
            .filter(|scale| scale.is_finite() && *scale > 0.0)
            .unwrap_or_else(|| fitted_y_scale(height, visible_max));

        Self {
            origin_time: range.start(),
            x_scale,
            y_scale,
            height,
        }
    }

    #[must_use]
    pub fn x_scale(self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn time_to_x(self, time: i64) -> f64 {
        (i128::from(time) - i128::from(self.origin_time)) as f64 * self.x_scale
    }

    #[must_use]
    pub fn value_to_y(self, value: i64) -> f64 {
        clamp_px(self.height - value as f64 * self.y_scale, 0.0, self.height)
    }

    #[must_use]
    pub fn project(self, time: i64, value: i64) -> ScreenPoint {
        ScreenPoint::new(self.time_to_x(time), self.value_to_y(value))
    }
}

/// Vertical scale that maps `max_value` onto the full pane height.
#[must_use]
pub fn fitted_y_scale(height_px: f64, max_value: i64) -> f64 {
    height_px / max_value.max(1) as f64
}
