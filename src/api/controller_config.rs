use serde::{Deserialize, Serialize};

use crate::core::{GridOffsetCurves, OffsetCurve, RescaleBounds};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DEFAULT_TOUCH_DELTA_PX, SelectionBand};

/// Public controller bootstrap configuration.
///
/// Every field has a default, so hosts can deserialize partial documents and
/// override only what they need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartControllerConfig {
    /// Distance from a band edge within which a pointer-down grabs the edge.
    pub touch_delta_px: f64,
    /// Band edges never get closer than this (capped at the overview width).
    pub min_band_width_px: f64,
    /// Band position applied on the first layout.
    pub initial_band_px: SelectionBand,
    /// `current_max / visible_max` band that keeps the current grid.
    pub rescale_bounds: RescaleBounds,
    /// Duration of every rescale interpolation.
    pub rescale_duration_ms: f64,
    pub grid_offsets: GridOffsetCurves,
    /// Share of the widget height given to the main pane (top-anchored).
    pub main_pane_ratio: f64,
    /// Share of the widget height given to the overview strip (bottom-anchored).
    pub overview_pane_ratio: f64,
}

impl Default for ChartControllerConfig {
    fn default() -> Self {
        Self {
            touch_delta_px: DEFAULT_TOUCH_DELTA_PX,
            min_band_width_px: 48.0,
            initial_band_px: SelectionBand::new(100.0, 400.0),
            rescale_bounds: RescaleBounds::default(),
            rescale_duration_ms: 500.0,
            grid_offsets: GridOffsetCurves::default(),
            main_pane_ratio: 6.0 / 8.0,
            overview_pane_ratio: 1.0 / 8.0,
        }
    }
}

impl ChartControllerConfig {
    #[must_use]
    pub fn with_touch_delta(mut self, touch_delta_px: f64) -> Self {
        self.touch_delta_px = touch_delta_px;
        self
    }

    #[must_use]
    pub fn with_min_band_width(mut self, min_band_width_px: f64) -> Self {
        self.min_band_width_px = min_band_width_px;
        self
    }

    #[must_use]
    pub fn with_initial_band(mut self, left_px: f64, right_px: f64) -> Self {
        self.initial_band_px = SelectionBand::new(left_px, right_px);
        self
    }

    #[must_use]
    pub fn with_rescale_bounds(mut self, lower_ratio: f64, upper_ratio: f64) -> Self {
        self.rescale_bounds = RescaleBounds {
            lower_ratio,
            upper_ratio,
        };
        self
    }

    #[must_use]
    pub fn with_rescale_duration_ms(mut self, duration_ms: f64) -> Self {
        self.rescale_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_pane_ratios(mut self, main_pane_ratio: f64, overview_pane_ratio: f64) -> Self {
        self.main_pane_ratio = main_pane_ratio;
        self.overview_pane_ratio = overview_pane_ratio;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.touch_delta_px.is_finite() || self.touch_delta_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "touch_delta_px must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_band_width_px.is_finite() || self.min_band_width_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "min_band_width_px must be finite and >= 0".to_owned(),
            ));
        }
        let band = self.initial_band_px;
        if !band.left.is_finite() || !band.right.is_finite() || band.left < 0.0 {
            return Err(ChartError::InvalidConfig(
                "initial_band_px must be finite with left >= 0".to_owned(),
            ));
        }
        if band.right <= band.left {
            return Err(ChartError::InvalidConfig(
                "initial_band_px right must be > left".to_owned(),
            ));
        }
        let bounds = self.rescale_bounds;
        if !bounds.lower_ratio.is_finite()
            || !bounds.upper_ratio.is_finite()
            || bounds.lower_ratio <= 0.0
            || bounds.lower_ratio > 1.0
            || bounds.upper_ratio < 1.0
        {
            return Err(ChartError::InvalidConfig(
                "rescale_bounds must satisfy 0 < lower <= 1 <= upper".to_owned(),
            ));
        }
        if !self.rescale_duration_ms.is_finite() || self.rescale_duration_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "rescale_duration_ms must be finite and >= 0".to_owned(),
            ));
        }
        for (name, curve) in [
            ("outgoing", self.grid_offsets.outgoing),
            ("incoming", self.grid_offsets.incoming),
        ] {
            validate_curve(name, curve)?;
        }
        for (name, ratio) in [
            ("main_pane_ratio", self.main_pane_ratio),
            ("overview_pane_ratio", self.overview_pane_ratio),
        ] {
            if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and in (0, 1]"
                )));
            }
        }
        if self.main_pane_ratio + self.overview_pane_ratio > 1.0 {
            return Err(ChartError::InvalidConfig(
                "main and overview panes must fit inside the widget".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn validate_curve(name: &str, curve: OffsetCurve) -> ChartResult<()> {
    if !curve.from.is_finite() || !curve.to.is_finite() || curve.from < 0.0 || curve.to < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} grid offset curve must be finite and >= 0"
        )));
    }
    Ok(())
}
