use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of horizontal grid lines (and tick labels) on the main pane.
pub const GRID_TICK_COUNT: usize = 6;

pub type TickValues = SmallVec<[i64; GRID_TICK_COUNT]>;

/// Ratio band inside which a new visible maximum keeps the current grid.
///
/// The ratio is `current_max / visible_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RescaleBounds {
    pub lower_ratio: f64,
    pub upper_ratio: f64,
}

impl Default for RescaleBounds {
    fn default() -> Self {
        Self {
            lower_ratio: 0.7,
            upper_ratio: 1.5,
        }
    }
}

impl RescaleBounds {
    #[must_use]
    pub fn contains(self, ratio: f64) -> bool {
        ratio >= self.lower_ratio && ratio <= self.upper_ratio
    }
}

/// Start/end multipliers (of main pane height) for one grid offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetCurve {
    pub from: f64,
    pub to: f64,
}

impl OffsetCurve {
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

/// Offset curves driven during a rescale transition.
///
/// `outgoing` slides the previous grid lines away, `incoming` brings the new
/// ones into their resting place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOffsetCurves {
    pub outgoing: OffsetCurve,
    pub incoming: OffsetCurve,
}

impl Default for GridOffsetCurves {
    fn default() -> Self {
        Self {
            outgoing: OffsetCurve::new(1.0, 3.0),
            incoming: OffsetCurve::new(0.5, 1.0),
        }
    }
}

/// Axis ticks and animated offsets of the main pane grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    bounds: RescaleBounds,
    curves: GridOffsetCurves,
    current_max: i64,
    tick_values: TickValues,
    previous_ticks: Option<TickValues>,
    pane_height: f64,
    line_spacing: f64,
    offset_a_multiplier: f64,
    offset_b_multiplier: f64,
}

impl GridModel {
    #[must_use]
    pub fn new(bounds: RescaleBounds, curves: GridOffsetCurves) -> Self {
        Self {
            bounds,
            curves,
            current_max: 0,
            tick_values: tick_values_for(0),
            previous_ticks: None,
            pane_height: 0.0,
            line_spacing: 0.0,
            offset_a_multiplier: curves.outgoing.to,
            offset_b_multiplier: curves.incoming.to,
        }
    }

    /// `false` until the first rescale assigned a ceiling.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.current_max > 0
    }

    /// Returns `true` when `visible_max` is far enough from `current_max` to
    /// warrant a rescale.
    ///
    /// Non-positive maxima never trigger: a grid scaled to zero has no ticks
    /// to show.
    #[must_use]
    pub fn needs_rescale(&self, visible_max: i64) -> bool {
        if visible_max <= 0 {
            return false;
        }
        if visible_max == self.current_max {
            return false;
        }
        let ratio = self.current_max as f64 / visible_max as f64;
        !self.bounds.contains(ratio)
    }

    /// Points the grid at a new ceiling and returns the previous one.
    ///
    /// The old ticks are kept as outgoing lines until [`Self::settle`] or the
    /// end of the outgoing offset animation.
    pub fn retarget(&mut self, new_max: i64) -> i64 {
        let old_max = self.current_max;
        let new_ticks = tick_values_for(new_max);
        let old_ticks = std::mem::replace(&mut self.tick_values, new_ticks);
        self.previous_ticks = (old_max > 0).then_some(old_ticks);
        self.current_max = new_max;
        self.offset_a_multiplier = self.curves.outgoing.from;
        self.offset_b_multiplier = self.curves.incoming.from;
        old_max
    }

    /// Jumps both offsets to their resting values and drops outgoing ticks.
    pub fn settle(&mut self) {
        self.previous_ticks = None;
        self.offset_a_multiplier = self.curves.outgoing.to;
        self.offset_b_multiplier = self.curves.incoming.to;
    }

    /// Re-derives line spacing for a main pane of `height` pixels.
    ///
    /// Six lines share nine tenths of the pane: `height / 10 * 9 / 5`, in
    /// whole pixels.
    pub fn set_pane_height(&mut self, height: u32) {
        self.pane_height = f64::from(height);
        self.line_spacing = f64::from(height / 10 * 9 / 5);
    }

    pub fn set_offset_a_multiplier(&mut self, multiplier: f64) {
        self.offset_a_multiplier = multiplier;
    }

    pub fn set_offset_b_multiplier(&mut self, multiplier: f64) {
        self.offset_b_multiplier = multiplier;
    }

    /// Called when the outgoing animation finished.
    pub fn clear_outgoing(&mut self) {
        self.previous_ticks = None;
    }

    #[must_use]
    pub fn bounds(&self) -> RescaleBounds {
        self.bounds
    }

    #[must_use]
    pub fn curves(&self) -> GridOffsetCurves {
        self.curves
    }

    #[must_use]
    pub fn current_max(&self) -> i64 {
        self.current_max
    }

    #[must_use]
    pub fn tick_values(&self) -> &[i64] {
        &self.tick_values
    }

    #[must_use]
    pub fn outgoing_ticks(&self) -> Option<&[i64]> {
        self.previous_ticks.as_deref()
    }

    #[must_use]
    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    #[must_use]
    pub fn pane_height(&self) -> f64 {
        self.pane_height
    }

    #[must_use]
    pub fn offset_a_multiplier(&self) -> f64 {
        self.offset_a_multiplier
    }

    #[must_use]
    pub fn offset_b_multiplier(&self) -> f64 {
        self.offset_b_multiplier
    }

    /// Outgoing grid offset in pixels.
    #[must_use]
    pub fn offset_a(&self) -> f64 {
        self.offset_a_multiplier * self.pane_height
    }

    /// Incoming grid offset in pixels.
    #[must_use]
    pub fn offset_b(&self) -> f64 {
        self.offset_b_multiplier * self.pane_height
    }
}

/// Six ticks from zero in integer steps of `max / 5` (truncating).
#[must_use]
pub fn tick_values_for(max: i64) -> TickValues {
    let step = max / 5;
    (0..GRID_TICK_COUNT as i64).map(|i| i * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_use_truncating_integer_step() {
        assert_eq!(tick_values_for(12).as_slice(), &[0, 2, 4, 6, 8, 10]);
        assert_eq!(tick_values_for(0).as_slice(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn line_spacing_uses_integer_pixels() {
        let mut grid = GridModel::new(RescaleBounds::default(), GridOffsetCurves::default());
        grid.set_pane_height(375);
        // 375 / 10 = 37, * 9 = 333, / 5 = 66
        assert_eq!(grid.line_spacing(), 66.0);
    }

    #[test]
    fn first_retarget_has_no_outgoing_ticks() {
        let mut grid = GridModel::new(RescaleBounds::default(), GridOffsetCurves::default());
        assert_eq!(grid.retarget(100), 0);
        assert!(grid.outgoing_ticks().is_none());
        assert_eq!(grid.retarget(400), 100);
        assert_eq!(
            grid.outgoing_ticks(),
            Some([0, 20, 40, 60, 80, 100].as_slice())
        );
    }
}
