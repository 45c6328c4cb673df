use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{Dataset, VisibleRange};

use super::{DragGesture, DragTarget, SelectionBand, SelectionState};

/// Gesture state machine over the overview strip.
///
/// Pointer coordinates are widget-relative; the overview pane occupies
/// `[0, pane_width] x [pane_top, pane_top + pane_height]`. Band positions are
/// pane-relative pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelector {
    band: SelectionBand,
    pane_width: f64,
    pane_top: f64,
    pane_height: f64,
    touch_delta: f64,
    min_band_width: f64,
    gesture: Option<DragGesture>,
    last_pointer: Option<(f64, f64)>,
}

impl RangeSelector {
    #[must_use]
    pub fn new(initial_band: SelectionBand, touch_delta: f64, min_band_width: f64) -> Self {
        Self {
            band: initial_band,
            pane_width: 0.0,
            pane_top: 0.0,
            pane_height: 0.0,
            touch_delta,
            min_band_width,
            gesture: None,
            last_pointer: None,
        }
    }

    /// Applies new overview geometry.
    ///
    /// On the first layout the configured band is clamped into the pane. On
    /// later layouts the band is scaled with the width change so the selected
    /// time range survives the resize.
    pub fn set_pane_geometry(&mut self, width: f64, top: f64, height: f64) {
        let previous_width = self.pane_width;
        self.pane_width = width.max(0.0);
        self.pane_top = top;
        self.pane_height = height.max(0.0);

        if previous_width > 0.0 && self.pane_width > 0.0 {
            let factor = self.pane_width / previous_width;
            self.band = SelectionBand::new(self.band.left * factor, self.band.right * factor);
        }
        self.band = self.clamped_band(self.band);
    }

    #[must_use]
    pub fn band(&self) -> SelectionBand {
        self.band
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.gesture
            .map_or(SelectionState::Idle, DragGesture::state)
    }

    #[must_use]
    pub fn gesture(&self) -> Option<DragGesture> {
        self.gesture
    }

    #[must_use]
    pub fn last_pointer(&self) -> Option<(f64, f64)> {
        self.last_pointer
    }

    #[must_use]
    pub fn pane_width(&self) -> f64 {
        self.pane_width
    }

    #[must_use]
    pub fn touch_delta(&self) -> f64 {
        self.touch_delta
    }

    /// Minimum band width actually enforced for the current pane.
    #[must_use]
    pub fn effective_min_width(&self) -> f64 {
        self.min_band_width.min(self.pane_width).max(0.0)
    }

    /// Classifies a widget-relative pointer position against the band.
    ///
    /// The interior wins when the pointer is farther than the tolerance from
    /// both edges. Otherwise the nearest edge within tolerance is hit; the
    /// left edge wins ties.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<DragTarget> {
        if !x.is_finite() || !y.is_finite() || self.pane_width <= 0.0 {
            return None;
        }
        if y < self.pane_top || y > self.pane_top + self.pane_height {
            return None;
        }

        let SelectionBand { left, right } = self.band;
        let delta = self.touch_delta;
        if x > left + delta && x < right - delta {
            return Some(DragTarget::Center);
        }

        [
            ((x - left).abs(), DragTarget::LeftEdge),
            ((x - right).abs(), DragTarget::RightEdge),
        ]
        .into_iter()
        .filter(|(distance, _)| *distance < delta)
        .min_by_key(|(distance, _)| OrderedFloat(*distance))
        .map(|(_, target)| target)
    }

    /// Starts a drag when the pointer hits the band; stays idle otherwise.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> SelectionState {
        self.last_pointer = Some((x, y));
        let SelectionBand { left, right } = self.band;
        self.gesture = self.hit_test(x, y).map(|target| match target {
            DragTarget::Center => DragGesture::Center {
                offset: x - left,
                width: right - left,
            },
            DragTarget::LeftEdge => DragGesture::LeftEdge { offset: x - left },
            DragTarget::RightEdge => DragGesture::RightEdge { offset: x - right },
        });
        trace!(x, y, state = ?self.state(), "selection pointer down");
        self.state()
    }

    /// Moves the band for the active gesture.
    ///
    /// Returns `true` when the band changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        self.last_pointer = Some((x, y));
        let Some(gesture) = self.gesture else {
            return false;
        };

        let next = self.moved_band(gesture, x);
        if next == self.band {
            return false;
        }
        trace!(left = next.left, right = next.right, "selection band moved");
        self.band = next;
        true
    }

    /// Ends any gesture.
    pub fn pointer_up(&mut self) {
        self.gesture = None;
    }

    pub fn pointer_cancel(&mut self) {
        self.gesture = None;
    }

    /// Band edges as fractions of the overview width.
    #[must_use]
    pub fn band_fractions(&self) -> (f64, f64) {
        if self.pane_width <= 0.0 {
            return (0.0, 1.0);
        }
        (
            self.band.left / self.pane_width,
            self.band.right / self.pane_width,
        )
    }

    /// Linear map of the band back to dataset time.
    #[must_use]
    pub fn visible_range(&self, dataset: &Dataset) -> VisibleRange {
        let (left, right) = self.band_fractions();
        VisibleRange::from_fractions(dataset, left, right)
    }

    fn moved_band(&self, gesture: DragGesture, x: f64) -> SelectionBand {
        let width = self.pane_width;
        let min_width = self.effective_min_width();
        let SelectionBand { left, right } = self.band;

        match gesture {
            DragGesture::Center {
                offset,
                width: band_width,
            } => {
                let band_width = band_width.clamp(min_width, width);
                let left = (x - offset).clamp(0.0, width - band_width);
                SelectionBand::new(left, left + band_width)
            }
            DragGesture::LeftEdge { offset } => {
                let max_left = (right - min_width).max(0.0);
                SelectionBand::new((x - offset).clamp(0.0, max_left), right)
            }
            DragGesture::RightEdge { offset } => {
                let min_right = (left + min_width).min(width);
                SelectionBand::new(left, (x - offset).clamp(min_right, width))
            }
        }
    }

    fn clamped_band(&self, band: SelectionBand) -> SelectionBand {
        let width = self.pane_width;
        let min_width = self.effective_min_width();
        let right = band.right.clamp(min_width, width);
        let left = band.left.clamp(0.0, (right - min_width).max(0.0));
        if right - left <= 0.0 {
            return SelectionBand::new(0.0, width);
        }
        SelectionBand::new(left, right)
    }
}
