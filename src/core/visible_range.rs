use serde::{Deserialize, Serialize};

use crate::core::Dataset;

/// Time-domain window currently mapped onto the main pane.
///
/// Construction through [`VisibleRange::new`] enforces `start < end`; values
/// produced by [`VisibleRange::from_fractions`] are additionally clamped into
/// the dataset's time extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleRange {
    start: i64,
    end: i64,
}

impl VisibleRange {
    /// Returns `None` for a collapsed or reversed window.
    #[must_use]
    pub fn new(start: i64, end: i64) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Full time extent of a dataset.
    #[must_use]
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            start: dataset.min_time(),
            end: dataset.max_time(),
        }
    }

    /// Maps band fractions of the overview width back to dataset time.
    ///
    /// `start = min_time + left * span`, `end = min_time + right * span`,
    /// truncated to whole time units. A window that truncates to zero width is
    /// widened by one unit inside the dataset extent, so the result always
    /// satisfies `start < end`.
    #[must_use]
    pub fn from_fractions(dataset: &Dataset, left: f64, right: f64) -> Self {
        let min_time = dataset.min_time();
        let max_time = dataset.max_time();
        let span = dataset.time_span() as f64;

        let to_time = |fraction: f64| -> i64 {
            let fraction = if fraction.is_finite() {
                fraction.clamp(0.0, 1.0)
            } else {
                0.0
            };
            min_time
                .saturating_add((fraction * span) as i64)
                .clamp(min_time, max_time)
        };

        let mut start = to_time(left.min(right));
        let mut end = to_time(left.max(right));
        if end <= start {
            if start < max_time {
                end = start + 1;
            } else {
                start = max_time - 1;
                end = max_time;
            }
        }
        Self { start, end }
    }

    #[must_use]
    pub const fn start(self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> i64 {
        self.end
    }

    /// Saturates for hand-built windows wider than `i64::MAX`.
    #[must_use]
    pub const fn span(self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// `true` when the window shares at least one instant with `[min, max]`.
    #[must_use]
    pub const fn intersects(self, min: i64, max: i64) -> bool {
        self.start <= max && self.end >= min
    }
}
