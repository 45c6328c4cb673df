use crate::core::VisibleRange;

/// Inclusive index window `[from, to]` of samples feeding one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWindow {
    pub from: usize,
    pub to: usize,
}

impl IndexWindow {
    #[must_use]
    pub const fn sample_count(self) -> usize {
        self.to - self.from + 1
    }

    pub fn indices(self) -> std::ops::RangeInclusive<usize> {
        self.from..=self.to
    }
}

/// Locates the samples that cover `range` in a strictly increasing time axis.
///
/// `from` is the last sample with `time <= range.start()` (0 when none) and
/// `to` the first sample with `time >= range.end()` (last index when none),
/// so the window reaches one sample past each edge when the edge falls
/// between samples. Returns `None` for an empty axis or when the range does
/// not overlap the axis at all.
#[must_use]
pub fn visible_index_window(times: &[i64], range: VisibleRange) -> Option<IndexWindow> {
    let (first, last) = (*times.first()?, *times.last()?);
    if !range.intersects(first, last) {
        return None;
    }

    let last_index = times.len() - 1;
    let from = times
        .partition_point(|&time| time <= range.start())
        .checked_sub(1)
        .unwrap_or(0);
    let to = times
        .partition_point(|&time| time < range.end())
        .min(last_index);

    (from <= to).then_some(IndexWindow { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i64, end: i64) -> VisibleRange {
        VisibleRange::new(start, end).expect("valid range")
    }

    #[test]
    fn window_snaps_outward_to_enclosing_samples() {
        let times = [0, 10, 20, 30, 40];
        let window = visible_index_window(&times, range(15, 25)).expect("window");
        assert_eq!(window, IndexWindow { from: 1, to: 3 });
    }

    #[test]
    fn exact_hits_are_inclusive() {
        let times = [0, 10, 20, 30, 40];
        let window = visible_index_window(&times, range(10, 30)).expect("window");
        assert_eq!(window, IndexWindow { from: 1, to: 3 });
        assert_eq!(window.sample_count(), 3);
    }

    #[test]
    fn edges_outside_axis_fall_back_to_bounds() {
        let times = [0, 10, 20];
        let window = visible_index_window(&times, range(-5, 25)).expect("window");
        assert_eq!(window, IndexWindow { from: 0, to: 2 });
    }

    #[test]
    fn disjoint_range_has_no_window() {
        let times = [0, 10, 20];
        assert!(visible_index_window(&times, range(21, 30)).is_none());
        assert!(visible_index_window(&times, range(-30, -1)).is_none());
        assert!(visible_index_window(&[], range(0, 1)).is_none());
    }
}
