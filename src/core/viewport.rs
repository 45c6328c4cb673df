use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::scale::PaneProjection;
use crate::core::windowing::{IndexWindow, visible_index_window};
use crate::core::{Dataset, PaneRole, PaneSize, ScreenPoint, SeriesId, VisibleRange};

/// Why a recompute left the previous geometry in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetainReason {
    /// The visible range does not overlap any sample.
    EmptyWindow,
    /// The pane has zero width or height.
    InvalidPane,
}

/// Result of one [`Viewport::recompute`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecomputeOutcome {
    /// Paths were rebuilt; carries the maximum value inside the window.
    Updated { visible_max: i64 },
    /// Nothing changed; the previous paths are still current.
    Retained(RetainReason),
}

impl RecomputeOutcome {
    #[must_use]
    pub const fn visible_max(self) -> Option<i64> {
        match self {
            Self::Updated { visible_max } => Some(visible_max),
            Self::Retained(_) => None,
        }
    }

    #[must_use]
    pub const fn is_updated(self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Screen-space state of one pane.
///
/// The same type serves the main chart and the overview strip; `role` is the
/// only difference. Every geometry-affecting event rebuilds the paths from
/// scratch through [`Viewport::recompute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    role: PaneRole,
    size: PaneSize,
    visible_range: Option<VisibleRange>,
    window: Option<IndexWindow>,
    x_scale: f64,
    y_scale: f64,
    visible_max: i64,
    path_a: Vec<ScreenPoint>,
    path_b: Vec<ScreenPoint>,
}

impl Viewport {
    #[must_use]
    pub fn new(role: PaneRole) -> Self {
        Self {
            role,
            size: PaneSize::default(),
            visible_range: None,
            window: None,
            x_scale: 0.0,
            y_scale: 0.0,
            visible_max: 0,
            path_a: Vec::new(),
            path_b: Vec::new(),
        }
    }

    /// Rebuilds both paths and `visible_max` for `range` on a pane of `size`.
    ///
    /// The window runs from the last sample at or before `range.start()` to
    /// the first sample at or after `range.end()`. The first sample is pinned
    /// to `x = 0` so the path always starts at the pane's left edge.
    ///
    /// An invalid pane or a range outside all data is a no-op: the previous
    /// paths stay current and the outcome says why.
    pub fn recompute(
        &mut self,
        dataset: &Dataset,
        range: VisibleRange,
        size: PaneSize,
        y_scale_override: Option<f64>,
    ) -> RecomputeOutcome {
        if !size.is_valid() {
            return RecomputeOutcome::Retained(RetainReason::InvalidPane);
        }
        let Some(window) = visible_index_window(dataset.times(), range) else {
            return RecomputeOutcome::Retained(RetainReason::EmptyWindow);
        };
        let Some(visible_max) = dataset.window_max(window.from, window.to) else {
            return RecomputeOutcome::Retained(RetainReason::EmptyWindow);
        };

        let projection = PaneProjection::new(range, size, visible_max, y_scale_override);
        project_into(&mut self.path_a, dataset, SeriesId::A, window, projection);
        project_into(&mut self.path_b, dataset, SeriesId::B, window, projection);

        self.size = size;
        self.visible_range = Some(range);
        self.window = Some(window);
        self.x_scale = projection.x_scale();
        self.y_scale = projection.y_scale();
        self.visible_max = visible_max;

        RecomputeOutcome::Updated { visible_max }
    }

    #[must_use]
    pub fn role(&self) -> PaneRole {
        self.role
    }

    #[must_use]
    pub fn size(&self) -> PaneSize {
        self.size
    }

    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.visible_range
    }

    #[must_use]
    pub fn index_window(&self) -> Option<IndexWindow> {
        self.window
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn visible_max(&self) -> i64 {
        self.visible_max
    }

    #[must_use]
    pub fn path(&self, series: SeriesId) -> &[ScreenPoint] {
        match series {
            SeriesId::A => &self.path_a,
            SeriesId::B => &self.path_b,
        }
    }

    #[must_use]
    pub fn paths(&self) -> PanePaths<'_> {
        PanePaths {
            role: self.role,
            size: self.size,
            series_a: &self.path_a,
            series_b: &self.path_b,
        }
    }

    /// `true` once at least one recompute succeeded.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        self.window.is_some()
    }
}

/// Borrowed view of one pane's paths handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanePaths<'a> {
    pub role: PaneRole,
    pub size: PaneSize,
    pub series_a: &'a [ScreenPoint],
    pub series_b: &'a [ScreenPoint],
}

fn project_into(
    out: &mut Vec<ScreenPoint>,
    dataset: &Dataset,
    series: SeriesId,
    window: IndexWindow,
    projection: PaneProjection,
) {
    let times = &dataset.times()[window.indices()];
    let values = &dataset.values(series)[window.indices()];

    out.clear();

    #[cfg(feature = "parallel-projection")]
    {
        times
            .par_iter()
            .zip(values.par_iter())
            .map(|(&time, &value)| projection.project(time, value))
            .collect_into_vec(out);
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        out.extend(
            times
                .iter()
                .zip(values)
                .map(|(&time, &value)| projection.project(time, value)),
        );
    }

    if let Some(first) = out.first_mut() {
        first.x = 0.0;
    }
}
