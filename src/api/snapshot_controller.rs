use indexmap::IndexMap;

use crate::core::{SeriesId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartController, ChartSnapshot, GridSnapshot, PaneSnapshot};

impl<R: Renderer> ChartController<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let series_metadata: IndexMap<SeriesId, (String, String)> = self
            .dataset
            .as_ref()
            .map(|dataset| {
                SeriesId::ALL
                    .into_iter()
                    .map(|series| {
                        let meta = dataset.meta(series);
                        (series, (meta.name.clone(), meta.color.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        ChartSnapshot {
            widget: self.layout.widget,
            sample_count: self.dataset.as_ref().map_or(0, |dataset| dataset.len()),
            selection_band: self.selector.band(),
            selection_state: self.selector.state(),
            main: pane_snapshot(&self.main),
            overview: pane_snapshot(&self.overview),
            grid: GridSnapshot {
                current_max: self.grid.current_max(),
                tick_values: self.grid.tick_values().to_vec(),
                outgoing_ticks: self.grid.outgoing_ticks().map(<[i64]>::to_vec),
                line_spacing: self.grid.line_spacing(),
                offset_a_multiplier: self.grid.offset_a_multiplier(),
                offset_b_multiplier: self.grid.offset_b_multiplier(),
            },
            animating: !self.animator.is_idle(),
            series_metadata,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}

fn pane_snapshot(viewport: &Viewport) -> PaneSnapshot {
    PaneSnapshot {
        size: viewport.size(),
        visible_range: viewport
            .visible_range()
            .map(|range| (range.start(), range.end())),
        x_scale: viewport.x_scale(),
        y_scale: viewport.y_scale(),
        visible_max: viewport.visible_max(),
        series_a: viewport.path(SeriesId::A).to_vec(),
        series_b: viewport.path(SeriesId::B).to_vec(),
    }
}
