use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PaneSize, ScreenPoint, SeriesId};
use crate::interaction::{SelectionBand, SelectionState};

/// Serialized view of one pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    pub size: PaneSize,
    pub visible_range: Option<(i64, i64)>,
    pub x_scale: f64,
    pub y_scale: f64,
    pub visible_max: i64,
    pub series_a: Vec<ScreenPoint>,
    pub series_b: Vec<ScreenPoint>,
}

/// Serialized grid ceiling, ticks and offset multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub current_max: i64,
    pub tick_values: Vec<i64>,
    pub outgoing_ticks: Option<Vec<i64>>,
    pub line_spacing: f64,
    pub offset_a_multiplier: f64,
    pub offset_b_multiplier: f64,
}

/// Deterministic controller state used by regression tests and debugging
/// tooling. Never read back into a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub widget: PaneSize,
    pub sample_count: usize,
    pub selection_band: SelectionBand,
    pub selection_state: SelectionState,
    pub main: PaneSnapshot,
    pub overview: PaneSnapshot,
    pub grid: GridSnapshot,
    pub animating: bool,
    /// Series name and color keyed by series id, in series order.
    pub series_metadata: IndexMap<SeriesId, (String, String)>,
}
