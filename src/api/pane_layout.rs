use serde::{Deserialize, Serialize};

use crate::core::PaneSize;

use super::ChartControllerConfig;

/// Placement of the two panes inside the widget.
///
/// The main pane is anchored at the widget's top-left corner; the overview
/// strip spans the full width along the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneLayout {
    pub widget: PaneSize,
    pub main: PaneSize,
    pub overview: PaneSize,
    pub overview_top: u32,
}

impl PaneLayout {
    #[must_use]
    pub fn compute(widget: PaneSize, config: &ChartControllerConfig) -> Self {
        let height = f64::from(widget.height);
        let main_height = (height * config.main_pane_ratio).floor() as u32;
        let overview_height = (height * config.overview_pane_ratio).floor() as u32;

        Self {
            widget,
            main: PaneSize::new(widget.width, main_height.min(widget.height)),
            overview: PaneSize::new(widget.width, overview_height.min(widget.height)),
            overview_top: widget.height.saturating_sub(overview_height),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.main.is_valid() && self.overview.is_valid()
    }
}
