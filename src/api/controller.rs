use tracing::debug;

use crate::animation::RescaleAnimator;
use crate::core::{
    Dataset, DatasetSource, GridModel, PaneRole, PanePaths, PaneSize, VisibleRange, Viewport,
};
use crate::error::ChartResult;
use crate::interaction::{RangeSelector, SelectionBand, SelectionState};
use crate::render::Renderer;

use super::{ChartControllerConfig, InvalidationTopics, PaneLayout, RenderStyle};

/// Grid state handed to the rendering collaborator.
///
/// Offsets are pixels: the animated multiplier times `pane_height`. Line `i`
/// of a tick list sits at `pane_height - i * line_spacing * offset / pane_height`
/// (see [`GridTicks::line_y`]), so a resting incoming offset of one pane
/// height spaces lines exactly `line_spacing` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTicks<'a> {
    /// Six tick values of the current ceiling.
    pub values: &'a [i64],
    /// Ticks of the previous ceiling while they slide out.
    pub outgoing: Option<&'a [i64]>,
    /// Outgoing line offset in pixels.
    pub offset_a: f64,
    /// Incoming line offset in pixels.
    pub offset_b: f64,
    pub line_spacing: f64,
    pub pane_height: f64,
}

impl GridTicks<'_> {
    /// Distance between neighbouring lines displaced by `offset`.
    #[must_use]
    pub fn line_step(&self, offset: f64) -> f64 {
        if self.pane_height <= 0.0 {
            return 0.0;
        }
        self.line_spacing * (offset / self.pane_height)
    }

    /// Pixel y of line `index` displaced by `offset`.
    #[must_use]
    pub fn line_y(&self, offset: f64, index: usize) -> f64 {
        self.pane_height - index as f64 * self.line_step(offset)
    }
}

/// Composition root consumed by host applications.
///
/// Owns the dataset, both viewports, the grid, the selection band and the
/// running rescale animations. All inputs are synchronous method calls:
/// `load_dataset`, `resize`, pointer events and `tick`. Hosts delivering
/// callbacks from several threads wrap the controller in a single mutex.
pub struct ChartController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartControllerConfig,
    pub(super) style: RenderStyle,
    pub(super) dataset: Option<Dataset>,
    pub(super) layout: PaneLayout,
    pub(super) main: Viewport,
    pub(super) overview: Viewport,
    pub(super) grid: GridModel,
    pub(super) selector: RangeSelector,
    pub(super) animator: RescaleAnimator,
    pub(super) invalidation: InvalidationTopics,
}

impl<R: Renderer> ChartController<R> {
    pub fn new(renderer: R, config: ChartControllerConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            grid: GridModel::new(config.rescale_bounds, config.grid_offsets),
            selector: RangeSelector::new(
                config.initial_band_px,
                config.touch_delta_px,
                config.min_band_width_px,
            ),
            config,
            style: RenderStyle::default(),
            dataset: None,
            layout: PaneLayout::default(),
            main: Viewport::new(PaneRole::Main),
            overview: Viewport::new(PaneRole::Overview),
            animator: RescaleAnimator::new(),
            invalidation: InvalidationTopics::none(),
        })
    }

    /// Validates a loader record and installs it.
    pub fn load_source(&mut self, source: DatasetSource) -> ChartResult<()> {
        let dataset = Dataset::new(source)?;
        self.load_dataset(dataset);
        Ok(())
    }

    /// Installs a dataset, resetting grid, animations and any active drag.
    ///
    /// The selection band keeps its pixel position. Geometry is computed
    /// immediately when the widget already has a size.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        debug!(
            samples = dataset.len(),
            min_time = dataset.min_time(),
            max_time = dataset.max_time(),
            global_max = dataset.global_max(),
            "load dataset"
        );
        self.dataset = Some(dataset);
        self.animator.clear();
        self.grid = GridModel::new(self.config.rescale_bounds, self.config.grid_offsets);
        self.grid.set_pane_height(self.layout.main.height);
        self.main = Viewport::new(PaneRole::Main);
        self.overview = Viewport::new(PaneRole::Overview);
        self.selector.pointer_cancel();
        self.relayout();
        self.invalidate_all();
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> ChartControllerConfig {
        self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        self.invalidate_all();
        Ok(())
    }

    #[must_use]
    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    #[must_use]
    pub fn widget_size(&self) -> PaneSize {
        self.layout.widget
    }

    #[must_use]
    pub fn main_viewport(&self) -> &Viewport {
        &self.main
    }

    #[must_use]
    pub fn overview_viewport(&self) -> &Viewport {
        &self.overview
    }

    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[must_use]
    pub fn animator(&self) -> &RescaleAnimator {
        &self.animator
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selector.state()
    }

    #[must_use]
    pub fn selection_band(&self) -> SelectionBand {
        self.selector.band()
    }

    /// Time window currently shown by the main pane.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.main.visible_range()
    }

    #[must_use]
    pub fn current_main_paths(&self) -> PanePaths<'_> {
        self.main.paths()
    }

    #[must_use]
    pub fn current_overview_paths(&self) -> PanePaths<'_> {
        self.overview.paths()
    }

    #[must_use]
    pub fn current_grid_ticks(&self) -> GridTicks<'_> {
        GridTicks {
            values: self.grid.tick_values(),
            outgoing: self.grid.outgoing_ticks(),
            offset_a: self.grid.offset_a(),
            offset_b: self.grid.offset_b(),
            line_spacing: self.grid.line_spacing(),
            pane_height: self.grid.pane_height(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
