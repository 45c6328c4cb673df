pub mod dataset;
pub mod grid;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod viewport;
pub mod visible_range;
pub mod windowing;

pub use dataset::{Dataset, DatasetBuilder, DatasetSource, SeriesId, SeriesMeta};
pub use grid::{
    GRID_TICK_COUNT, GridModel, GridOffsetCurves, OffsetCurve, RescaleBounds, TickValues,
    tick_values_for,
};
pub use scale::{PaneProjection, fitted_y_scale};
pub use types::{PaneRole, PaneSize, ScreenPoint};
pub use viewport::{PanePaths, RecomputeOutcome, RetainReason, Viewport};
pub use visible_range::VisibleRange;
pub use windowing::{IndexWindow, visible_index_window};
