mod chart_snapshot;
mod controller;
mod controller_config;
mod input_controller;
mod invalidation;
mod pane_layout;
mod render_coordinator;
mod render_frame_builder;
mod render_style;
mod rescale_coordinator;
mod snapshot_controller;

pub use chart_snapshot::{ChartSnapshot, GridSnapshot, PaneSnapshot};
pub use controller::{ChartController, GridTicks};
pub use controller_config::ChartControllerConfig;
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use pane_layout::PaneLayout;
pub use render_style::RenderStyle;
