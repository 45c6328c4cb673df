//! range-chart: two-series time chart engine with an overview range selector.
//!
//! The crate owns the coordinate math (visible windowing, projection, grid
//! rescaling and its animation) and the overview band gesture state machine.
//! Drawing is delegated to a [`render::Renderer`] that receives a
//! backend-agnostic [`render::RenderFrame`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartController, ChartControllerConfig};
pub use error::{ChartError, ChartResult};
