mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from the coordinate engine and gesture handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
