use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartController, InvalidationTopics};

impl<R: Renderer> ChartController<R> {
    /// Builds the current frame, hands it to the renderer and clears pending
    /// invalidation.
    ///
    /// Invalidation is kept when the renderer rejects the frame so the host
    /// can retry.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        trace!(
            lines = frame.lines.len(),
            polylines = frame.polylines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)?;
        self.invalidation = InvalidationTopics::none();
        Ok(())
    }
}
