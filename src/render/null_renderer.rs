use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every frame, so tests catch non-finite geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_polyline_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
