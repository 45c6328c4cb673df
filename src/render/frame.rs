use crate::core::PaneSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass, in widget pixels.
///
/// Primitives are listed in paint order per kind: grid lines, then series
/// polylines, then overview rects, then labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: PaneSize,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: PaneSize) -> Self {
        Self {
            size,
            lines: Vec::new(),
            polylines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.size.width,
                height: self.size.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }
}
