use crate::core::{Dataset, OffsetCurve, ScreenPoint, SeriesId, Viewport};
use crate::render::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{ChartController, GridTicks};

impl<R: Renderer> ChartController<R> {
    /// Materializes the current controller state into backend primitives.
    ///
    /// Paint order: grid, main series, overview series, band overlay.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.layout.widget);
        if !self.layout.is_valid() {
            return frame;
        }

        self.push_grid(&mut frame);
        if let Some(dataset) = self.dataset.as_ref() {
            self.push_series(
                &mut frame,
                dataset,
                &self.main,
                0.0,
                self.style.main_stroke_width,
            );
            self.push_series(
                &mut frame,
                dataset,
                &self.overview,
                f64::from(self.layout.overview_top),
                self.style.overview_stroke_width,
            );
        }
        self.push_band(&mut frame);
        frame
    }

    fn push_grid(&self, frame: &mut RenderFrame) {
        let ticks = self.current_grid_ticks();
        if !self.grid.is_initialized() || ticks.line_step(ticks.offset_b) <= 0.0 {
            return;
        }
        let curves = self.grid.curves();

        if let Some(outgoing) = ticks.outgoing {
            let alpha = 1.0 - curve_progress(curves.outgoing, self.grid.offset_a_multiplier());
            self.push_grid_lines(frame, &ticks, outgoing, ticks.offset_a, alpha);
        }

        let alpha = curve_progress(curves.incoming, self.grid.offset_b_multiplier());
        self.push_grid_lines(frame, &ticks, ticks.values, ticks.offset_b, alpha);
    }

    fn push_grid_lines(
        &self,
        frame: &mut RenderFrame,
        grid: &GridTicks<'_>,
        values: &[i64],
        offset: f64,
        alpha: f64,
    ) {
        let width = self.layout.widget.width_px();
        let line_color = faded(self.style.grid_line_color, alpha);
        let label_color = faded(self.style.grid_label_color, alpha);

        for (index, tick) in values.iter().enumerate() {
            let y = grid.line_y(offset, index);
            if y < 0.0 {
                break;
            }
            frame.lines.push(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                self.style.grid_stroke_width,
                line_color,
            ));

            let label_y = y - self.style.grid_label_lift_px;
            if label_y >= 0.0 {
                frame.texts.push(TextPrimitive::new(
                    tick.to_string(),
                    self.style.grid_label_inset_x_px,
                    label_y,
                    self.style.grid_label_font_size_px,
                    label_color,
                    TextHAlign::Left,
                ));
            }
        }
    }

    fn push_series(
        &self,
        frame: &mut RenderFrame,
        dataset: &Dataset,
        viewport: &Viewport,
        top: f64,
        stroke_width: f64,
    ) {
        for series in SeriesId::ALL {
            let path = viewport.path(series);
            if path.is_empty() {
                continue;
            }
            let points = path
                .iter()
                .map(|point| ScreenPoint::new(point.x, point.y + top))
                .collect();
            frame.polylines.push(PolylinePrimitive::new(
                points,
                stroke_width,
                self.style.series_color(dataset, series),
            ));
        }
    }

    fn push_band(&self, frame: &mut RenderFrame) {
        let width = self.layout.overview.width_px();
        let top = f64::from(self.layout.overview_top);
        let bottom = top + self.layout.overview.height_px();
        let band = self.selector.band();
        let handle = self.style.band_handle_width_px.min(band.width() / 2.0);
        let bar = self.style.band_bar_height_px;
        let outside = self.style.band_outside_color;
        let framing = self.style.band_frame_color;

        let rects = [
            RectPrimitive::from_edges(0.0, top, band.left, bottom, outside),
            RectPrimitive::from_edges(band.right, top, width, bottom, outside),
            RectPrimitive::from_edges(band.left, top, band.left + handle, bottom, framing),
            RectPrimitive::from_edges(band.right - handle, top, band.right, bottom, framing),
            RectPrimitive::from_edges(
                band.left + handle,
                top,
                band.right - handle,
                top + bar,
                framing,
            ),
            RectPrimitive::from_edges(
                band.left + handle,
                bottom - bar,
                band.right - handle,
                bottom,
                framing,
            ),
        ];
        frame.rects.extend(rects.into_iter().flatten());
    }
}

/// Progress of `value` along `curve`, in `[0, 1]`.
fn curve_progress(curve: OffsetCurve, value: f64) -> f64 {
    let span = curve.to - curve.from;
    if span == 0.0 || !span.is_finite() {
        return 1.0;
    }
    ((value - curve.from) / span).clamp(0.0, 1.0)
}

fn faded(color: Color, alpha: f64) -> Color {
    color.with_alpha((color.alpha * alpha).clamp(0.0, 1.0))
}
