use crate::core::{Dataset, SeriesId};
use crate::error::ChartResult;
use crate::render::Color;

/// Style contract for the current render frame.
///
/// Series colors normally come from the dataset; the fallbacks are used when
/// a dataset color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub series_a_fallback_color: Color,
    pub series_b_fallback_color: Color,
    pub main_stroke_width: f64,
    pub overview_stroke_width: f64,
    pub grid_line_color: Color,
    pub grid_stroke_width: f64,
    pub grid_label_color: Color,
    pub grid_label_font_size_px: f64,
    pub grid_label_inset_x_px: f64,
    pub grid_label_lift_px: f64,
    /// Dimming applied to the overview outside the selection band.
    pub band_outside_color: Color,
    /// Handles and top/bottom bars of the selection band.
    pub band_frame_color: Color,
    pub band_handle_width_px: f64,
    pub band_bar_height_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_a_fallback_color: Color::rgb(0.0, 1.0, 0.0),
            series_b_fallback_color: Color::rgb(1.0, 0.0, 0.0),
            main_stroke_width: 8.0,
            overview_stroke_width: 2.0,
            grid_line_color: Color::rgb(0.639, 0.686, 0.765),
            grid_stroke_width: 1.0,
            grid_label_color: Color::rgb(0.639, 0.686, 0.765),
            grid_label_font_size_px: 14.0,
            grid_label_inset_x_px: 10.0,
            grid_label_lift_px: 20.0,
            band_outside_color: Color::rgba(0.729, 0.831, 0.855, 60.0 / 255.0),
            band_frame_color: Color::rgba(0.533, 0.659, 0.690, 60.0 / 255.0),
            band_handle_width_px: 24.0,
            band_bar_height_px: 4.0,
        }
    }
}

impl RenderStyle {
    /// Resolves the stroke color for `series`, preferring the dataset's own.
    #[must_use]
    pub fn series_color(&self, dataset: &Dataset, series: SeriesId) -> Color {
        let fallback = match series {
            SeriesId::A => self.series_a_fallback_color,
            SeriesId::B => self.series_b_fallback_color,
        };
        Color::from_hex(&dataset.meta(series).color).unwrap_or(fallback)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.series_a_fallback_color,
            self.series_b_fallback_color,
            self.grid_line_color,
            self.grid_label_color,
            self.band_outside_color,
            self.band_frame_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("main_stroke_width", self.main_stroke_width),
            ("overview_stroke_width", self.overview_stroke_width),
            ("grid_stroke_width", self.grid_stroke_width),
            ("grid_label_font_size_px", self.grid_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::error::ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("grid_label_inset_x_px", self.grid_label_inset_x_px),
            ("grid_label_lift_px", self.grid_label_lift_px),
            ("band_handle_width_px", self.band_handle_width_px),
            ("band_bar_height_px", self.band_bar_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::error::ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
