use crate::core::ScreenPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` (the form data feeds use for series
    /// colors).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let channel = |index: usize| -> ChartResult<f64> {
            digits
                .get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|value| f64::from(value) / 255.0)
                .ok_or_else(|| ChartError::InvalidConfig(format!("invalid hex color `{input}`")))
        };

        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(2)?, channel(4)?, channel(6)?, channel(0)?)),
            _ => Err(ChartError::InvalidConfig(format!(
                "invalid hex color `{input}`"
            ))),
        }
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke(self.stroke_width)?;
        self.color.validate()
    }
}

/// Draw command for one connected series path in pixel space.
///
/// Smoothing and joins are left to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<ScreenPoint>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<ScreenPoint>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        validate_stroke(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    /// Builds a rect from edges; `None` when it would have no area.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64, fill: Color) -> Option<Self> {
        (right > left && bottom > top)
            .then(|| Self::new(left, top, right - left, bottom - top, fill))
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
