use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off dash lengths in pixels for dashed strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on_px: f64,
    pub off_px: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(on_px: f64, off_px: f64) -> Self {
        Self { on_px, off_px }
    }

    pub fn validate(self) -> RadarResult<()> {
        for (name, value) in [("on_px", self.on_px), ("off_px", self.off_px)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RadarError::InvalidData(format!(
                    "dash segment `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke settings shared by circle and polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    #[must_use]
    pub const fn dashed(color: Color, width: f64, dash: DashPattern) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(RadarError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            dash.validate()?;
        }
        self.color.validate()
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

    pub fn validate(self) -> RadarResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(RadarError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one circle in pixel space.
///
/// Rings use stroke only; vertex markers use fill with an optional stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn stroked(cx: f64, cy: f64, radius: f64, stroke: StrokeStyle) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: None,
            stroke: Some(stroke),
        }
    }

    #[must_use]
    pub const fn filled(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: Some(fill),
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(RadarError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RadarError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(RadarError::InvalidData(
                "circle must carry a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one closed polygon in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[(f64, f64); 8]>,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: SmallVec<[(f64, f64); 8]>) -> Self {
        Self {
            points,
            fill: None,
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.points.len() < 3 {
            return Err(RadarError::InvalidData(
                "polygon requires at least 3 points".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            if !x.is_finite() || !y.is_finite() {
                return Err(RadarError::InvalidData(
                    "polygon coordinates must be finite".to_owned(),
                ));
            }
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(RadarError::InvalidData(
                "polygon must carry a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    /// Text hangs below the anchor.
    Hanging,
    Middle,
    /// Anchor sits on the text baseline.
    Baseline,
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
    pub v_align: TextVAlign,
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
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RadarError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(RadarError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
