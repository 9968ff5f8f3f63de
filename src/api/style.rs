use serde::{Deserialize, Serialize};

use crate::error::RadarResult;
use crate::render::{Color, DashPattern};

/// Visual treatment of the static grid: rings, spokes, and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub ring_color: Color,
    pub spoke_color: Color,
    pub stroke_width: f64,
    pub ring_label_color: Color,
    pub ring_label_font_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_px: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            ring_color: Color::rgba(0.0, 0.0, 0.0, 0.06),
            spoke_color: Color::rgba(0.0, 0.0, 0.0, 0.06),
            stroke_width: 1.0,
            ring_label_color: Color::rgba(0.063, 0.094, 0.157, 0.45),
            ring_label_font_px: 10.0,
            axis_label_color: Color::rgba(0.063, 0.094, 0.157, 0.9),
            axis_label_font_px: 11.0,
        }
    }
}

impl GridStyle {
    pub fn validate(self) -> RadarResult<()> {
        self.ring_color.validate()?;
        self.spoke_color.validate()?;
        self.ring_label_color.validate()?;
        self.axis_label_color.validate()?;
        validate_positive(self.stroke_width, "grid stroke width")?;
        validate_positive(self.ring_label_font_px, "ring label font size")?;
        validate_positive(self.axis_label_font_px, "axis label font size")
    }
}

/// Visual treatment of one series polygon and its vertex markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub outline_color: Color,
    pub outline_width: f64,
    pub outline_dash: Option<DashPattern>,
    pub fill: Option<Color>,
    pub marker_radius: f64,
    pub marker_fill: Color,
    pub marker_stroke: Option<Color>,
    pub marker_stroke_width: f64,
}

impl SeriesStyle {
    /// Muted, dashed secondary treatment for the benchmark polygon.
    #[must_use]
    pub fn benchmark_default() -> Self {
        Self {
            outline_color: Color::rgba(0.043, 0.514, 0.502, 0.9),
            outline_width: 1.5,
            outline_dash: Some(DashPattern::new(6.0, 4.0)),
            fill: Some(Color::rgba(0.043, 0.514, 0.502, 0.08)),
            marker_radius: 3.0,
            marker_fill: Color::rgba(0.043, 0.514, 0.502, 0.9),
            marker_stroke: None,
            marker_stroke_width: 1.0,
        }
    }

    /// Prominent, solid primary treatment for the user polygon.
    #[must_use]
    pub fn user_default() -> Self {
        Self {
            outline_color: Color::rgba(0.078, 0.722, 0.651, 0.9),
            outline_width: 2.0,
            outline_dash: None,
            fill: Some(Color::rgba(0.078, 0.722, 0.651, 0.18)),
            marker_radius: 4.0,
            marker_fill: Color::rgb(1.0, 1.0, 1.0),
            marker_stroke: Some(Color::rgba(0.078, 0.722, 0.651, 0.9)),
            marker_stroke_width: 1.5,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        self.outline_color.validate()?;
        self.marker_fill.validate()?;
        if let Some(dash) = self.outline_dash {
            dash.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.marker_stroke {
            stroke.validate()?;
            validate_positive(self.marker_stroke_width, "marker stroke width")?;
        }
        validate_positive(self.outline_width, "series outline width")?;
        validate_positive(self.marker_radius, "marker radius")
    }
}

fn validate_positive(value: f64, name: &str) -> RadarResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(crate::error::RadarError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
