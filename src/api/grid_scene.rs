use crate::api::GridStyle;
use crate::core::{AxisRegistry, RadarGeometry};
use crate::error::{RadarError, RadarResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, StrokeStyle, TextHAlign, TextPrimitive, TextVAlign,
};

/// Horizontal anchor threshold on `cos(angle)` for axis labels.
const H_ANCHOR_THRESHOLD: f64 = 0.2;
/// Vertical baseline threshold on `sin(angle)` for axis labels.
const V_ANCHOR_THRESHOLD: f64 = 0.25;

/// Ring label offset relative to the ring's top point, in pixels.
const RING_LABEL_DX: f64 = 6.0;
const RING_LABEL_DY: f64 = -4.0;

/// Static grid scene: concentric rings, spokes, and labels.
///
/// A pure function of axis count and geometry constants, never of any
/// series' values.
#[derive(Debug, Clone, PartialEq)]
pub struct GridScene {
    pub rings: Vec<CirclePrimitive>,
    pub ring_labels: Vec<TextPrimitive>,
    pub spokes: Vec<LinePrimitive>,
    pub axis_labels: Vec<TextPrimitive>,
}

/// Builds the static grid for the given layout.
///
/// One ring and one percent label per step, one spoke per axis from center
/// to the 100% point, and one axis label offset outward by `label_margin_px`
/// with quadrant-dependent anchoring.
pub fn build_grid_scene(
    registry: &AxisRegistry,
    geometry: RadarGeometry,
    ring_steps: &[u8],
    label_margin_px: f64,
    style: &GridStyle,
) -> RadarResult<GridScene> {
    geometry.validate()?;
    style.validate()?;
    if ring_steps.is_empty() {
        return Err(RadarError::InvalidData(
            "grid requires at least one ring step".to_owned(),
        ));
    }
    for step in ring_steps {
        if *step == 0 || *step > 100 {
            return Err(RadarError::InvalidData(format!(
                "ring step {step} outside (0, 100]"
            )));
        }
    }
    if !label_margin_px.is_finite() || label_margin_px < 0.0 {
        return Err(RadarError::InvalidData(
            "label margin must be finite and >= 0".to_owned(),
        ));
    }

    let mut rings = Vec::with_capacity(ring_steps.len());
    let mut ring_labels = Vec::with_capacity(ring_steps.len());
    for step in ring_steps {
        let radius = geometry.ring_radius(*step);
        rings.push(CirclePrimitive::stroked(
            geometry.center_x,
            geometry.center_y,
            radius,
            StrokeStyle::solid(style.ring_color, style.stroke_width),
        ));
        ring_labels.push(TextPrimitive::new(
            format!("{step}%"),
            geometry.center_x + RING_LABEL_DX,
            geometry.center_y - radius + RING_LABEL_DY,
            style.ring_label_font_px,
            style.ring_label_color,
            TextHAlign::Left,
            TextVAlign::Baseline,
        ));
    }

    let mut spokes = Vec::with_capacity(registry.len());
    let mut axis_labels = Vec::with_capacity(registry.len());
    for (index, axis) in registry.iter().enumerate() {
        let angle = registry.angle(index);
        let (sin, cos) = angle.sin_cos();

        spokes.push(LinePrimitive::new(
            geometry.center_x,
            geometry.center_y,
            geometry.center_x + cos * geometry.max_radius,
            geometry.center_y + sin * geometry.max_radius,
            style.stroke_width,
            style.spoke_color,
        ));

        let label_radius = geometry.max_radius + label_margin_px;
        axis_labels.push(TextPrimitive::new(
            axis.label.clone(),
            geometry.center_x + cos * label_radius,
            geometry.center_y + sin * label_radius,
            style.axis_label_font_px,
            style.axis_label_color,
            h_align_for(cos),
            v_align_for(sin),
        ));
    }

    Ok(GridScene {
        rings,
        ring_labels,
        spokes,
        axis_labels,
    })
}

/// Anchor labels away from the plot: start on the right side, end on the
/// left, middle near the vertical axis.
fn h_align_for(cos: f64) -> TextHAlign {
    if cos > H_ANCHOR_THRESHOLD {
        TextHAlign::Left
    } else if cos < -H_ANCHOR_THRESHOLD {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}

fn v_align_for(sin: f64) -> TextVAlign {
    if sin > V_ANCHOR_THRESHOLD {
        TextVAlign::Hanging
    } else if sin < -V_ANCHOR_THRESHOLD {
        TextVAlign::Baseline
    } else {
        TextVAlign::Middle
    }
}
