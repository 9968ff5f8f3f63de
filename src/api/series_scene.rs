use smallvec::SmallVec;

use crate::api::SeriesStyle;
use crate::core::{AxisRegistry, RadarPoint};
use crate::error::{RadarError, RadarResult};
use crate::render::{CirclePrimitive, PolygonPrimitive, SeriesSlot, StrokeStyle};

/// One series' draw pass: closed outline polygon, vertex markers, and the
/// tooltip text carried by each marker.
///
/// Rebuilt in full on every render; the engine replaces the series' layers
/// rather than diffing them. Tooltips are host-facing text only, matching
/// marker order; no backend paints them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesScene {
    pub slot: SeriesSlot,
    pub outline: PolygonPrimitive,
    pub markers: Vec<CirclePrimitive>,
    pub tooltips: Vec<String>,
}

/// Builds one series scene from already-projected points.
///
/// `points` must match the registry's axis order; tooltip text reads
/// `"<axis label>: <percent>%"`, with a `Benchmark` prefix for the
/// benchmark series.
pub fn build_series_scene(
    registry: &AxisRegistry,
    points: &[RadarPoint],
    style: &SeriesStyle,
    slot: SeriesSlot,
) -> RadarResult<SeriesScene> {
    style.validate()?;
    if points.len() != registry.len() {
        return Err(RadarError::InvalidData(format!(
            "series has {} points for {} axes",
            points.len(),
            registry.len()
        )));
    }

    let vertices: SmallVec<[(f64, f64); 8]> =
        points.iter().map(|point| (point.x, point.y)).collect();
    let mut outline = PolygonPrimitive::new(vertices);
    if let Some(fill) = style.fill {
        outline = outline.with_fill(fill);
    }
    let stroke = match style.outline_dash {
        Some(dash) => StrokeStyle::dashed(style.outline_color, style.outline_width, dash),
        None => StrokeStyle::solid(style.outline_color, style.outline_width),
    };
    outline = outline.with_stroke(stroke);

    let mut markers = Vec::with_capacity(points.len());
    let mut tooltips = Vec::with_capacity(points.len());
    for (axis, point) in registry.iter().zip(points) {
        let mut marker =
            CirclePrimitive::filled(point.x, point.y, style.marker_radius, style.marker_fill);
        if let Some(stroke_color) = style.marker_stroke {
            marker = marker.with_stroke(StrokeStyle::solid(
                stroke_color,
                style.marker_stroke_width,
            ));
        }
        markers.push(marker);

        let tooltip = match slot {
            SeriesSlot::User => format!("{}: {}%", axis.label, point.percent),
            SeriesSlot::Benchmark => {
                format!("Benchmark — {}: {}%", axis.label, point.percent)
            }
        };
        tooltips.push(tooltip);
    }

    Ok(SeriesScene {
        slot,
        outline,
        markers,
        tooltips,
    })
}
