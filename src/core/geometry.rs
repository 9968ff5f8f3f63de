use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisRegistry, ValueMap};
use crate::error::{RadarError, RadarResult};

/// Fixed polar layout for one radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub max_radius: f64,
}

impl RadarGeometry {
    pub fn new(center_x: f64, center_y: f64, max_radius: f64) -> RadarResult<Self> {
        let geometry = Self {
            center_x,
            center_y,
            max_radius,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(RadarError::InvalidData(
                "radar center must be finite".to_owned(),
            ));
        }
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(RadarError::InvalidData(
                "radar max radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Radius of the ring marking `step` percent.
    #[must_use]
    pub fn ring_radius(self, step: u8) -> f64 {
        f64::from(step) / 100.0 * self.max_radius
    }
}

/// One polygon vertex derived from an axis value.
///
/// Ephemeral: recomputed from the value map on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
    pub percent: u8,
}

/// Rounds to 2 decimal places for rendering stability.
#[must_use]
pub fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps a value map onto polygon vertices, one per axis in registry order.
///
/// The radial offset `(cos * length, sin * length)` is rounded to 2 decimal
/// places before the center translation is applied. Pure and deterministic,
/// so benchmark and user series project independently from the same layout.
#[must_use]
pub fn compute_points(
    registry: &AxisRegistry,
    values: &ValueMap,
    geometry: RadarGeometry,
) -> SmallVec<[RadarPoint; 8]> {
    registry
        .iter()
        .enumerate()
        .map(|(index, axis)| {
            let percent = values.get_or_zero(&axis.key);
            let angle = registry.angle(index);
            let length = f64::from(percent) / 100.0 * geometry.max_radius;
            RadarPoint {
                x: geometry.center_x + round_to_2dp(angle.cos() * length),
                y: geometry.center_y + round_to_2dp(angle.sin() * length),
                percent,
            }
        })
        .collect()
}
