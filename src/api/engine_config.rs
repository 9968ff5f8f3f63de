use serde::{Deserialize, Serialize};

use crate::api::{GridStyle, SeriesStyle};
use crate::core::{RadarGeometry, Viewport};
use crate::error::{RadarError, RadarResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarEngineConfig {
    pub viewport: Viewport,
    /// Plot center; defaults to the viewport center when absent.
    #[serde(default)]
    pub center: Option<(f64, f64)>,
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    #[serde(default = "default_ring_steps")]
    pub ring_steps: Vec<u8>,
    #[serde(default = "default_label_margin_px")]
    pub label_margin_px: f64,
    #[serde(default)]
    pub grid_style: GridStyle,
    #[serde(default = "SeriesStyle::benchmark_default")]
    pub benchmark_style: SeriesStyle,
    #[serde(default = "SeriesStyle::user_default")]
    pub user_style: SeriesStyle,
}

impl RadarEngineConfig {
    /// Creates a config with the original widget's layout defaults.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            center: None,
            max_radius: default_max_radius(),
            ring_steps: default_ring_steps(),
            label_margin_px: default_label_margin_px(),
            grid_style: GridStyle::default(),
            benchmark_style: SeriesStyle::benchmark_default(),
            user_style: SeriesStyle::user_default(),
        }
    }

    /// Sets an explicit plot center.
    #[must_use]
    pub fn with_center(mut self, center_x: f64, center_y: f64) -> Self {
        self.center = Some((center_x, center_y));
        self
    }

    /// Sets the 100% radius in pixels.
    #[must_use]
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Sets the percent steps drawn as grid rings.
    #[must_use]
    pub fn with_ring_steps(mut self, ring_steps: Vec<u8>) -> Self {
        self.ring_steps = ring_steps;
        self
    }

    /// Sets the outward axis-label offset in pixels.
    #[must_use]
    pub fn with_label_margin_px(mut self, label_margin_px: f64) -> Self {
        self.label_margin_px = label_margin_px;
        self
    }

    /// Sets the grid visual treatment.
    #[must_use]
    pub fn with_grid_style(mut self, grid_style: GridStyle) -> Self {
        self.grid_style = grid_style;
        self
    }

    /// Sets the benchmark series visual treatment.
    #[must_use]
    pub fn with_benchmark_style(mut self, benchmark_style: SeriesStyle) -> Self {
        self.benchmark_style = benchmark_style;
        self
    }

    /// Sets the user series visual treatment.
    #[must_use]
    pub fn with_user_style(mut self, user_style: SeriesStyle) -> Self {
        self.user_style = user_style;
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        if !self.viewport.is_valid() {
            return Err(RadarError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.ring_steps.is_empty() {
            return Err(RadarError::InvalidData(
                "config requires at least one ring step".to_owned(),
            ));
        }
        for step in &self.ring_steps {
            if *step == 0 || *step > 100 {
                return Err(RadarError::InvalidData(format!(
                    "ring step {step} outside (0, 100]"
                )));
            }
        }
        if !self.label_margin_px.is_finite() || self.label_margin_px < 0.0 {
            return Err(RadarError::InvalidData(
                "label margin must be finite and >= 0".to_owned(),
            ));
        }
        self.grid_style.validate()?;
        self.benchmark_style.validate()?;
        self.user_style.validate()?;
        self.geometry().map(|_| ())
    }

    /// Resolved polar layout: explicit center, or the viewport center.
    pub fn geometry(&self) -> RadarResult<RadarGeometry> {
        let (center_x, center_y) = self.center.unwrap_or((
            f64::from(self.viewport.width) / 2.0,
            f64::from(self.viewport.height) / 2.0,
        ));
        RadarGeometry::new(center_x, center_y, self.max_radius)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_max_radius() -> f64 {
    180.0
}

fn default_ring_steps() -> Vec<u8> {
    vec![25, 50, 75, 100]
}

fn default_label_margin_px() -> f64 {
    28.0
}
