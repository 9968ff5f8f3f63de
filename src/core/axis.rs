use std::f64::consts::{FRAC_PI_2, PI};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// One named skill dimension plotted radially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub key: String,
    pub label: String,
    pub description: String,
}

impl Axis {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable set of chart axes.
///
/// Insertion order is angular order: axis 0 points straight up and
/// subsequent axes proceed clockwise in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRegistry {
    axes: IndexMap<String, Axis>,
}

impl AxisRegistry {
    /// Builds a registry from an ordered axis list.
    ///
    /// Requires at least 3 axes (a radar polygon needs three vertices) and
    /// unique keys.
    pub fn new(axes: Vec<Axis>) -> RadarResult<Self> {
        if axes.len() < 3 {
            return Err(RadarError::InvalidData(
                "axis registry requires at least 3 axes".to_owned(),
            ));
        }

        let mut map = IndexMap::with_capacity(axes.len());
        for axis in axes {
            if map.insert(axis.key.clone(), axis).is_some() {
                return Err(RadarError::InvalidData(
                    "axis keys must be unique within the registry".to_owned(),
                ));
            }
        }
        Ok(Self { axes: map })
    }

    /// The built-in six-axis frontend skill profile.
    #[must_use]
    pub fn skill_profile() -> Self {
        let axes = [
            Axis::new("coreTech", "Core Technical Skills", "HTML, CSS, JavaScript"),
            Axis::new("frameworks", "Frameworks & Tooling", "React, Next.js, Git"),
            Axis::new("uiux", "UI/UX & Design Mindset", "Accessibility, Figma"),
            Axis::new("power", "Power Skills (Soft Skills)", "Communication, teamwork"),
            Axis::new(
                "emerging",
                "Emerging Technologies & Trends",
                "AI, Performance, Headless CMS",
            ),
            Axis::new(
                "practices",
                "Professional Growth & Practices",
                "Testing, CI/CD, Version control",
            ),
        ];
        let mut map = IndexMap::with_capacity(axes.len());
        for axis in axes {
            map.insert(axis.key.clone(), axis);
        }
        Self { axes: map }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Axis> {
        self.axes.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.axes.contains_key(key)
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.axes.get_index_of(key)
    }

    /// Angular position of the axis at `index`, in radians.
    ///
    /// `-PI/2 + index * 2*PI/len`: axis 0 points straight up, later axes
    /// proceed clockwise (screen y grows downward).
    #[must_use]
    pub fn angle(&self, index: usize) -> f64 {
        -FRAC_PI_2 + 2.0 * PI * index as f64 / self.axes.len() as f64
    }
}
