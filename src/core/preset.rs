use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRegistry, ValueMap};
use crate::error::{RadarError, RadarResult};

/// A named, immutable benchmark template for one role archetype.
///
/// Applying a preset copies its values into the active benchmark map; the
/// preset itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    name: String,
    values: ValueMap,
}

impl Preset {
    #[must_use]
    pub fn new(name: impl Into<String>, values: ValueMap) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &ValueMap {
        &self.values
    }
}

/// Named preset collection with a designated default.
///
/// `resolve` is total: an unknown role name falls back to the default
/// preset, so there is always a benchmark to show.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRegistry {
    presets: IndexMap<String, Preset>,
    default_name: String,
}

impl PresetRegistry {
    pub fn new(presets: Vec<Preset>, default_name: &str) -> RadarResult<Self> {
        let mut map = IndexMap::with_capacity(presets.len());
        for preset in presets {
            if map.insert(preset.name.clone(), preset).is_some() {
                return Err(RadarError::InvalidData(
                    "preset names must be unique within the registry".to_owned(),
                ));
            }
        }
        if !map.contains_key(default_name) {
            return Err(RadarError::InvalidData(format!(
                "default preset `{default_name}` is not registered"
            )));
        }
        Ok(Self {
            presets: map,
            default_name: default_name.to_owned(),
        })
    }

    /// The built-in role benchmarks over the skill-profile registry.
    pub fn role_benchmarks(registry: &AxisRegistry) -> RadarResult<Self> {
        let generalist = ValueMap::from_pairs(
            registry,
            &[
                ("coreTech", 85),
                ("frameworks", 80),
                ("uiux", 70),
                ("power", 80),
                ("emerging", 65),
                ("practices", 75),
            ],
        )?;
        let uiux = ValueMap::from_pairs(
            registry,
            &[
                ("coreTech", 70),
                ("frameworks", 65),
                ("uiux", 95),
                ("power", 80),
                ("emerging", 50),
                ("practices", 70),
            ],
        )?;
        let ai = ValueMap::from_pairs(
            registry,
            &[
                ("coreTech", 80),
                ("frameworks", 85),
                ("uiux", 65),
                ("power", 75),
                ("emerging", 95),
                ("practices", 80),
            ],
        )?;
        let startup = ValueMap::from_pairs(
            registry,
            &[
                ("coreTech", 75),
                ("frameworks", 80),
                ("uiux", 75),
                ("power", 90),
                ("emerging", 85),
                ("practices", 90),
            ],
        )?;

        Self::new(
            vec![
                Preset::new("generalist", generalist),
                Preset::new("uiux", uiux),
                Preset::new("ai", ai),
                Preset::new("startup", startup),
            ],
            "generalist",
        )
    }

    /// The balanced starting profile for the user series.
    pub fn user_defaults(registry: &AxisRegistry) -> RadarResult<ValueMap> {
        ValueMap::from_pairs(
            registry,
            &[
                ("coreTech", 70),
                ("frameworks", 65),
                ("uiux", 60),
                ("power", 60),
                ("emerging", 40),
                ("practices", 55),
            ],
        )
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Returns the named preset, or the default preset when `name` is not
    /// registered.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Preset {
        self.presets
            .get(name)
            .unwrap_or_else(|| &self.presets[&self.default_name])
    }

    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}
