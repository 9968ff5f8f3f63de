use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::AxisRegistry;
use crate::error::{RadarError, RadarResult};

/// Coerces a raw numeric input into an integer percent.
///
/// Non-finite input becomes 0; finite input is rounded to the nearest
/// integer first and clamped to `[0, 100]` second.
#[must_use]
pub fn coerce_percent(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Current integer percent per axis key for one series.
///
/// Every axis key of the owning registry is always present; axis order is
/// the registry's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMap {
    values: IndexMap<String, u8>,
}

impl ValueMap {
    /// Builds a map with every axis of `registry` present at 0.
    #[must_use]
    pub fn zeroed(registry: &AxisRegistry) -> Self {
        let values = registry.iter().map(|axis| (axis.key.clone(), 0)).collect();
        Self { values }
    }

    /// Builds a map over `registry` from `(key, percent)` pairs.
    ///
    /// Keys absent from `pairs` stay at 0; keys absent from the registry are
    /// rejected.
    pub fn from_pairs(registry: &AxisRegistry, pairs: &[(&str, u8)]) -> RadarResult<Self> {
        let mut map = Self::zeroed(registry);
        for (key, percent) in pairs {
            map.set(key, f64::from(*percent))?;
        }
        Ok(map)
    }

    /// Writes a raw value for `key` after round-then-clamp coercion.
    ///
    /// Returns the stored percent.
    pub fn set(&mut self, key: &str, raw: f64) -> RadarResult<u8> {
        let percent = coerce_percent(raw);
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = percent;
                Ok(percent)
            }
            None => Err(RadarError::UnknownAxis(key.to_owned())),
        }
    }

    /// Current percent for `key`; a missing key reads as 0.
    #[must_use]
    pub fn get_or_zero(&self, key: &str) -> u8 {
        self.values.get(key).copied().unwrap_or(0)
    }

    /// Overwrites every key shared with `source` from it.
    pub fn copy_from(&mut self, source: &ValueMap) {
        for (key, percent) in &source.values {
            if let Some(slot) = self.values.get_mut(key) {
                *slot = *percent;
            }
        }
    }

    /// Sets every key to 0.
    pub fn clear_to_zero(&mut self) {
        for slot in self.values.values_mut() {
            *slot = 0;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.values.iter().map(|(key, percent)| (key.as_str(), *percent))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::coerce_percent;

    #[test]
    fn coercion_rounds_before_clamping() {
        assert_eq!(coerce_percent(99.6), 100);
        assert_eq!(coerce_percent(100.4), 100);
        assert_eq!(coerce_percent(-0.4), 0);
        assert_eq!(coerce_percent(42.5), 43);
    }

    #[test]
    fn coercion_is_total_over_non_finite_input() {
        assert_eq!(coerce_percent(f64::NAN), 0);
        assert_eq!(coerce_percent(f64::INFINITY), 0);
        assert_eq!(coerce_percent(f64::NEG_INFINITY), 0);
    }
}
