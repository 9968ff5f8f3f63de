use indexmap::IndexMap;

use crate::core::{AxisRegistry, ValueMap, coerce_percent};
use crate::error::{RadarError, RadarResult};

/// Linked slider/number control pair for one axis.
///
/// Both controls always display the same clamped integer. Slider edits are
/// in range by construction of the control; number edits go through parse,
/// coerce, and clamp, and the corrected value is written back to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisControlPair {
    slider: u8,
    number: u8,
}

impl AxisControlPair {
    #[must_use]
    pub fn new(initial: u8) -> Self {
        let value = initial.min(100);
        Self {
            slider: value,
            number: value,
        }
    }

    /// Value both controls currently display.
    #[must_use]
    pub fn value(self) -> u8 {
        debug_assert_eq!(self.slider, self.number);
        self.slider
    }

    #[must_use]
    pub fn slider(self) -> u8 {
        self.slider
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.number
    }

    /// Copies a slider edit verbatim into the numeric control.
    pub fn apply_slider_edit(&mut self, value: u8) -> u8 {
        let value = value.min(100);
        self.slider = value;
        self.number = value;
        value
    }

    /// Parses a numeric-field edit; empty or non-numeric input is 0,
    /// decimals round to the nearest integer, the result is clamped to
    /// `[0, 100]`, and both controls self-correct.
    pub fn apply_number_edit(&mut self, raw: &str) -> u8 {
        let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
        let value = coerce_percent(parsed);
        self.slider = value;
        self.number = value;
        value
    }

    fn force(&mut self, value: u8) {
        let value = value.min(100);
        self.slider = value;
        self.number = value;
    }
}

/// All control pairs for the user series, kept consistent with the user
/// value map.
///
/// The map is updated before the caller re-renders, so a render never
/// observes a control/value mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPanel {
    pairs: IndexMap<String, AxisControlPair>,
    values: ValueMap,
}

impl InputPanel {
    /// One control pair per axis, seeded from `initial`.
    #[must_use]
    pub fn new(registry: &AxisRegistry, initial: &ValueMap) -> Self {
        let mut values = ValueMap::zeroed(registry);
        values.copy_from(initial);
        let pairs = registry
            .iter()
            .map(|axis| {
                (
                    axis.key.clone(),
                    AxisControlPair::new(values.get_or_zero(&axis.key)),
                )
            })
            .collect();
        Self { pairs, values }
    }

    /// Handles an edit event on the continuous control.
    pub fn edit_slider(&mut self, key: &str, value: u8) -> RadarResult<u8> {
        let pair = self
            .pairs
            .get_mut(key)
            .ok_or_else(|| RadarError::UnknownAxis(key.to_owned()))?;
        let value = pair.apply_slider_edit(value);
        self.values.set(key, f64::from(value))?;
        Ok(value)
    }

    /// Handles an edit event on the discrete numeric control.
    pub fn edit_number(&mut self, key: &str, raw: &str) -> RadarResult<u8> {
        let pair = self
            .pairs
            .get_mut(key)
            .ok_or_else(|| RadarError::UnknownAxis(key.to_owned()))?;
        let value = pair.apply_number_edit(raw);
        self.values.set(key, f64::from(value))?;
        Ok(value)
    }

    /// Writes a raw numeric value through round-then-clamp coercion,
    /// updating both controls.
    pub fn set_value(&mut self, key: &str, raw: f64) -> RadarResult<u8> {
        let pair = self
            .pairs
            .get_mut(key)
            .ok_or_else(|| RadarError::UnknownAxis(key.to_owned()))?;
        let value = coerce_percent(raw);
        pair.force(value);
        self.values.set(key, f64::from(value))?;
        Ok(value)
    }

    /// Overwrites every control and the value map from `source`.
    pub fn set_all(&mut self, source: &ValueMap) {
        self.values.copy_from(source);
        for (key, pair) in &mut self.pairs {
            pair.force(self.values.get_or_zero(key));
        }
    }

    /// Backs the reset action: every control and value to 0.
    pub fn reset_to_zero(&mut self) {
        self.values.clear_to_zero();
        for pair in self.pairs.values_mut() {
            pair.force(0);
        }
    }

    #[must_use]
    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    #[must_use]
    pub fn pair(&self, key: &str) -> Option<AxisControlPair> {
        self.pairs.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::AxisControlPair;

    #[test]
    fn number_edit_parses_sign_and_whitespace() {
        let mut pair = AxisControlPair::new(50);
        assert_eq!(pair.apply_number_edit(" +42 "), 42);
        assert_eq!(pair.apply_number_edit("-5"), 0);
    }

    #[test]
    fn number_edit_rounds_decimal_entry() {
        let mut pair = AxisControlPair::new(0);
        assert_eq!(pair.apply_number_edit("12.5"), 13);
        assert_eq!(pair.apply_number_edit("99.4"), 99);
        assert_eq!(pair.apply_number_edit("100.6"), 100);
    }

    #[test]
    fn slider_edit_caps_at_100() {
        let mut pair = AxisControlPair::new(0);
        assert_eq!(pair.apply_slider_edit(250), 100);
        assert_eq!(pair.number(), 100);
    }
}
