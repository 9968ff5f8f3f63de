use proptest::prelude::*;
use radar_rs::api::InputPanel;
use radar_rs::core::{AxisRegistry, ValueMap, coerce_percent};

proptest! {
    #[test]
    fn arbitrary_number_entry_always_lands_in_range(raw in ".{0,12}") {
        let registry = AxisRegistry::skill_profile();
        let mut panel = InputPanel::new(&registry, &ValueMap::zeroed(&registry));

        let stored = panel.edit_number("coreTech", &raw).expect("known axis");
        prop_assert!(stored <= 100);

        let pair = panel.pair("coreTech").expect("pair exists");
        prop_assert_eq!(pair.slider(), stored);
        prop_assert_eq!(pair.number(), stored);
        prop_assert_eq!(panel.values().get_or_zero("coreTech"), stored);
    }

    #[test]
    fn coercion_is_total_and_idempotent(raw in prop::num::f64::ANY) {
        let once = coerce_percent(raw);
        prop_assert!(once <= 100);
        prop_assert_eq!(coerce_percent(f64::from(once)), once);
    }

    #[test]
    fn in_range_integer_text_round_trips_exactly(v in 0u8..=100) {
        let registry = AxisRegistry::skill_profile();
        let mut panel = InputPanel::new(&registry, &ValueMap::zeroed(&registry));

        let stored = panel.edit_number("uiux", &v.to_string()).expect("known axis");
        prop_assert_eq!(stored, v);

        let stored = panel.edit_slider("uiux", v).expect("known axis");
        prop_assert_eq!(stored, v);
        prop_assert_eq!(panel.pair("uiux").expect("pair").number(), v);
    }
}
