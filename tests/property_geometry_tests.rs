use proptest::prelude::*;
use radar_rs::core::{Axis, AxisRegistry, RadarGeometry, ValueMap, compute_points};

fn registry_of(n: usize) -> AxisRegistry {
    let axes = (0..n)
        .map(|i| Axis::new(format!("axis{i}"), format!("Axis {i}"), ""))
        .collect();
    AxisRegistry::new(axes).expect("generated registry is valid")
}

proptest! {
    #[test]
    fn every_axis_yields_one_point_within_the_radius(
        percents in prop::collection::vec(0u8..=100, 3..=12),
        max_radius in 10.0f64..1000.0,
    ) {
        let registry = registry_of(percents.len());
        let geometry = RadarGeometry::new(250.0, 250.0, max_radius).expect("valid geometry");
        let mut values = ValueMap::zeroed(&registry);
        for (i, percent) in percents.iter().enumerate() {
            values.set(&format!("axis{i}"), f64::from(*percent)).expect("known axis");
        }

        let points = compute_points(&registry, &values, geometry);
        prop_assert_eq!(points.len(), percents.len());
        for (point, percent) in points.iter().zip(&percents) {
            prop_assert_eq!(point.percent, *percent);
            let distance = ((point.x - 250.0).powi(2) + (point.y - 250.0).powi(2)).sqrt();
            prop_assert!(distance <= max_radius + 0.01);
            prop_assert!(point.x.is_finite() && point.y.is_finite());
        }
    }

    #[test]
    fn projection_is_a_pure_function_of_its_inputs(
        percents in prop::collection::vec(0u8..=100, 3..=12),
    ) {
        let registry = registry_of(percents.len());
        let geometry = RadarGeometry::new(0.0, 0.0, 180.0).expect("valid geometry");
        let mut values = ValueMap::zeroed(&registry);
        for (i, percent) in percents.iter().enumerate() {
            values.set(&format!("axis{i}"), f64::from(*percent)).expect("known axis");
        }
        let snapshot = values.clone();

        let first = compute_points(&registry, &values, geometry);
        let second = compute_points(&registry, &values, geometry);
        prop_assert_eq!(first, second);
        prop_assert_eq!(values, snapshot);
    }
}
