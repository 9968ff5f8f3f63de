use radar_rs::core::{AxisRegistry, RadarGeometry, ValueMap, compute_points};

fn scenario_values(registry: &AxisRegistry) -> ValueMap {
    ValueMap::from_pairs(
        registry,
        &[
            ("coreTech", 0),
            ("frameworks", 25),
            ("uiux", 50),
            ("power", 75),
            ("emerging", 100),
            ("practices", 50),
        ],
    )
    .expect("values over built-in registry")
}

#[test]
fn one_point_per_axis_in_registry_order() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let points = compute_points(&registry, &scenario_values(&registry), geometry);

    assert_eq!(points.len(), registry.len());
    let expected: Vec<u8> = vec![0, 25, 50, 75, 100, 50];
    let got: Vec<u8> = points.iter().map(|p| p.percent).collect();
    assert_eq!(got, expected);
}

#[test]
fn fourth_axis_projects_onto_vertical_at_three_quarters() {
    // Axis index 3 of 6 sits at 90 degrees; 75% of 180 px is 135 px.
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(0.0, 0.0, 180.0).expect("valid geometry");
    let points = compute_points(&registry, &scenario_values(&registry), geometry);

    assert_eq!(points[3].x, 0.0);
    assert_eq!(points[3].y, 135.0);
    assert_eq!(points[3].percent, 75);
}

#[test]
fn zero_percent_collapses_to_center() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let points = compute_points(&registry, &ValueMap::zeroed(&registry), geometry);

    for point in &points {
        assert_eq!(point.x, 250.0);
        assert_eq!(point.y, 250.0);
        assert_eq!(point.percent, 0);
    }
}

#[test]
fn full_values_stay_within_max_radius() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let mut values = ValueMap::zeroed(&registry);
    for axis in registry.iter() {
        values.set(&axis.key, 100.0).expect("known axis");
    }

    let points = compute_points(&registry, &values, geometry);
    for point in &points {
        let distance = ((point.x - 250.0).powi(2) + (point.y - 250.0).powi(2)).sqrt();
        assert!(distance <= 180.0 + 0.01, "distance {distance} exceeds radius");
    }
}

#[test]
fn projection_is_deterministic() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = scenario_values(&registry);

    let first = compute_points(&registry, &values, geometry);
    let second = compute_points(&registry, &values, geometry);
    assert_eq!(first, second);
}

#[test]
fn value_writes_round_before_clamping() {
    let registry = AxisRegistry::skill_profile();
    let mut values = ValueMap::zeroed(&registry);

    assert_eq!(values.set("coreTech", 99.6).expect("known axis"), 100);
    assert_eq!(values.set("coreTech", -3.2).expect("known axis"), 0);
    assert_eq!(values.set("coreTech", 150.0).expect("known axis"), 100);
    assert_eq!(values.set("coreTech", 54.4).expect("known axis"), 54);
}

#[test]
fn unknown_axis_write_is_rejected() {
    let registry = AxisRegistry::skill_profile();
    let mut values = ValueMap::zeroed(&registry);
    assert!(values.set("doesNotExist", 10.0).is_err());
}
