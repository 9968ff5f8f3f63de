use radar_rs::api::{SeriesStyle, build_series_scene};
use radar_rs::core::{AxisRegistry, PresetRegistry, RadarGeometry, compute_points};
use radar_rs::render::SeriesSlot;

#[test]
fn series_scene_closes_the_polygon_over_all_axes() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = PresetRegistry::user_defaults(&registry).expect("defaults");
    let points = compute_points(&registry, &values, geometry);

    let scene = build_series_scene(&registry, &points, &SeriesStyle::user_default(), SeriesSlot::User)
        .expect("series scene");

    assert_eq!(scene.outline.points.len(), 6);
    assert_eq!(scene.markers.len(), 6);
    assert_eq!(scene.tooltips.len(), 6);
    assert!(scene.outline.stroke.is_some());
    assert!(scene.outline.fill.is_some());
}

#[test]
fn markers_sit_on_their_polygon_vertices() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = PresetRegistry::user_defaults(&registry).expect("defaults");
    let points = compute_points(&registry, &values, geometry);

    let scene = build_series_scene(&registry, &points, &SeriesStyle::user_default(), SeriesSlot::User)
        .expect("series scene");

    for (marker, (x, y)) in scene.markers.iter().zip(scene.outline.points.iter()) {
        assert_eq!(marker.cx, *x);
        assert_eq!(marker.cy, *y);
    }
}

#[test]
fn tooltip_text_names_axis_and_percent() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = PresetRegistry::user_defaults(&registry).expect("defaults");
    let points = compute_points(&registry, &values, geometry);

    let user = build_series_scene(&registry, &points, &SeriesStyle::user_default(), SeriesSlot::User)
        .expect("user scene");
    assert_eq!(user.tooltips[0], "Core Technical Skills: 70%");

    let bench = build_series_scene(
        &registry,
        &points,
        &SeriesStyle::benchmark_default(),
        SeriesSlot::Benchmark,
    )
    .expect("benchmark scene");
    assert_eq!(bench.tooltips[0], "Benchmark — Core Technical Skills: 70%");
}

#[test]
fn benchmark_treatment_is_dashed_and_user_is_solid() {
    let benchmark = SeriesStyle::benchmark_default();
    let user = SeriesStyle::user_default();

    assert!(benchmark.outline_dash.is_some());
    assert!(user.outline_dash.is_none());
    assert!(benchmark.marker_radius < user.marker_radius);
}

#[test]
fn point_count_must_match_axis_count() {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = PresetRegistry::user_defaults(&registry).expect("defaults");
    let mut points = compute_points(&registry, &values, geometry);
    points.pop();

    let result =
        build_series_scene(&registry, &points, &SeriesStyle::user_default(), SeriesSlot::User);
    assert!(result.is_err());
}
