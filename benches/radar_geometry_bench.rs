use criterion::{Criterion, criterion_group, criterion_main};
use radar_rs::api::{GridStyle, RadarEngine, RadarEngineConfig, build_grid_scene};
use radar_rs::core::{
    Axis, AxisRegistry, PresetRegistry, RadarGeometry, ValueMap, Viewport, compute_points,
};
use radar_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_compute_points_six_axes(c: &mut Criterion) {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let values = PresetRegistry::user_defaults(&registry).expect("defaults");

    c.bench_function("compute_points_six_axes", |b| {
        b.iter(|| {
            let _ = compute_points(black_box(&registry), black_box(&values), black_box(geometry));
        })
    });
}

fn bench_compute_points_twelve_axes(c: &mut Criterion) {
    let axes = (0..12)
        .map(|i| Axis::new(format!("axis{i}"), format!("Axis {i}"), ""))
        .collect();
    let registry = AxisRegistry::new(axes).expect("generated registry");
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let mut values = ValueMap::zeroed(&registry);
    for i in 0..12 {
        values
            .set(&format!("axis{i}"), ((i * 9) % 101) as f64)
            .expect("known axis");
    }

    c.bench_function("compute_points_twelve_axes", |b| {
        b.iter(|| {
            let _ = compute_points(black_box(&registry), black_box(&values), black_box(geometry));
        })
    });
}

fn bench_grid_scene_build(c: &mut Criterion) {
    let registry = AxisRegistry::skill_profile();
    let geometry = RadarGeometry::new(250.0, 250.0, 180.0).expect("valid geometry");
    let style = GridStyle::default();
    let steps = [25u8, 50, 75, 100];

    c.bench_function("grid_scene_build", |b| {
        b.iter(|| {
            let _ = build_grid_scene(
                black_box(&registry),
                black_box(geometry),
                black_box(&steps),
                black_box(28.0),
                black_box(&style),
            )
            .expect("grid scene");
        })
    });
}

fn bench_engine_frame_flatten(c: &mut Criterion) {
    let config = RadarEngineConfig::new(Viewport::new(500, 500));
    let engine = RadarEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("engine_frame_flatten", |b| {
        b.iter(|| {
            let _ = black_box(&engine).build_render_frame();
        })
    });
}

criterion_group!(
    benches,
    bench_compute_points_six_axes,
    bench_compute_points_twelve_axes,
    bench_grid_scene_build,
    bench_engine_frame_flatten
);
criterion_main!(benches);
