use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::api::{
    AxisControlPair, InputPanel, RadarEngineConfig, SeriesStyle, build_grid_scene,
    build_series_scene,
};
use crate::core::{
    AxisRegistry, PresetRegistry, RadarGeometry, RadarPoint, ValueMap, compute_points,
};
use crate::error::RadarResult;
use crate::render::{
    LayeredRadarFrame, RadarLayerKind, RadarLayerStack, RenderFrame, Renderer, SeriesSlot,
};

/// Top-level radar chart controller.
///
/// Owns the renderer and all application state: axis registry, preset
/// registry, both value maps, the input panel, and the retained layered
/// frame. Every mutating operation updates state, rebuilds the affected
/// layers, and renders in one synchronous step, so an observer never sees a
/// partially updated chart.
pub struct RadarEngine<R: Renderer> {
    renderer: R,
    config: RadarEngineConfig,
    geometry: RadarGeometry,
    axes: AxisRegistry,
    presets: PresetRegistry,
    benchmark: ValueMap,
    inputs: InputPanel,
    user_defaults: ValueMap,
    current_role: String,
    layered: LayeredRadarFrame,
    benchmark_tooltips: Vec<String>,
    user_tooltips: Vec<String>,
}

impl<R: Renderer> RadarEngine<R> {
    /// Boots the engine over the built-in skill profile and role benchmarks.
    ///
    /// Builds the grid once, applies the default preset to the benchmark
    /// series, seeds the user series from the balanced defaults, and
    /// performs the initial render.
    pub fn new(renderer: R, config: RadarEngineConfig) -> RadarResult<Self> {
        let axes = AxisRegistry::skill_profile();
        let presets = PresetRegistry::role_benchmarks(&axes)?;
        let user_defaults = PresetRegistry::user_defaults(&axes)?;
        Self::from_parts(renderer, config, axes, presets, user_defaults)
    }

    /// Boots the engine over an explicit axis registry and preset set.
    pub fn from_parts(
        renderer: R,
        config: RadarEngineConfig,
        axes: AxisRegistry,
        presets: PresetRegistry,
        user_defaults: ValueMap,
    ) -> RadarResult<Self> {
        config.validate()?;
        let geometry = config.geometry()?;
        let layered = LayeredRadarFrame::from_stack(config.viewport, RadarLayerStack::canonical());
        let benchmark = ValueMap::zeroed(&axes);
        let inputs = InputPanel::new(&axes, &user_defaults);
        let default_role = presets.default_name().to_owned();

        let mut engine = Self {
            renderer,
            config,
            geometry,
            axes,
            presets,
            benchmark,
            inputs,
            user_defaults,
            current_role: default_role.clone(),
            layered,
            benchmark_tooltips: Vec::new(),
            user_tooltips: Vec::new(),
        };

        engine.install_grid()?;
        engine.install_series(SeriesSlot::User)?;
        // Installs the benchmark series and performs the initial render.
        engine.apply_preset(&default_role)?;
        Ok(engine)
    }

    /// Copies the named preset into the benchmark series and redraws it.
    ///
    /// An unknown role name falls back to the default preset; the user
    /// series is untouched.
    pub fn apply_preset(&mut self, name: &str) -> RadarResult<()> {
        let preset = self.presets.resolve(name);
        let resolved = preset.name().to_owned();
        self.benchmark.copy_from(preset.values());
        self.current_role = resolved.clone();
        debug!(requested = name, resolved = %resolved, "applying benchmark preset");
        self.install_series(SeriesSlot::Benchmark)?;
        self.render()
    }

    /// Handles a slider edit for one axis and redraws the user series.
    pub fn edit_slider(&mut self, key: &str, value: u8) -> RadarResult<u8> {
        let stored = self.inputs.edit_slider(key, value)?;
        self.install_series(SeriesSlot::User)?;
        self.render()?;
        Ok(stored)
    }

    /// Handles a numeric-field edit for one axis and redraws the user series.
    ///
    /// Invalid input never fails: it is coerced to 0 and clamped like any
    /// other edit.
    pub fn edit_number(&mut self, key: &str, raw: &str) -> RadarResult<u8> {
        let stored = self.inputs.edit_number(key, raw)?;
        self.install_series(SeriesSlot::User)?;
        self.render()?;
        Ok(stored)
    }

    /// Writes a raw user value through round-then-clamp coercion.
    pub fn set_user_value(&mut self, key: &str, raw: f64) -> RadarResult<u8> {
        let stored = self.inputs.set_value(key, raw)?;
        self.install_series(SeriesSlot::User)?;
        self.render()?;
        Ok(stored)
    }

    /// Sets every user value to 0 and redraws the user series.
    pub fn reset(&mut self) -> RadarResult<()> {
        self.inputs.reset_to_zero();
        self.install_series(SeriesSlot::User)?;
        self.render()
    }

    /// Restores the balanced default user profile and redraws the user
    /// series.
    pub fn fill_defaults(&mut self) -> RadarResult<()> {
        self.inputs.set_all(&self.user_defaults);
        self.install_series(SeriesSlot::User)?;
        self.render()
    }

    /// Clears and redraws the static grid layer. Idempotent.
    pub fn rebuild_grid(&mut self) -> RadarResult<()> {
        self.install_grid()?;
        self.render()
    }

    /// Projects the current values of one series onto polygon vertices.
    #[must_use]
    pub fn points_for(&self, slot: SeriesSlot) -> SmallVec<[RadarPoint; 8]> {
        compute_points(&self.axes, self.values_for(slot), self.geometry)
    }

    /// Tooltip text per vertex marker, in axis order.
    #[must_use]
    pub fn marker_tooltips(&self, slot: SeriesSlot) -> &[String] {
        match slot {
            SeriesSlot::Benchmark => &self.benchmark_tooltips,
            SeriesSlot::User => &self.user_tooltips,
        }
    }

    /// Flattens the retained layers into one frame in canonical order.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.layered.flatten()
    }

    /// Flattens only the listed layers, for host-side inspection.
    #[must_use]
    pub fn build_layer_frame(&self, layers: &[RadarLayerKind]) -> RenderFrame {
        self.layered.flatten_layers(layers)
    }

    #[must_use]
    pub fn config(&self) -> &RadarEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn axes(&self) -> &AxisRegistry {
        &self.axes
    }

    #[must_use]
    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    #[must_use]
    pub fn benchmark_values(&self) -> &ValueMap {
        &self.benchmark
    }

    #[must_use]
    pub fn user_values(&self) -> &ValueMap {
        self.inputs.values()
    }

    #[must_use]
    pub fn current_role(&self) -> &str {
        &self.current_role
    }

    #[must_use]
    pub fn control_pair(&self, key: &str) -> Option<AxisControlPair> {
        self.inputs.pair(key)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn values_for(&self, slot: SeriesSlot) -> &ValueMap {
        match slot {
            SeriesSlot::Benchmark => &self.benchmark,
            SeriesSlot::User => self.inputs.values(),
        }
    }

    fn style_for(&self, slot: SeriesSlot) -> &SeriesStyle {
        match slot {
            SeriesSlot::Benchmark => &self.config.benchmark_style,
            SeriesSlot::User => &self.config.user_style,
        }
    }

    fn install_grid(&mut self) -> RadarResult<()> {
        let scene = build_grid_scene(
            &self.axes,
            self.geometry,
            &self.config.ring_steps,
            self.config.label_margin_px,
            &self.config.grid_style,
        )?;
        self.layered.clear_layer(RadarLayerKind::Grid);
        for ring in scene.rings {
            self.layered.push_circle(RadarLayerKind::Grid, ring);
        }
        for spoke in scene.spokes {
            self.layered.push_line(RadarLayerKind::Grid, spoke);
        }
        for label in scene.ring_labels {
            self.layered.push_text(RadarLayerKind::Grid, label);
        }
        for label in scene.axis_labels {
            self.layered.push_text(RadarLayerKind::Grid, label);
        }
        Ok(())
    }

    /// Full replace-on-render for one series: clears the outline and marker
    /// layers and installs a fresh scene.
    fn install_series(&mut self, slot: SeriesSlot) -> RadarResult<()> {
        let points = compute_points(&self.axes, self.values_for(slot), self.geometry);
        let scene = build_series_scene(&self.axes, &points, self.style_for(slot), slot)?;

        self.layered.clear_layer(RadarLayerKind::SeriesOutline(slot));
        self.layered.clear_layer(RadarLayerKind::SeriesMarkers(slot));
        self.layered
            .push_polygon(RadarLayerKind::SeriesOutline(slot), scene.outline);
        for marker in scene.markers {
            self.layered
                .push_circle(RadarLayerKind::SeriesMarkers(slot), marker);
        }
        match slot {
            SeriesSlot::Benchmark => self.benchmark_tooltips = scene.tooltips,
            SeriesSlot::User => self.user_tooltips = scene.tooltips,
        }
        Ok(())
    }

    fn render(&mut self) -> RadarResult<()> {
        let frame = self.layered.flatten();
        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            polygons = frame.polygons.len(),
            texts = frame.texts.len(),
            "rendering radar frame"
        );
        self.renderer.render(&frame)
    }
}
