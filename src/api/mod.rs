mod engine;
mod engine_config;
mod grid_scene;
mod input;
mod series_scene;
mod style;

pub use engine::RadarEngine;
pub use engine_config::RadarEngineConfig;
pub use grid_scene::{GridScene, build_grid_scene};
pub use input::{AxisControlPair, InputPanel};
pub use series_scene::{SeriesScene, build_series_scene};
pub use style::{GridStyle, SeriesStyle};
