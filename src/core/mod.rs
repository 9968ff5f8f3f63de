pub mod axis;
pub mod geometry;
pub mod preset;
pub mod types;
pub mod values;

pub use axis::{Axis, AxisRegistry};
pub use geometry::{RadarGeometry, RadarPoint, compute_points, round_to_2dp};
pub use preset::{Preset, PresetRegistry};
pub use types::Viewport;
pub use values::{ValueMap, coerce_percent};
