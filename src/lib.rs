//! radar-rs: radar (spider) chart engine.
//!
//! This crate renders a fixed-axis radar chart comparing a role benchmark
//! profile against a user-editable skill profile. Chart domain, scene
//! construction, and drawing backends are kept strictly separated: the
//! engine produces deterministic draw-command frames and any `Renderer`
//! implementation paints them.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RadarEngine, RadarEngineConfig};
pub use error::{RadarError, RadarResult};
