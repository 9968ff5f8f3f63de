mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use layer_stack::{RadarLayerKind, RadarLayerStack, SeriesSlot};
pub use layered_frame::{LayerPrimitives, LayeredRadarFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, DashPattern, LinePrimitive, PolygonPrimitive, StrokeStyle, TextHAlign,
    TextPrimitive, TextVAlign,
};

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and input logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
