use crate::core::Viewport;

use super::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RadarLayerKind, RadarLayerStack, RenderFrame,
    TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: RadarLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: RadarLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
        self.polygons.clear();
        self.texts.clear();
    }
}

/// Retained draw-command surface with independently clearable layers.
///
/// Each layer is fully replaced on render: the owning builder clears it and
/// installs a fresh scene, never diffs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRadarFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRadarFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: RadarLayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self { viewport, layers }
    }

    /// Empties one layer; unknown layer kinds are ignored.
    pub fn clear_layer(&mut self, kind: RadarLayerKind) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.clear();
        }
    }

    pub fn push_line(&mut self, kind: RadarLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_circle(&mut self, kind: RadarLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_polygon(&mut self, kind: RadarLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_text(&mut self, kind: RadarLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    /// Flattens all layers into one frame in stack order.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.lines.extend(layer.lines.iter().copied());
            frame.circles.extend(layer.circles.iter().copied());
            frame.polygons.extend(layer.polygons.iter().cloned());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    /// Flattens only the listed layers, preserving stack order.
    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[RadarLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.lines.extend(layer.lines.iter().copied());
            frame.circles.extend(layer.circles.iter().copied());
            frame.polygons.extend(layer.polygons.iter().cloned());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: RadarLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
