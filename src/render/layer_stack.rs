use serde::{Deserialize, Serialize};

/// The two rendered series.
///
/// Benchmark takes the muted, dashed visual treatment; user the prominent,
/// solid one. This is a rendering convention, not a logic difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSlot {
    Benchmark,
    User,
}

/// Independently clearable drawing regions of the radar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarLayerKind {
    Grid,
    SeriesOutline(SeriesSlot),
    SeriesMarkers(SeriesSlot),
}

/// Fixed draw order for the radar surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarLayerStack {
    pub layers: Vec<RadarLayerKind>,
}

impl RadarLayerStack {
    /// Grid below both series; benchmark below user; outlines below their
    /// own markers.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                RadarLayerKind::Grid,
                RadarLayerKind::SeriesOutline(SeriesSlot::Benchmark),
                RadarLayerKind::SeriesMarkers(SeriesSlot::Benchmark),
                RadarLayerKind::SeriesOutline(SeriesSlot::User),
                RadarLayerKind::SeriesMarkers(SeriesSlot::User),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RadarLayerKind, RadarLayerStack, SeriesSlot};

    #[test]
    fn canonical_stack_draws_grid_first_and_user_last() {
        let stack = RadarLayerStack::canonical();
        assert_eq!(stack.layers.first(), Some(&RadarLayerKind::Grid));
        assert_eq!(
            stack.layers.last(),
            Some(&RadarLayerKind::SeriesMarkers(SeriesSlot::User))
        );
        assert_eq!(stack.layers.len(), 5);
    }
}
