use gtk4 as gtk;

use crate::api::RadarEngine;
use crate::render::Renderer;

pub struct GtkRadarAdapter<R: Renderer> {
    engine: RadarEngine<R>,
}

impl<R: Renderer> GtkRadarAdapter<R> {
    #[must_use]
    pub fn new(engine: RadarEngine<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &RadarEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut RadarEngine<R> {
        &mut self.engine
    }
}
