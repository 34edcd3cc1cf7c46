use crate::error::ChartResult;
use crate::render::RenderTarget;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `Timeline` owns the windowed copy of the caller's data, the derived
/// transform, the projected points and markers, and the plugin registry.
/// The caller drives it with two independent loops: `recompute` whenever raw
/// data changes and `draw` once per display refresh.
pub struct Timeline<R: RenderTarget> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: RenderTarget> Timeline<R> {
    /// Draws the most recently computed state.
    ///
    /// Never mutates computed data, so it can run as often as the host likes.
    pub fn draw(&mut self) -> ChartResult<()> {
        RenderCoordinator::draw(self)
    }

    /// Draws into a cairo context owned by the host, such as a toolkit draw
    /// callback or an offscreen surface the host manages.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::draw_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
