mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive, TextVAlign,
};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Drawing surface the engine renders onto.
///
/// Targets expose their drawable size and consume a fully materialized
/// `RenderFrame`, so drawing code stays isolated from windowing and transform
/// logic.
pub trait RenderTarget {
    /// Drawable size in pixels.
    fn viewport(&self) -> Viewport;

    /// Confirms the target can be drawn on. Called once at construction.
    fn ensure_ready(&self) -> ChartResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
