use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, RenderTarget};

/// Headless render target used by tests and server-side engine usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real backend, and keeps the last frame for inspection.
#[derive(Debug, Clone)]
pub struct NullRenderer {
    viewport: Viewport,
    frames_rendered: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames_rendered: 0,
            last_frame: None,
        }
    }

    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

impl RenderTarget for NullRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
