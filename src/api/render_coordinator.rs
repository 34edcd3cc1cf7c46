use tracing::trace;

use crate::error::ChartResult;
use crate::extensions::PluginHook;
use crate::render::{RenderFrame, RenderTarget};

use super::Timeline;
use super::render_frame_builder::{
    push_background, push_markers, push_plot_border, push_series_line,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn draw<R: RenderTarget>(timeline: &mut Timeline<R>) -> ChartResult<()> {
        let frame = build_frame(timeline);
        timeline.renderer.render(&frame)
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn draw_on_cairo_context<R: RenderTarget + CairoContextRenderer>(
        timeline: &mut Timeline<R>,
        context: &cairo::Context,
    ) -> ChartResult<()> {
        let frame = build_frame(timeline);
        timeline.renderer.render_on_cairo_context(context, &frame)
    }
}

/// Background, draw:before overlays, series line, plot border, markers and
/// finally draw:after overlays.
fn build_frame<R: RenderTarget>(timeline: &mut Timeline<R>) -> RenderFrame {
    let plot = timeline.core.plot_area();
    let mut frame = RenderFrame::new(timeline.core.viewport);

    push_background(&timeline.core, &mut frame);
    timeline.dispatch_draw_hook(PluginHook::DrawBefore, &mut frame);
    push_series_line(&timeline.core, plot, &mut frame);
    push_plot_border(&timeline.core, plot, &mut frame);
    push_markers(&timeline.core, plot, &mut frame);
    timeline.dispatch_draw_hook(PluginHook::DrawAfter, &mut frame);

    trace!(
        commands = frame.commands.len(),
        points = timeline.core.computed_data.len(),
        "timeline frame built"
    );
    frame
}
