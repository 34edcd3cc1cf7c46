use tracing::trace;

use crate::core::{OverflowBehaviour, PlotArea};
use crate::extensions::{MarkerDrawStyle, marker_primitives};
use crate::render::{PolylinePrimitive, RectPrimitive, RenderFrame};

use super::engine_core::EngineCore;

/// Clears the whole viewport with the background colour.
pub(super) fn push_background(core: &EngineCore, frame: &mut RenderFrame) {
    frame.push_rect(RectPrimitive::filled(
        0.0,
        0.0,
        f64::from(core.viewport.width),
        f64::from(core.viewport.height),
        core.config.background_colour,
    ));
}

/// One stroked path through every computed point, skipped below two points.
pub(super) fn push_series_line(core: &EngineCore, plot: PlotArea, frame: &mut RenderFrame) {
    if core.computed_data.len() < 2 {
        trace!(points = core.computed_data.len(), "series line skipped");
        return;
    }

    let points = core
        .computed_data
        .iter()
        .map(|point| (point.render_x, point.render_y))
        .collect();
    let mut polyline =
        PolylinePrimitive::new(points, core.config.line_width, core.config.foreground_colour);
    if core
        .config
        .value_window
        .is_some_and(|window| window.overflow_behaviour == OverflowBehaviour::Clip)
    {
        polyline = polyline.with_clip(plot.left, plot.top, plot.width, plot.height);
    }
    frame.push_polyline(polyline);
}

pub(super) fn push_plot_border(core: &EngineCore, plot: PlotArea, frame: &mut RenderFrame) {
    frame.push_rect(RectPrimitive::stroked(
        plot.left,
        plot.top,
        plot.width,
        plot.height,
        core.config.line_width,
        core.config.foreground_colour,
    ));
}

/// Marker lines and labels; markers projected outside the plot are skipped
/// for this frame only.
pub(super) fn push_markers(core: &EngineCore, plot: PlotArea, frame: &mut RenderFrame) {
    let style = MarkerDrawStyle {
        default_colour: core.config.foreground_colour,
        line_width: core.config.marker_line_width,
        font_size_px: core.config.label_font_size_px,
    };

    let mut pruned = 0_usize;
    for computed in &core.computed_markers {
        if !computed.is_visible(plot) {
            pruned += 1;
            continue;
        }
        let (line, label) = marker_primitives(computed, plot, style);
        frame.push_line(line);
        if let Some(label) = label {
            frame.push_text(label);
        }
    }
    if pruned > 0 {
        trace!(pruned, "markers outside plot area skipped");
    }
}
