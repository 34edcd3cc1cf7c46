use tracing::{debug, trace};

use crate::core::{
    ForcedExtents, RawPoint, RenderTransform, Viewport, interpolate_window_edge, project_points,
    save_window,
};
use crate::error::ChartResult;
use crate::extensions::{PluginHook, forced_anchors, project_markers};
use crate::render::RenderTarget;

use super::Timeline;

impl<R: RenderTarget> Timeline<R> {
    /// Copies the active window out of `data` and recomputes pixel geometry.
    ///
    /// `data` must be sorted ascending by time; the engine does not sort it.
    /// Non-finite samples are skipped. No-op while paused or when fewer than
    /// two usable samples remain, in which case the previous computed state is
    /// kept.
    pub fn recompute(&mut self, data: &[RawPoint]) {
        if self.core.paused {
            trace!(raw_len = data.len(), "recompute suppressed while paused");
            return;
        }
        if data.len() < 2 {
            debug!(raw_len = data.len(), "not enough data to recompute");
            return;
        }

        let saved_data = save_window(data, self.core.config.time_window);
        if saved_data.len() < 2 {
            debug!(
                raw_len = data.len(),
                saved_len = saved_data.len(),
                "not enough finite samples in window to recompute"
            );
            return;
        }

        self.core.saved_data = saved_data;
        debug!(
            raw_len = data.len(),
            saved_len = self.core.saved_data.len(),
            "saved data window"
        );
        self.compute();
    }

    /// Stops accepting `recompute` until [`Timeline::resume`]; the last frame
    /// stays drawable.
    pub fn pause(&mut self) {
        self.core.paused = true;
        debug!("timeline paused");
        self.dispatch_view_hook(PluginHook::Pause);
    }

    /// Re-enables recompute and immediately recomputes from `data`, so
    /// everything pushed during the pause shows up at once.
    pub fn resume(&mut self, data: &[RawPoint]) {
        self.core.paused = false;
        debug!(raw_len = data.len(), "timeline resumed");
        self.recompute(data);
        self.dispatch_view_hook(PluginHook::Resume);
    }

    /// Resizes the render target and re-projects the current saved data.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.renderer.resize(viewport)?;
        self.core.viewport = self.renderer.viewport();
        debug!(
            width = self.core.viewport.width,
            height = self.core.viewport.height,
            "timeline resized"
        );
        self.compute();
        self.dispatch_view_hook(PluginHook::CalculatePositions);
        Ok(())
    }

    /// Derives the transform, interpolates the window edge and projects
    /// points and markers.
    ///
    /// New lists are built first and swapped in whole, so a draw never sees a
    /// partially updated point list.
    pub(super) fn compute(&mut self) {
        self.dispatch_view_hook(PluginHook::ComputeBefore);

        let plot = self.core.plot_area();
        let (forced_times, forced_values) = forced_anchors(&self.core.config.markers);
        let transform = RenderTransform::derive(
            &self.core.saved_data,
            self.core.config.time_window,
            self.core.config.value_window,
            ForcedExtents {
                times: &forced_times,
                values: &forced_values,
            },
            plot,
        );

        let mut interpolated = false;
        if let Some(window) = self.core.config.time_window.duration() {
            interpolated =
                interpolate_window_edge(&mut self.core.saved_data, window, transform.extra_time);
        }

        let (computed_data, computed_markers) = if self.core.saved_data.len() < 2 {
            (Vec::new(), Vec::new())
        } else {
            (
                project_points(&self.core.saved_data, &transform, plot),
                project_markers(&self.core.config.markers, &transform, plot),
            )
        };

        self.core.transform = transform;
        self.core.computed_data = computed_data;
        self.core.computed_markers = computed_markers;
        debug!(
            points = self.core.computed_data.len(),
            markers = self.core.computed_markers.len(),
            extra_time = transform.extra_time,
            interpolated,
            "computed timeline geometry"
        );

        self.dispatch_view_hook(PluginHook::ComputeAfter);
    }
}
