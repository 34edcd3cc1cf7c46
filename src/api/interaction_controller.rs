use tracing::trace;

use crate::core::{ComputedPoint, DistanceMethod, nearest_point};
use crate::interaction::{CursorInfo, InteractionContext};
use crate::render::RenderTarget;

use super::Timeline;

impl<R: RenderTarget> Timeline<R> {
    #[must_use]
    pub fn interaction(&self) -> InteractionContext {
        self.core.interaction
    }

    #[must_use]
    pub fn cursor(&self) -> CursorInfo {
        self.core.interaction.cursor()
    }

    /// Records the pointer position in chart-relative pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core
            .interaction
            .on_pointer_move(x, y, self.core.viewport);
        trace!(x, y, over_chart = self.cursor().over_chart, "pointer move");
    }

    pub fn pointer_leave(&mut self) {
        self.core.interaction.on_pointer_leave();
        trace!("pointer leave");
    }

    /// Nearest computed point to `(x, y)` in pixel space.
    #[must_use]
    pub fn nearest_point(&self, x: f64, y: f64, method: DistanceMethod) -> Option<ComputedPoint> {
        nearest_point(&self.core.computed_data, x, y, method)
    }

    /// Computed point nearest to the cursor, if the cursor is over the chart.
    #[must_use]
    pub fn nearest_point_to_cursor(&self, method: DistanceMethod) -> Option<ComputedPoint> {
        let cursor = self.cursor();
        if !cursor.over_chart {
            return None;
        }
        self.nearest_point(cursor.chart_x, cursor.chart_y, method)
    }

    /// Maps a pixel column back to time with the current transform.
    #[must_use]
    pub fn time_at_render_x(&self, x: f64) -> Option<f64> {
        self.core
            .transform
            .time_at_render_x(x, self.core.plot_area())
    }

    /// Maps a pixel row back to a value with the current transform.
    #[must_use]
    pub fn value_at_render_y(&self, y: f64) -> Option<f64> {
        self.core
            .transform
            .value_at_render_y(y, self.core.plot_area())
    }
}
