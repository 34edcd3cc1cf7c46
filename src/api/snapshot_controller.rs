use crate::error::{ChartError, ChartResult};
use crate::render::RenderTarget;

use super::{Timeline, TimelineSnapshot};

impl<R: RenderTarget> Timeline<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            viewport: self.core.viewport,
            padding: self.core.padding,
            plot_area: self.core.plot_area(),
            time_window: self.core.config.time_window,
            value_window: self.core.config.value_window,
            paused: self.core.paused,
            transform: self.core.transform,
            cursor: self.core.interaction.cursor(),
            saved_data: self.core.saved_data.clone(),
            computed_data: self.core.computed_data.clone(),
            computed_markers: self.core.computed_markers.clone(),
            plugin_ids: self.core.plugins.keys().cloned().collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
