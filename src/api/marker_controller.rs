use tracing::debug;

use crate::core::ValueWindow;
use crate::error::ChartResult;
use crate::extensions::{Marker, MarkerSpec};
use crate::render::RenderTarget;

use super::Timeline;

impl<R: RenderTarget> Timeline<R> {
    /// Registers a marker. It is projected on the next compute.
    pub fn add_marker(&mut self, marker: Marker) -> ChartResult<()> {
        marker.validate()?;
        debug!(
            orientation = ?marker.orientation(),
            always_show = marker.always_show,
            "add marker"
        );
        self.core.config.markers.push(marker);
        Ok(())
    }

    /// Registers a marker whose orientation is inferred from which of `time`
    /// or `value` is set. Ambiguous input is rejected with
    /// [`crate::ChartError::InvalidMarker`].
    pub fn add_marker_spec(&mut self, spec: MarkerSpec) -> ChartResult<()> {
        self.add_marker(Marker::try_from(spec)?)
    }

    /// Drops every marker; callers rebuild the set by re-adding.
    pub fn clear_markers(&mut self) {
        debug!(cleared = self.core.config.markers.len(), "clear markers");
        self.core.config.markers.clear();
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.core.config.markers
    }

    /// Replaces or removes the fixed value domain; applies on the next compute.
    pub fn set_value_window(&mut self, value_window: Option<ValueWindow>) -> ChartResult<()> {
        if let Some(window) = value_window {
            window.validate()?;
        }
        debug!(?value_window, "set value window");
        self.core.config.value_window = value_window;
        Ok(())
    }
}
