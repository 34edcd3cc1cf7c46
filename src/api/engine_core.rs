use indexmap::IndexMap;

use crate::core::{ComputedPoint, Padding, PlotArea, RenderTransform, SavedPoint, Viewport};
use crate::extensions::{ComputedMarker, TimelinePlugin, TimelineView};
use crate::interaction::InteractionContext;

use super::TimelineConfig;

/// Internal engine state used by the public facade (`Timeline`).
pub(super) struct EngineCore {
    /// Also the marker store: `config.markers` grows through `add_marker`.
    pub(super) config: TimelineConfig,
    pub(super) viewport: Viewport,
    /// Base padding plus every plugin contribution; fixed after construction.
    pub(super) padding: Padding,
    pub(super) plugins: IndexMap<String, TimelinePlugin>,
    pub(super) saved_data: Vec<SavedPoint>,
    pub(super) computed_data: Vec<ComputedPoint>,
    pub(super) computed_markers: Vec<ComputedMarker>,
    pub(super) transform: RenderTransform,
    pub(super) interaction: InteractionContext,
    pub(super) paused: bool,
}

impl EngineCore {
    pub(super) fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.padding)
    }

    pub(super) fn view(&self) -> TimelineView<'_> {
        TimelineView {
            saved_data: &self.saved_data,
            computed_data: &self.computed_data,
            computed_markers: &self.computed_markers,
            transform: self.transform,
            plot: self.plot_area(),
            padding: self.padding,
            viewport: self.viewport,
            config: &self.config,
            interaction: self.interaction,
            paused: self.paused,
        }
    }
}
