use serde::{Deserialize, Serialize};

use crate::core::{
    ComputedPoint, Padding, PlotArea, RenderTransform, SavedPoint, TimeWindow, ValueWindow,
    Viewport,
};
use crate::extensions::ComputedMarker;
use crate::interaction::CursorInfo;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: Viewport,
    pub padding: Padding,
    pub plot_area: PlotArea,
    pub time_window: TimeWindow,
    #[serde(default)]
    pub value_window: Option<ValueWindow>,
    pub paused: bool,
    pub transform: RenderTransform,
    pub cursor: CursorInfo,
    pub saved_data: Vec<SavedPoint>,
    pub computed_data: Vec<ComputedPoint>,
    pub computed_markers: Vec<ComputedMarker>,
    pub plugin_ids: Vec<String>,
}
