//! Markers and plugin hooks layered on top of the compute pipeline.

pub mod markers;
pub mod plugins;

pub use markers::{
    ComputedMarker, DOTTED_MARKER_SHIFT_PX, LabelSide, MARKER_LABEL_GAP_PX, Marker,
    MarkerDrawStyle, MarkerKind, MarkerOrientation, MarkerProjection, MarkerSpec, forced_anchors,
    marker_primitives, project_markers,
};
pub use plugins::{
    ConstructContext, ConstructHook, DrawHook, PluginHook, TimelinePlugin, TimelineView, ViewHook,
};
