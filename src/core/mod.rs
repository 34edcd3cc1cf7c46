pub mod geometry;
pub mod primitives;
pub mod transform;
pub mod types;
pub mod value_window;
pub mod windowing;

pub use geometry::{DistanceMethod, distance, is_point_in_box, nearest_point};
pub use transform::{ForcedExtents, PlotArea, RenderTransform, project_points};
pub use types::{
    ComputedPoint, Padding, PaddingBuilder, RawPoint, SampleTime, SavedPoint, Viewport,
};
pub use value_window::{OverflowBehaviour, ValueWindow};
pub use windowing::{
    TimeWindow, interpolate_value, interpolate_window_edge, save_window, window_start_index,
};
