//! timeline-rs: real-time scrolling time-series chart engine.
//!
//! The engine windows a caller-owned, time-ordered sample sequence, derives
//! the transform onto pixel space, projects points and reference markers, and
//! hands a backend-agnostic frame to a pluggable render target. Plugins hook
//! into construction, compute, draw and pause/resume.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Timeline, TimelineBuilder, TimelineConfig, TimelineSnapshot};
pub use error::{ChartError, ChartResult};
