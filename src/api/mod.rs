//! Public timeline facade.
//!
//! `Timeline` is split across controllers the same way its responsibilities
//! split: data windowing, markers, plugins, interaction, rendering and
//! snapshots each get their own `impl` block.

mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod marker_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_frame_builder;
mod snapshot_controller;

pub use engine::Timeline;
pub use engine_config::TimelineConfig;
pub use engine_init::TimelineBuilder;
pub use engine_snapshot::TimelineSnapshot;
pub use json_contract::{TIMELINE_SNAPSHOT_JSON_SCHEMA_V1, TimelineSnapshotJsonContractV1};
