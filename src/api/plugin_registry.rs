use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::TimelinePlugin;
use crate::render::RenderTarget;

use super::Timeline;

/// Builds the ordered registry, rejecting empty and duplicate ids.
///
/// `IndexMap` keeps registration order, which is also dispatch order.
pub(super) fn build_registry(
    plugins: Vec<TimelinePlugin>,
) -> ChartResult<IndexMap<String, TimelinePlugin>> {
    let mut registry = IndexMap::with_capacity(plugins.len());
    for plugin in plugins {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if registry.contains_key(&plugin_id) {
            return Err(ChartError::DuplicatePlugin(plugin_id));
        }
        debug!(plugin_id = %plugin_id, "register plugin");
        registry.insert(plugin_id, plugin);
    }
    Ok(registry)
}

impl<R: RenderTarget> Timeline<R> {
    /// Registered plugin ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.core.plugins.keys().map(String::as_str)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugins.contains_key(plugin_id)
    }
}
