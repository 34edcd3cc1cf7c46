use tracing::trace;

use crate::extensions::PluginHook;
use crate::render::{RenderFrame, RenderTarget};

use super::Timeline;

impl<R: RenderTarget> Timeline<R> {
    /// Runs `hook` on every plugin in registration order.
    ///
    /// The registry is moved out for the duration of the dispatch so hooks can
    /// observe the rest of the engine state through a shared view.
    pub(super) fn dispatch_view_hook(&mut self, hook: PluginHook) {
        if self.core.plugins.is_empty() {
            return;
        }
        let mut plugins = std::mem::take(&mut self.core.plugins);
        let view = self.core.view();
        let mut invoked = 0_usize;
        for plugin in plugins.values_mut() {
            if plugin.run_view(hook, &view) {
                invoked += 1;
            }
        }
        trace!(hook = hook.name(), invoked, "plugin hook dispatched");
        self.core.plugins = plugins;
    }

    pub(super) fn dispatch_draw_hook(&mut self, hook: PluginHook, frame: &mut RenderFrame) {
        if self.core.plugins.is_empty() {
            return;
        }
        let mut plugins = std::mem::take(&mut self.core.plugins);
        let view = self.core.view();
        let mut invoked = 0_usize;
        for plugin in plugins.values_mut() {
            if plugin.run_draw(hook, &view, frame) {
                invoked += 1;
            }
        }
        trace!(hook = hook.name(), invoked, "plugin hook dispatched");
        self.core.plugins = plugins;
    }
}
