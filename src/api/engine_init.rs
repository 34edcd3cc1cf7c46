use tracing::debug;

use crate::core::{PaddingBuilder, RenderTransform};
use crate::error::ChartResult;
use crate::extensions::{ConstructContext, Marker, PluginHook, TimelinePlugin};
use crate::interaction::InteractionContext;
use crate::render::RenderTarget;

use super::{Timeline, TimelineConfig, engine_core::EngineCore, plugin_registry::build_registry};

/// Collects renderer, config and plugins before constructing a [`Timeline`].
pub struct TimelineBuilder<R: RenderTarget> {
    renderer: R,
    config: TimelineConfig,
    plugins: Vec<TimelinePlugin>,
}

impl<R: RenderTarget> TimelineBuilder<R> {
    #[must_use]
    pub fn new(renderer: R, config: TimelineConfig) -> Self {
        Self {
            renderer,
            config,
            plugins: Vec::new(),
        }
    }

    /// Appends a plugin; plugins run in the order they are added.
    #[must_use]
    pub fn with_plugin(mut self, plugin: TimelinePlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    #[must_use]
    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = TimelinePlugin>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.config.markers.push(marker);
        self
    }

    /// Creates a fully initialized timeline.
    ///
    /// Fails when the render target has no drawable area, when the config is
    /// invalid or when two plugins share an id. Construct hooks run here, once,
    /// and are the only place padding can grow.
    pub fn build(self) -> ChartResult<Timeline<R>> {
        let Self {
            renderer,
            config,
            plugins,
        } = self;

        renderer.ensure_ready()?;
        config.validate()?;
        let viewport = renderer.viewport();
        let mut plugins = build_registry(plugins)?;

        let mut padding = PaddingBuilder::from_base(config.padding);
        {
            let mut context = ConstructContext {
                padding: &mut padding,
                viewport,
                config: &config,
            };
            for plugin in plugins.values_mut() {
                plugin.run_construct(&mut context);
            }
        }
        let padding = padding.finish()?;

        debug!(
            width = viewport.width,
            height = viewport.height,
            plugins = plugins.len(),
            markers = config.markers.len(),
            padding_left = padding.left,
            padding_top = padding.top,
            "timeline constructed"
        );

        let mut timeline = Timeline {
            renderer,
            core: EngineCore {
                config,
                viewport,
                padding,
                plugins,
                saved_data: Vec::new(),
                computed_data: Vec::new(),
                computed_markers: Vec::new(),
                transform: RenderTransform::identity(),
                interaction: InteractionContext::default(),
                paused: false,
            },
        };
        timeline.dispatch_view_hook(PluginHook::CalculatePositions);
        Ok(timeline)
    }
}

impl<R: RenderTarget> Timeline<R> {
    /// Creates a timeline without plugins.
    pub fn new(renderer: R, config: TimelineConfig) -> ChartResult<Self> {
        TimelineBuilder::new(renderer, config).build()
    }

    #[must_use]
    pub fn builder(renderer: R, config: TimelineConfig) -> TimelineBuilder<R> {
        TimelineBuilder::new(renderer, config)
    }
}
