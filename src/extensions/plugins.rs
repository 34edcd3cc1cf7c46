use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::TimelineConfig;
use crate::core::{
    ComputedPoint, Padding, PaddingBuilder, PlotArea, RenderTransform, SavedPoint, Viewport,
};
use crate::extensions::ComputedMarker;
use crate::interaction::{CursorInfo, InteractionContext};
use crate::render::RenderFrame;

/// Lifecycle events a plugin can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginHook {
    Construct,
    Pause,
    Resume,
    ComputeBefore,
    ComputeAfter,
    CalculatePositions,
    DrawBefore,
    DrawAfter,
}

impl PluginHook {
    pub const ALL: [Self; 8] = [
        Self::Construct,
        Self::Pause,
        Self::Resume,
        Self::ComputeBefore,
        Self::ComputeAfter,
        Self::CalculatePositions,
        Self::DrawBefore,
        Self::DrawAfter,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Construct => "construct",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::ComputeBefore => "compute:before",
            Self::ComputeAfter => "compute:after",
            Self::CalculatePositions => "calculate-positions",
            Self::DrawBefore => "draw:before",
            Self::DrawAfter => "draw:after",
        }
    }
}

/// State available to construct hooks.
///
/// Construct is the only phase where plugins may contribute padding.
pub struct ConstructContext<'a> {
    pub padding: &'a mut PaddingBuilder,
    pub viewport: Viewport,
    pub config: &'a TimelineConfig,
}

/// Read-only view of the timeline handed to every non-construct hook.
#[derive(Debug, Clone, Copy)]
pub struct TimelineView<'a> {
    pub saved_data: &'a [SavedPoint],
    pub computed_data: &'a [ComputedPoint],
    pub computed_markers: &'a [ComputedMarker],
    pub transform: RenderTransform,
    pub plot: PlotArea,
    pub padding: Padding,
    pub viewport: Viewport,
    pub config: &'a TimelineConfig,
    pub interaction: InteractionContext,
    pub paused: bool,
}

impl TimelineView<'_> {
    #[must_use]
    pub fn width_inside_padding(&self) -> f64 {
        self.plot.width
    }

    #[must_use]
    pub fn height_inside_padding(&self) -> f64 {
        self.plot.height
    }

    #[must_use]
    pub fn cursor(&self) -> CursorInfo {
        self.interaction.cursor()
    }
}

pub type ConstructHook = Box<dyn FnMut(&mut ConstructContext<'_>)>;
pub type ViewHook = Box<dyn FnMut(&TimelineView<'_>)>;
pub type DrawHook = Box<dyn FnMut(&TimelineView<'_>, &mut RenderFrame)>;

/// Plugin made of optional typed callbacks, one slot per lifecycle event.
///
/// Empty slots are skipped during dispatch.
pub struct TimelinePlugin {
    id: String,
    construct: Option<ConstructHook>,
    pause: Option<ViewHook>,
    resume: Option<ViewHook>,
    compute_before: Option<ViewHook>,
    compute_after: Option<ViewHook>,
    calculate_positions: Option<ViewHook>,
    draw_before: Option<DrawHook>,
    draw_after: Option<DrawHook>,
}

impl TimelinePlugin {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            construct: None,
            pause: None,
            resume: None,
            compute_before: None,
            compute_after: None,
            calculate_positions: None,
            draw_before: None,
            draw_after: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn on_construct(mut self, hook: impl FnMut(&mut ConstructContext<'_>) + 'static) -> Self {
        self.construct = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_pause(mut self, hook: impl FnMut(&TimelineView<'_>) + 'static) -> Self {
        self.pause = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_resume(mut self, hook: impl FnMut(&TimelineView<'_>) + 'static) -> Self {
        self.resume = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_compute_before(mut self, hook: impl FnMut(&TimelineView<'_>) + 'static) -> Self {
        self.compute_before = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_compute_after(mut self, hook: impl FnMut(&TimelineView<'_>) + 'static) -> Self {
        self.compute_after = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_calculate_positions(
        mut self,
        hook: impl FnMut(&TimelineView<'_>) + 'static,
    ) -> Self {
        self.calculate_positions = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_draw_before(
        mut self,
        hook: impl FnMut(&TimelineView<'_>, &mut RenderFrame) + 'static,
    ) -> Self {
        self.draw_before = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_draw_after(
        mut self,
        hook: impl FnMut(&TimelineView<'_>, &mut RenderFrame) + 'static,
    ) -> Self {
        self.draw_after = Some(Box::new(hook));
        self
    }

    /// Whether a callback is registered for `hook`.
    #[must_use]
    pub fn handles(&self, hook: PluginHook) -> bool {
        match hook {
            PluginHook::Construct => self.construct.is_some(),
            PluginHook::Pause => self.pause.is_some(),
            PluginHook::Resume => self.resume.is_some(),
            PluginHook::ComputeBefore => self.compute_before.is_some(),
            PluginHook::ComputeAfter => self.compute_after.is_some(),
            PluginHook::CalculatePositions => self.calculate_positions.is_some(),
            PluginHook::DrawBefore => self.draw_before.is_some(),
            PluginHook::DrawAfter => self.draw_after.is_some(),
        }
    }

    pub(crate) fn run_construct(&mut self, context: &mut ConstructContext<'_>) -> bool {
        match self.construct.as_mut() {
            Some(hook) => {
                hook(context);
                true
            }
            None => false,
        }
    }

    /// Runs a view hook. Construct and draw hooks are not reachable here.
    pub(crate) fn run_view(&mut self, hook: PluginHook, view: &TimelineView<'_>) -> bool {
        let slot = match hook {
            PluginHook::Pause => self.pause.as_mut(),
            PluginHook::Resume => self.resume.as_mut(),
            PluginHook::ComputeBefore => self.compute_before.as_mut(),
            PluginHook::ComputeAfter => self.compute_after.as_mut(),
            PluginHook::CalculatePositions => self.calculate_positions.as_mut(),
            PluginHook::Construct | PluginHook::DrawBefore | PluginHook::DrawAfter => None,
        };
        match slot {
            Some(callback) => {
                callback(view);
                true
            }
            None => false,
        }
    }

    pub(crate) fn run_draw(
        &mut self,
        hook: PluginHook,
        view: &TimelineView<'_>,
        frame: &mut RenderFrame,
    ) -> bool {
        let slot = match hook {
            PluginHook::DrawBefore => self.draw_before.as_mut(),
            PluginHook::DrawAfter => self.draw_after.as_mut(),
            _ => None,
        };
        match slot {
            Some(callback) => {
                callback(view, frame);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TimelinePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: Vec<&'static str> = PluginHook::ALL
            .into_iter()
            .filter(|hook| self.handles(*hook))
            .map(PluginHook::name)
            .collect();
        f.debug_struct("TimelinePlugin")
            .field("id", &self.id)
            .field("hooks", &hooks)
            .finish()
    }
}
