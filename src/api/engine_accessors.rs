use crate::core::{ComputedPoint, Padding, PlotArea, RenderTransform, SavedPoint, Viewport};
use crate::extensions::ComputedMarker;
use crate::render::RenderTarget;

use super::{Timeline, TimelineConfig};

impl<R: RenderTarget> Timeline<R> {
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    /// Final padding, including plugin contributions.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.core.padding
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.core.plot_area()
    }

    #[must_use]
    pub fn width_inside_padding(&self) -> f64 {
        self.core.plot_area().width
    }

    #[must_use]
    pub fn height_inside_padding(&self) -> f64 {
        self.core.plot_area().height
    }

    #[must_use]
    pub fn transform(&self) -> RenderTransform {
        self.core.transform
    }

    #[must_use]
    pub fn saved_data(&self) -> &[SavedPoint] {
        &self.core.saved_data
    }

    #[must_use]
    pub fn computed_data(&self) -> &[ComputedPoint] {
        &self.core.computed_data
    }

    #[must_use]
    pub fn computed_markers(&self) -> &[ComputedMarker] {
        &self.core.computed_markers
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.core.paused
    }
}
