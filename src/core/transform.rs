use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ComputedPoint, Padding, SavedPoint, TimeWindow, ValueWindow, Viewport};

/// Fraction of the resolved span added on a side that an always-show anchor extended.
pub const FORCED_EXTENT_PADDING_RATIO: f64 = 0.02;

/// Span substituted when an axis collapses to a single value.
pub const MIN_AXIS_SPAN: f64 = 1.0;

/// Pixel rectangle inside the padding where data is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Derives the plot rectangle; sizes clamp to zero when padding exceeds the viewport.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, padding: Padding) -> Self {
        let width = f64::from(viewport.width) - padding.left - padding.right;
        let height = f64::from(viewport.height) - padding.top - padding.bottom;
        Self {
            left: padding.left,
            top: padding.top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        self.left <= x && x <= self.right()
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        self.top <= y && y <= self.bottom()
    }
}

/// Always-show anchors that may widen the domain on each axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForcedExtents<'a> {
    pub times: &'a [f64],
    pub values: &'a [f64],
}

/// Offset/multiplier pairs mapping time and value onto pixel space.
///
/// `render_x = plot.left + (time + time_offset) * time_multiplier`
/// `render_y = plot.top + plot.height - (value + value_offset) * value_multiplier`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderTransform {
    pub time_offset: f64,
    pub time_multiplier: f64,
    pub value_offset: f64,
    pub value_multiplier: f64,
    /// Unused window time; negative when saved data overflows the window.
    pub extra_time: f64,
}

impl Default for RenderTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RenderTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            time_offset: 0.0,
            time_multiplier: 1.0,
            value_offset: 0.0,
            value_multiplier: 1.0,
            extra_time: 0.0,
        }
    }

    /// Derives transform parameters for one compute cycle.
    ///
    /// Fewer than two saved samples yields [`RenderTransform::identity`].
    #[must_use]
    pub fn derive(
        saved: &[SavedPoint],
        time_window: TimeWindow,
        value_window: Option<ValueWindow>,
        forced: ForcedExtents<'_>,
        plot: PlotArea,
    ) -> Self {
        let (Some(first), Some(last)) = (saved.first(), saved.last()) else {
            return Self::identity();
        };
        if saved.len() < 2 {
            return Self::identity();
        }

        let used_time = last.time - first.time;
        let (extra_time, time_start, time_end) = match time_window.duration() {
            Some(window) => (window - used_time, last.time - window, last.time),
            None => (0.0, first.time, last.time),
        };
        let (time_start, time_end) = expand_with_forced(time_start, time_end, forced.times);
        let (time_start, time_end) = ensure_span(time_start, time_end, "time");

        let (data_min, data_max) = saved.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), point| (min.min(point.value), max.max(point.value)),
        );
        let (value_min, value_max) = match value_window {
            Some(window) => window.resolve(data_min, data_max),
            None => (data_min, data_max),
        };
        let (value_min, value_max) = expand_with_forced(value_min, value_max, forced.values);
        let (value_min, value_max) = ensure_span(value_min, value_max, "value");

        Self {
            time_offset: -time_start,
            time_multiplier: axis_multiplier(plot.width, time_start, time_end),
            value_offset: -value_min,
            value_multiplier: axis_multiplier(plot.height, value_min, value_max),
            extra_time,
        }
    }

    #[must_use]
    pub fn render_x(&self, time: f64, plot: PlotArea) -> f64 {
        plot.left + shift_and_scale(time, self.time_offset, self.time_multiplier)
    }

    #[must_use]
    pub fn render_y(&self, value: f64, plot: PlotArea) -> f64 {
        plot.top + plot.height - shift_and_scale(value, self.value_offset, self.value_multiplier)
    }

    /// Inverse of [`RenderTransform::render_x`]; `None` while the time axis has no extent.
    #[must_use]
    pub fn time_at_render_x(&self, x: f64, plot: PlotArea) -> Option<f64> {
        if self.time_multiplier == 0.0 {
            return None;
        }
        Some(unscale_and_shift(x - plot.left, self.time_offset, self.time_multiplier))
    }

    /// Inverse of [`RenderTransform::render_y`]; `None` while the value axis has no extent.
    #[must_use]
    pub fn value_at_render_y(&self, y: f64, plot: PlotArea) -> Option<f64> {
        if self.value_multiplier == 0.0 {
            return None;
        }
        Some(unscale_and_shift(
            plot.top + plot.height - y,
            self.value_offset,
            self.value_multiplier,
        ))
    }

    #[must_use]
    pub fn project(&self, point: SavedPoint, plot: PlotArea) -> ComputedPoint {
        ComputedPoint {
            time: point.time,
            value: point.value,
            render_x: self.render_x(point.time, plot),
            render_y: self.render_y(point.value, plot),
        }
    }
}

/// Projects saved samples into a freshly allocated computed list.
#[must_use]
pub fn project_points(
    saved: &[SavedPoint],
    transform: &RenderTransform,
    plot: PlotArea,
) -> Vec<ComputedPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        saved
            .par_iter()
            .map(|point| transform.project(*point, plot))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        saved
            .iter()
            .map(|point| transform.project(*point, plot))
            .collect()
    }
}

/// Widens `[min, max]` to include every forced anchor, then pads each side
/// that an anchor reached by a fraction of the resulting span.
fn expand_with_forced(mut min: f64, mut max: f64, forced: &[f64]) -> (f64, f64) {
    let mut toward_min = false;
    let mut toward_max = false;

    for &anchor in forced.iter().filter(|anchor| anchor.is_finite()) {
        if anchor >= max {
            max = anchor;
            toward_max = true;
        }
        if anchor <= min {
            min = anchor;
            toward_min = true;
        }
    }

    let span = max - min;
    if span.is_finite() && span > 0.0 {
        if toward_max {
            max += span * FORCED_EXTENT_PADDING_RATIO;
        }
        if toward_min {
            min -= span * FORCED_EXTENT_PADDING_RATIO;
        }
    }

    (min, max)
}

/// Pixels per domain unit. Extents wider than `f64::MAX` are measured in halves.
fn axis_multiplier(extent: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        extent / span
    } else {
        (extent / 2.0) / (end / 2.0 - start / 2.0)
    }
}

/// `(domain + offset) * multiplier`, distributing the product when the shift
/// alone overflows.
fn shift_and_scale(domain: f64, offset: f64, multiplier: f64) -> f64 {
    let shifted = domain + offset;
    if shifted.is_finite() {
        shifted * multiplier
    } else {
        domain * multiplier + offset * multiplier
    }
}

/// `pixels / multiplier - offset`, evaluated in halves when the quotient
/// overflows.
fn unscale_and_shift(pixels: f64, offset: f64, multiplier: f64) -> f64 {
    let unscaled = pixels / multiplier;
    if unscaled.is_finite() {
        unscaled - offset
    } else {
        (pixels / 2.0 / multiplier - offset / 2.0) * 2.0
    }
}

fn ensure_span(min: f64, max: f64, axis: &'static str) -> (f64, f64) {
    if min.is_finite() && max.is_finite() && max > min {
        return (min, max);
    }

    let center = match (min.is_finite(), max.is_finite()) {
        (true, true) => min / 2.0 + max / 2.0,
        (true, false) => min,
        (false, true) => max,
        (false, false) => 0.0,
    };
    debug!(axis, min, max, "axis extent collapsed; using minimum span");
    (center - MIN_AXIS_SPAN / 2.0, center + MIN_AXIS_SPAN / 2.0)
}
