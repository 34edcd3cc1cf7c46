use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{RawPoint, SavedPoint};
use crate::error::{ChartError, ChartResult};

/// Trailing duration of data kept relevant for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// Keep everything; the time axis spans first to latest sample.
    #[default]
    Unbounded,
    /// Keep the trailing `millis` of data, anchored at the latest sample.
    Bounded { millis: f64 },
}

impl TimeWindow {
    #[must_use]
    pub fn bounded(millis: f64) -> Self {
        Self::Bounded { millis }
    }

    #[must_use]
    pub fn duration(self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::Bounded { millis } => Some(millis),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Self::Bounded { millis } = self {
            if !millis.is_finite() || millis <= 0.0 {
                return Err(ChartError::InvalidData(
                    "time window must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Returns the index of the first raw sample that belongs to the saved slice.
///
/// The scan walks backward from the latest sample and stops at the first
/// sample whose gap to the latest exceeds the window. That sample is kept so
/// the left edge can be interpolated between it and its right neighbour.
/// With no window, or when nothing exceeds it, the whole sequence is kept.
#[must_use]
pub fn window_start_index(raw: &[RawPoint], window: TimeWindow) -> usize {
    let Some(window) = window.duration() else {
        return 0;
    };
    let Some(latest_time) = raw
        .iter()
        .rev()
        .map(|point| point.time.as_millis())
        .find(|time| time.is_finite())
    else {
        return 0;
    };

    raw.iter()
        .rposition(|point| latest_time - point.time.as_millis() > window)
        .unwrap_or(0)
}

/// Copies and normalizes the active window out of the caller's sequence.
///
/// Samples with a non-finite time or value are dropped from the copy.
#[must_use]
pub fn save_window(raw: &[RawPoint], window: TimeWindow) -> Vec<SavedPoint> {
    let start = window_start_index(raw, window);
    let window_len = raw.len() - start;
    let saved: Vec<SavedPoint> = raw[start..]
        .iter()
        .map(|point| point.normalized())
        .filter(|point| point.time.is_finite() && point.value.is_finite())
        .collect();

    let dropped = window_len - saved.len();
    if dropped > 0 {
        warn!(dropped, window_len, "dropped non-finite samples from the saved window");
    }
    saved
}

/// Linear interpolation of the value at `at` between two samples.
#[must_use]
pub fn interpolate_value(first: SavedPoint, second: SavedPoint, at: f64) -> f64 {
    let slope = (second.value - first.value) / (second.time - first.time);
    first.value + slope * (at - first.time)
}

/// Replaces the retained out-of-window sample with a synthetic sample sitting
/// exactly on the window edge.
///
/// Applies only when `extra_time` is negative and at least three samples are
/// saved. Returns `true` when the first sample was replaced.
pub fn interpolate_window_edge(saved: &mut [SavedPoint], window: f64, extra_time: f64) -> bool {
    if extra_time >= 0.0 || saved.len() < 3 {
        return false;
    }

    let latest = saved[saved.len() - 1].time;
    let edge = latest - window;
    let (first, second) = (saved[0], saved[1]);

    if second.time <= first.time || !(first.time..=second.time).contains(&edge) {
        warn!(
            first_time = first.time,
            second_time = second.time,
            edge,
            "window edge is not bracketed by the first two samples; skipping interpolation"
        );
        return false;
    }

    saved[0] = SavedPoint::new(edge, interpolate_value(first, second, edge));
    true
}
