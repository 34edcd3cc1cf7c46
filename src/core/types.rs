use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_epoch_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Drawable pixel size reported by a render target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Per-side pixel insets around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "padding `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Accumulates padding contributions during construction.
///
/// Plugins add insets from their `construct` hook; the engine calls
/// [`PaddingBuilder::finish`] once and keeps the result for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddingBuilder {
    accumulated: Padding,
}

impl PaddingBuilder {
    #[must_use]
    pub fn from_base(base: Padding) -> Self {
        Self { accumulated: base }
    }

    pub fn add_top(&mut self, inset: f64) -> &mut Self {
        self.accumulated.top += inset;
        self
    }

    pub fn add_right(&mut self, inset: f64) -> &mut Self {
        self.accumulated.right += inset;
        self
    }

    pub fn add_bottom(&mut self, inset: f64) -> &mut Self {
        self.accumulated.bottom += inset;
        self
    }

    pub fn add_left(&mut self, inset: f64) -> &mut Self {
        self.accumulated.left += inset;
        self
    }

    #[must_use]
    pub fn current(&self) -> Padding {
        self.accumulated
    }

    pub fn finish(self) -> ChartResult<Padding> {
        self.accumulated.validate()
    }
}

/// Sample timestamp as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleTime {
    /// Milliseconds since the Unix epoch.
    EpochMillis(f64),
    Date(DateTime<Utc>),
}

impl SampleTime {
    /// Normalizes to plain epoch milliseconds.
    #[must_use]
    pub fn as_millis(self) -> f64 {
        match self {
            Self::EpochMillis(millis) => millis,
            Self::Date(time) => datetime_to_epoch_millis(time),
        }
    }
}

impl From<f64> for SampleTime {
    fn from(value: f64) -> Self {
        Self::EpochMillis(value)
    }
}

impl From<i64> for SampleTime {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value as f64)
    }
}

impl From<DateTime<Utc>> for SampleTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Caller-owned input sample.
///
/// Sequences handed to the engine must be sorted ascending by time. The engine
/// does not sort or validate ordering; unsorted input yields unspecified
/// windowing but never panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub time: SampleTime,
    pub value: f64,
}

impl RawPoint {
    #[must_use]
    pub fn new(time: impl Into<SampleTime>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
        }
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(time, decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn normalized(self) -> SavedPoint {
        SavedPoint {
            time: self.time.as_millis(),
            value: self.value,
        }
    }
}

/// Engine-owned, normalized copy of one sample inside the active window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPoint {
    pub time: f64,
    pub value: f64,
}

impl SavedPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Saved sample together with its pixel-space projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedPoint {
    pub time: f64,
    pub value: f64,
    pub render_x: f64,
    pub render_y: f64,
}

impl ComputedPoint {
    #[must_use]
    pub fn saved(self) -> SavedPoint {
        SavedPoint::new(self.time, self.value)
    }
}
