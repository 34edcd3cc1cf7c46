use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// What happens to samples outside a fixed value window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowBehaviour {
    /// Domain stays at exactly `[min, max]`; overflowing samples leave the plot area.
    #[default]
    Clip,
    /// Overflowing samples stretch the domain, which never shrinks below `[min, max]`.
    Scale,
}

/// Fixed value domain replacing auto-fit of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueWindow {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub overflow_behaviour: OverflowBehaviour,
}

impl ValueWindow {
    pub fn new(min: f64, max: f64, overflow_behaviour: OverflowBehaviour) -> ChartResult<Self> {
        Self {
            min,
            max,
            overflow_behaviour,
        }
        .validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ChartError::InvalidData(
                "value window bounds must be finite with min < max".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Resolves the base value extremes from the observed data extremes.
    #[must_use]
    pub fn resolve(self, data_min: f64, data_max: f64) -> (f64, f64) {
        match self.overflow_behaviour {
            OverflowBehaviour::Clip => (self.min, self.max),
            OverflowBehaviour::Scale => (self.min.min(data_min), self.max.max(data_max)),
        }
    }
}
