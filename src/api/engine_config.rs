use serde::{Deserialize, Serialize};

use crate::core::{Padding, TimeWindow, ValueWindow};
use crate::error::{ChartError, ChartResult};
use crate::extensions::Marker;
use crate::render::Color;

/// Public timeline bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Plugins are code and are handed
/// to `TimelineBuilder` separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub time_window: TimeWindow,
    #[serde(default)]
    pub value_window: Option<ValueWindow>,
    /// Opaque to the engine; consumed by axis plugins.
    #[serde(default)]
    pub time_axis_label: Option<String>,
    #[serde(default)]
    pub value_axis_label: Option<String>,
    /// Base insets before plugin contributions.
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_foreground_colour")]
    pub foreground_colour: Color,
    #[serde(default = "default_background_colour")]
    pub background_colour: Color,
    #[serde(default = "default_marker_line_width")]
    pub marker_line_width: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            time_window: TimeWindow::default(),
            value_window: None,
            time_axis_label: None,
            value_axis_label: None,
            padding: Padding::default(),
            line_width: default_line_width(),
            foreground_colour: default_foreground_colour(),
            background_colour: default_background_colour(),
            marker_line_width: default_marker_line_width(),
            label_font_size_px: default_label_font_size_px(),
            markers: Vec::new(),
        }
    }
}

impl TimelineConfig {
    /// Creates a config keeping the trailing `millis` of data.
    #[must_use]
    pub fn bounded(millis: f64) -> Self {
        Self::default().with_time_window(TimeWindow::bounded(millis))
    }

    #[must_use]
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = time_window;
        self
    }

    #[must_use]
    pub fn with_value_window(mut self, value_window: ValueWindow) -> Self {
        self.value_window = Some(value_window);
        self
    }

    #[must_use]
    pub fn with_time_axis_label(mut self, label: impl Into<String>) -> Self {
        self.time_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_value_axis_label(mut self, label: impl Into<String>) -> Self {
        self.value_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_foreground_colour(mut self, colour: Color) -> Self {
        self.foreground_colour = colour;
        self
    }

    #[must_use]
    pub fn with_background_colour(mut self, colour: Color) -> Self {
        self.background_colour = colour;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.time_window.validate()?;
        if let Some(window) = self.value_window {
            window.validate()?;
        }
        self.padding.validate()?;
        for (name, value) in [
            ("line width", self.line_width),
            ("marker line width", self.marker_line_width),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        self.foreground_colour.validate()?;
        self.background_colour.validate()?;
        for marker in &self.markers {
            marker.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_line_width() -> f64 {
    0.8
}

fn default_foreground_colour() -> Color {
    Color::BLACK
}

fn default_background_colour() -> Color {
    Color::WHITE
}

fn default_marker_line_width() -> f64 {
    1.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}
