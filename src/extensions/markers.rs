use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, RenderTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive, TextVAlign};

/// Gap between a marker line and its label.
pub const MARKER_LABEL_GAP_PX: f64 = 4.0;

/// Offset applied along the marker's own axis for dotted lines, which keeps
/// the dot run centered on the projected coordinate.
pub const DOTTED_MARKER_SHIFT_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerOrientation {
    Vertical,
    Horizontal,
}

/// Where a label sits relative to its marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSide {
    Before,
    #[default]
    After,
    Center,
}

/// Domain anchor of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    /// Vertical line at a point in time.
    Time { time: f64 },
    /// Horizontal line at a value.
    Value { value: f64 },
}

impl MarkerKind {
    #[must_use]
    pub fn orientation(self) -> MarkerOrientation {
        match self {
            Self::Time { .. } => MarkerOrientation::Vertical,
            Self::Value { .. } => MarkerOrientation::Horizontal,
        }
    }
}

/// Reference line annotating the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    #[serde(default)]
    pub label: Option<String>,
    /// Forces the domain to include this marker.
    #[serde(default)]
    pub always_show: bool,
    #[serde(default)]
    pub label_side: LabelSide,
    #[serde(default)]
    pub line_style: LineStrokeStyle,
    /// Falls back to the chart foreground colour when unset.
    #[serde(default)]
    pub colour: Option<Color>,
}

impl Marker {
    #[must_use]
    pub fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            label: None,
            always_show: false,
            label_side: LabelSide::default(),
            line_style: LineStrokeStyle::default(),
            colour: None,
        }
    }

    #[must_use]
    pub fn time(time: f64) -> Self {
        Self::new(MarkerKind::Time { time })
    }

    #[must_use]
    pub fn value(value: f64) -> Self {
        Self::new(MarkerKind::Value { value })
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_always_show(mut self, always_show: bool) -> Self {
        self.always_show = always_show;
        self
    }

    #[must_use]
    pub fn with_label_side(mut self, label_side: LabelSide) -> Self {
        self.label_side = label_side;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStrokeStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }

    #[must_use]
    pub fn orientation(&self) -> MarkerOrientation {
        self.kind.orientation()
    }

    pub fn validate(&self) -> ChartResult<()> {
        let anchor = match self.kind {
            MarkerKind::Time { time } => time,
            MarkerKind::Value { value } => value,
        };
        if !anchor.is_finite() {
            return Err(ChartError::InvalidMarker(
                "marker time/value must be finite".to_owned(),
            ));
        }
        if self.label.as_deref().is_some_and(str::is_empty) {
            return Err(ChartError::InvalidMarker(
                "marker label must not be empty".to_owned(),
            ));
        }
        if let Some(colour) = self.colour {
            colour.validate()?;
        }
        Ok(())
    }
}

/// Loosely shaped marker input whose orientation comes from which domain
/// field is present. Converting it into a [`Marker`] rejects inputs with
/// neither or both fields set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub always_show: bool,
    #[serde(default)]
    pub label_side: LabelSide,
    #[serde(default)]
    pub line_style: LineStrokeStyle,
    #[serde(default)]
    pub colour: Option<Color>,
}

impl TryFrom<MarkerSpec> for Marker {
    type Error = ChartError;

    fn try_from(spec: MarkerSpec) -> ChartResult<Self> {
        let kind = match (spec.time, spec.value) {
            (Some(time), None) => MarkerKind::Time { time },
            (None, Some(value)) => MarkerKind::Value { value },
            (Some(_), Some(_)) => {
                return Err(ChartError::InvalidMarker(
                    "marker sets both `time` and `value`; orientation is ambiguous".to_owned(),
                ));
            }
            (None, None) => {
                return Err(ChartError::InvalidMarker(
                    "marker needs exactly one of `time` or `value`".to_owned(),
                ));
            }
        };

        let marker = Self {
            kind,
            label: spec.label,
            always_show: spec.always_show,
            label_side: spec.label_side,
            line_style: spec.line_style,
            colour: spec.colour,
        };
        marker.validate()?;
        Ok(marker)
    }
}

/// Pixel coordinate of a marker on its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerProjection {
    RenderX(f64),
    RenderY(f64),
}

/// Marker projected for the current compute cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedMarker {
    pub marker: Marker,
    pub projection: MarkerProjection,
}

impl ComputedMarker {
    #[must_use]
    pub fn render_x(&self) -> Option<f64> {
        match self.projection {
            MarkerProjection::RenderX(x) => Some(x),
            MarkerProjection::RenderY(_) => None,
        }
    }

    #[must_use]
    pub fn render_y(&self) -> Option<f64> {
        match self.projection {
            MarkerProjection::RenderY(y) => Some(y),
            MarkerProjection::RenderX(_) => None,
        }
    }

    /// `true` when the projected coordinate lies inside the plot area on the
    /// marker's axis.
    #[must_use]
    pub fn is_visible(&self, plot: PlotArea) -> bool {
        match self.projection {
            MarkerProjection::RenderX(x) => x.is_finite() && plot.contains_x(x),
            MarkerProjection::RenderY(y) => y.is_finite() && plot.contains_y(y),
        }
    }
}

/// Always-show anchors split by axis, for domain expansion.
#[must_use]
pub fn forced_anchors(markers: &[Marker]) -> (Vec<f64>, Vec<f64>) {
    let mut times = Vec::new();
    let mut values = Vec::new();
    for marker in markers.iter().filter(|marker| marker.always_show) {
        match marker.kind {
            MarkerKind::Time { time } => times.push(time),
            MarkerKind::Value { value } => values.push(value),
        }
    }
    (times, values)
}

/// Projects every marker along its own axis with the data transform.
#[must_use]
pub fn project_markers(
    markers: &[Marker],
    transform: &RenderTransform,
    plot: PlotArea,
) -> Vec<ComputedMarker> {
    markers
        .iter()
        .map(|marker| {
            let projection = match marker.kind {
                MarkerKind::Time { time } => {
                    MarkerProjection::RenderX(transform.render_x(time, plot))
                }
                MarkerKind::Value { value } => {
                    MarkerProjection::RenderY(transform.render_y(value, plot))
                }
            };
            ComputedMarker {
                marker: marker.clone(),
                projection,
            }
        })
        .collect()
}

/// Styling shared by every marker in one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDrawStyle {
    pub default_colour: Color,
    pub line_width: f64,
    pub font_size_px: f64,
}

/// Builds the line and optional label for a visible marker.
#[must_use]
pub fn marker_primitives(
    computed: &ComputedMarker,
    plot: PlotArea,
    style: MarkerDrawStyle,
) -> (LinePrimitive, Option<TextPrimitive>) {
    let marker = &computed.marker;
    let colour = marker.colour.unwrap_or(style.default_colour);
    let shift = if marker.line_style == LineStrokeStyle::Dotted {
        DOTTED_MARKER_SHIFT_PX
    } else {
        0.0
    };

    match computed.projection {
        MarkerProjection::RenderX(x) => {
            let x = x + shift;
            let line = LinePrimitive::new(x, plot.top, x, plot.bottom(), style.line_width, colour)
                .with_stroke_style(marker.line_style);
            let label = marker.label.as_ref().map(|text| {
                let (label_x, h_align) = match marker.label_side {
                    LabelSide::Before => (x - MARKER_LABEL_GAP_PX, TextHAlign::Right),
                    LabelSide::After => (x + MARKER_LABEL_GAP_PX, TextHAlign::Left),
                    LabelSide::Center => (x, TextHAlign::Center),
                };
                TextPrimitive::new(
                    text.clone(),
                    label_x,
                    plot.top + MARKER_LABEL_GAP_PX,
                    style.font_size_px,
                    colour,
                    h_align,
                )
            });
            (line, label)
        }
        MarkerProjection::RenderY(y) => {
            let y = y + shift;
            let line = LinePrimitive::new(plot.left, y, plot.right(), y, style.line_width, colour)
                .with_stroke_style(marker.line_style);
            let label = marker.label.as_ref().map(|text| {
                let (label_y, v_align) = match marker.label_side {
                    LabelSide::Before => (y - MARKER_LABEL_GAP_PX, TextVAlign::Bottom),
                    LabelSide::After => (y + MARKER_LABEL_GAP_PX, TextVAlign::Top),
                    LabelSide::Center => (y, TextVAlign::Middle),
                };
                TextPrimitive::new(
                    text.clone(),
                    plot.left + MARKER_LABEL_GAP_PX,
                    label_y,
                    style.font_size_px,
                    colour,
                    TextHAlign::Left,
                )
                .with_v_align(v_align)
            });
            (line, label)
        }
    }
}
