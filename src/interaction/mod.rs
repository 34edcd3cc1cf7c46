use serde::{Deserialize, Serialize};

use crate::core::{Viewport, is_point_in_box};

/// Pointer position relative to the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorInfo {
    pub chart_x: f64,
    pub chart_y: f64,
    pub over_chart: bool,
}

impl Default for CursorInfo {
    fn default() -> Self {
        Self {
            chart_x: -1.0,
            chart_y: -1.0,
            over_chart: false,
        }
    }
}

/// Per-frame interaction state handed to every plugin hook.
///
/// Updated by the host boundary through `Timeline::pointer_move` /
/// `Timeline::pointer_leave`; plugins only read it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionContext {
    cursor: CursorInfo,
}

impl InteractionContext {
    #[must_use]
    pub fn cursor(self) -> CursorInfo {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, viewport: Viewport) {
        let over_chart = is_point_in_box(
            x,
            y,
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );
        self.cursor = if over_chart {
            CursorInfo {
                chart_x: x,
                chart_y: y,
                over_chart,
            }
        } else {
            CursorInfo::default()
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = CursorInfo::default();
    }
}
