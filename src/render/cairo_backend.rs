use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    RenderTarget, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo render target.
///
/// Renders offscreen into an image surface through `RenderTarget::render`, or
/// in place on a host-owned Cairo context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Rect(rect) => {
                    draw_rect(context, rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Polyline(polyline) => {
                    draw_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
                DrawCommand::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl RenderTarget for CairoRenderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::RenderTarget("surface width overflows i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::RenderTarget("surface height overflows i32".to_owned()))?;
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidViewport {
            width: width.max(0).unsigned_abs(),
            height: height.max(0).unsigned_abs(),
        });
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    context.set_dash(&[], 0.0);
    if let Some(fill) = rect.fill_color {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, fill);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    if let Some(border) = rect.border_color {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, border);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    }
    Ok(())
}

fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    if let Some((x, y, width, height)) = polyline.clip {
        context.rectangle(x, y, width, height);
        context.clip();
    }

    context.set_dash(&[], 0.0);
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    let mut points = polyline.points.iter();
    if let Some((x, y)) = points.next() {
        context.move_to(*x, *y);
    }
    for (x, y) in points {
        context.line_to(*x, *y);
    }
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err));

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    stroked
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    context.set_dash(&line.stroke_style.dash_pattern(), 0.0);
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let y = match text.v_align {
        TextVAlign::Top => text.y,
        TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
        TextVAlign::Bottom => text.y - f64::from(text_height),
    };

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::RenderTarget(format!("{prefix}: {err}"))
}
