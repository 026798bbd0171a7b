//! Canvas2D renderer - replays DrawCommands onto an HTML5 canvas.

use super::surface::MountError;
use backdrop_core::{Color, DrawCommand, Point, RadialGradient, Size};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;

        Ok(Self { canvas, ctx })
    }

    /// Current surface size in CSS pixels.
    pub fn size(&self) -> Size {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Resize the backing store. Resizing also clears it.
    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height(size.height as u32);
    }

    /// Render a list of draw commands.
    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            self.render_command(cmd);
        }
    }

    fn render_command(&self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Clear { .. } => self.clear(),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => self.draw_line(*from, *to, color, *width),
            DrawCommand::GradientCircle {
                center,
                radius,
                gradient,
            } => self.draw_gradient_circle(*center, *radius, gradient),
        }
    }

    fn clear(&self) {
        // Clear the real backing store; a resize may have landed since the
        // command was recorded.
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn draw_line(&self, from: Point, to: Point, color: &Color, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(f64::from(width));
        self.ctx.stroke();
    }

    fn draw_gradient_circle(&self, center: Point, radius: f32, gradient: &RadialGradient) {
        let (x, y) = (f64::from(center.x), f64::from(center.y));
        let Ok(fill) = self.ctx.create_radial_gradient(
            x,
            y,
            f64::from(gradient.inner_radius),
            x,
            y,
            f64::from(gradient.outer_radius),
        ) else {
            return;
        };
        fill.add_color_stop(0.0, &gradient.inner.to_css()).ok();
        fill.add_color_stop(1.0, &gradient.outer.to_css()).ok();

        self.ctx.begin_path();
        self.ctx
            .arc(x, y, f64::from(radius), 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.fill();
    }
}
