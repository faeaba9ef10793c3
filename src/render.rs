use crate::core::StreakMark;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Acquire the 2D drawing context, or `None` when the host cannot provide
/// one (the caller degrades to a logged no-op).
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

/// Thin drawing layer over the 2D context: full clear, then one
/// round-capped stroke per mark. All projection math lives in the core.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    color: String,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d, color: String) -> Self {
        Self { ctx, color }
    }

    pub fn draw(&self, width: f32, height: f32, marks: &[StreakMark]) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_stroke_style_str(&self.color);
        for mark in marks {
            self.ctx.set_global_alpha(mark.alpha as f64);
            self.ctx.set_line_width(mark.width as f64);
            self.ctx.begin_path();
            self.ctx.move_to(mark.x1 as f64, mark.y1 as f64);
            self.ctx.line_to(mark.x2 as f64, mark.y2 as f64);
            self.ctx.stroke();
        }
        self.ctx.set_global_alpha(1.0);
    }
}
