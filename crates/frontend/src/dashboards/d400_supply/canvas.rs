use super::chart::{ChartBackend, Rect, TextAlign};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT: &str = "12px sans-serif";
const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 400.0;

/// [`ChartBackend`] over a 2D canvas context
pub struct CanvasBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasBackend {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or_else(|| "2d context is not available".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| format!("{e:?}"))?;
        Ok(Self { canvas, ctx })
    }
}

impl ChartBackend for CanvasBackend {
    fn size(&self) -> (f64, f64) {
        let width = self.canvas.client_width() as f64;
        let height = self.canvas.client_height() as f64;
        if width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        }
    }

    fn begin_frame(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_font(FONT);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(line_width);
        ctx.begin_path();
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke();
    }

    fn text(&mut self, text: &str, at: (f64, f64), align: TextAlign, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        if let Err(e) = self.ctx.fill_text(text, at.0, at.1) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn teardown(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}
