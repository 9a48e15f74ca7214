//! Canvas2D drawing surface.
//!
//! Implements `CanvasSurface` directly over an HTML `<canvas>` through
//! `CanvasRenderingContext2d`. Every call paints immediately.

use kurbo::{Point, Size};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use whiteboard_core::{CanvasSurface, StrokeStyle};

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    size: Size,
}

impl Canvas2dSurface {
    /// Acquire the 2D context of a mounted canvas.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| crate::js_error("canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let size = Size::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { ctx, size })
    }
}

impl CanvasSurface for Canvas2dSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    fn apply_style(&mut self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_line_cap(style.line_cap.as_str());
        self.ctx.set_line_join(style.line_join.as_str());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}
