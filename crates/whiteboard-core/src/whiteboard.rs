//! The whiteboard component.
//!
//! Owns a drawing surface plus the pointer stream and stroke renderer that
//! paint on it. Hosts translate their device events into [`PointerEvent`]s
//! and call [`Whiteboard::handle`]; the reset control maps to
//! [`Whiteboard::reset`].

use crate::config::WhiteboardConfig;
use crate::input::PointerEvent;
use crate::renderer::{RendererState, StrokeRenderer};
use crate::stream::PointerStream;
use crate::surface::{CanvasSurface, StrokeStyle};
use kurbo::{Line, Point, Vec2};
use serde::Serialize;

/// Counters since the last init or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhiteboardStats {
    pub state: RendererState,
    pub strokes: u64,
    pub segments: u64,
}

pub struct Whiteboard<S: CanvasSurface> {
    surface: S,
    style: StrokeStyle,
    /// Canvas offset inside the containing layout; subtracted from device
    /// coordinates.
    offset: Vec2,
    stream: PointerStream,
    renderer: StrokeRenderer,
}

impl<S: CanvasSurface> Whiteboard<S> {
    /// Take ownership of `surface`, clear it and apply `style`.
    pub fn new(surface: S, style: StrokeStyle) -> Self {
        let mut board = Self {
            surface,
            style,
            offset: Vec2::ZERO,
            stream: PointerStream::new(),
            renderer: StrokeRenderer::new(),
        };
        board.init();
        board
    }

    pub fn from_config(surface: S, config: &WhiteboardConfig) -> Self {
        Self::new(surface, config.stroke.clone())
    }

    fn init(&mut self) {
        self.surface.clear();
        self.surface.apply_style(&self.style);
        self.stream = PointerStream::new();
        self.renderer = StrokeRenderer::new();
        let size = self.surface.size();
        log::debug!("whiteboard initialized ({}x{})", size.width, size.height);
    }

    /// Clear the canvas and start over, dropping any stroke in progress.
    pub fn reset(&mut self) {
        if let Some(window) = self.stream.close() {
            log::debug!("reset discarded stroke #{}", window.stroke());
        }
        self.init();
    }

    /// Feed one device-coordinate event. Returns the segment painted, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Line> {
        let local = event.to_canvas(self.offset);
        let item = self.stream.feed(local)?;
        self.renderer.handle(item, &mut self.surface)
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn state(&self) -> RendererState {
        self.renderer.state()
    }

    pub fn cursor(&self) -> Point {
        self.renderer.cursor()
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn stats(&self) -> WhiteboardStats {
        WhiteboardStats {
            state: self.renderer.state(),
            strokes: self.stream.strokes_opened(),
            segments: self.renderer.segments_drawn(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use pretty_assertions::assert_eq;

    fn board() -> Whiteboard<RecordingSurface> {
        Whiteboard::new(RecordingSurface::new(900.0, 500.0), StrokeStyle::default())
    }

    #[test]
    fn new_clears_then_styles() {
        let board = board();
        assert_eq!(
            board.surface().calls(),
            &[DrawCall::Clear, DrawCall::Style(StrokeStyle::default())]
        );
        assert_eq!(board.state(), RendererState::Idle);
    }

    #[test]
    fn press_position_is_canvas_relative() {
        let mut board = board();
        board.set_offset(Vec2::new(30.0, 60.0));
        board.handle(PointerEvent::press(140.0, 170.0));
        assert_eq!(board.cursor(), Point::new(110.0, 110.0));
    }

    #[test]
    fn handle_returns_painted_segment() {
        let mut board = board();
        assert_eq!(board.handle(PointerEvent::press(1.0, 1.0)), None);
        assert_eq!(
            board.handle(PointerEvent::moved(2.0, 1.0)),
            Some(Line::new((1.0, 1.0), (2.0, 1.0)))
        );
        assert_eq!(board.handle(PointerEvent::release(2.0, 1.0)), None);
    }

    #[test]
    fn reset_mid_stroke_returns_to_idle() {
        let mut board = board();
        board.handle(PointerEvent::press(0.0, 0.0));
        board.handle(PointerEvent::moved(5.0, 5.0));
        board.reset();

        assert_eq!(board.state(), RendererState::Idle);
        assert!(board.surface().is_blank());
        assert_eq!(board.handle(PointerEvent::moved(6.0, 6.0)), None);
        assert_eq!(
            board.stats(),
            WhiteboardStats {
                state: RendererState::Idle,
                strokes: 0,
                segments: 0,
            }
        );
    }

    #[test]
    fn reset_reapplies_style() {
        let style = StrokeStyle {
            color: "#222".to_string(),
            ..StrokeStyle::default()
        };
        let mut board = Whiteboard::new(RecordingSurface::new(10.0, 10.0), style.clone());
        board.reset();
        assert_eq!(
            board.surface().calls_since_clear(),
            &[DrawCall::Style(style)]
        );
    }

    #[test]
    fn stats_serialize_as_json() {
        let mut board = board();
        board.handle(PointerEvent::press(0.0, 0.0));
        board.handle(PointerEvent::moved(1.0, 0.0));
        let json = serde_json::to_string(&board.stats()).unwrap();
        assert_eq!(json, r#"{"state":"drawing","strokes":1,"segments":1}"#);
    }
}
