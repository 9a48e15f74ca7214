//! Stroke renderer.
//!
//! Two-state machine driven by the pointer stream:
//!
//! | From    | Item     | To      | Effect                                |
//! |---------|----------|---------|---------------------------------------|
//! | Idle    | Opened   | Drawing | record start position                 |
//! | Drawing | Opened   | Drawing | restart at the new position           |
//! | Drawing | Move     | Drawing | paint one segment, advance the cursor |
//! | Drawing | Closed   | Idle    |                                       |
//!
//! Each move paints its own path, from `begin_path` to `close_path`, so every
//! segment gets its own end caps instead of joining into one polyline.

use crate::stream::StreamItem;
use crate::surface::CanvasSurface;
use kurbo::{Line, Point};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererState {
    #[default]
    Idle,
    Drawing,
}

impl RendererState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing => "drawing",
        }
    }
}

#[derive(Debug, Default)]
pub struct StrokeRenderer {
    state: RendererState,
    /// Last known canvas-relative pointer position. Survives a release; only
    /// the next press moves it without drawing.
    cursor: Point,
    segments: u64,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Segments painted since this renderer was created.
    pub fn segments_drawn(&self) -> u64 {
        self.segments
    }

    /// Apply one stream item. Returns the segment painted, if any.
    pub fn handle<S>(&mut self, item: StreamItem, surface: &mut S) -> Option<Line>
    where
        S: CanvasSurface + ?Sized,
    {
        match item {
            StreamItem::Opened { position, .. } => {
                self.state = RendererState::Drawing;
                self.cursor = position;
                None
            }
            StreamItem::Move { position, .. } => {
                if self.state != RendererState::Drawing {
                    return None;
                }
                Some(self.paint_segment(position, surface))
            }
            StreamItem::Closed { .. } => {
                self.state = RendererState::Idle;
                None
            }
        }
    }

    fn paint_segment<S>(&mut self, to: Point, surface: &mut S) -> Line
    where
        S: CanvasSurface + ?Sized,
    {
        surface.begin_path();
        let from = self.cursor;
        surface.move_to(from);
        self.cursor = to;
        surface.line_to(to);
        surface.stroke();
        surface.close_path();

        self.segments += 1;
        log::trace!("SEGMENT ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
        Line::new(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;
    use crate::stream::PointerStream;
    use crate::surface::{DrawCall, RecordingSurface};
    use pretty_assertions::assert_eq;

    fn drive(events: &[PointerEvent]) -> (StrokeRenderer, RecordingSurface) {
        let mut stream = PointerStream::new();
        let mut renderer = StrokeRenderer::new();
        let mut surface = RecordingSurface::new(900.0, 500.0);
        for event in events {
            if let Some(item) = stream.feed(*event) {
                renderer.handle(item, &mut surface);
            }
        }
        (renderer, surface)
    }

    #[test]
    fn starts_idle_at_origin() {
        let renderer = StrokeRenderer::new();
        assert_eq!(renderer.state(), RendererState::Idle);
        assert_eq!(renderer.cursor(), Point::ORIGIN);
    }

    #[test]
    fn press_records_start_without_drawing() {
        let (renderer, surface) = drive(&[PointerEvent::press(12.0, 34.0)]);
        assert_eq!(renderer.state(), RendererState::Drawing);
        assert_eq!(renderer.cursor(), Point::new(12.0, 34.0));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn move_paints_one_closed_path() {
        let (renderer, surface) = drive(&[
            PointerEvent::press(0.0, 0.0),
            PointerEvent::moved(4.0, 3.0),
        ]);
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::BeginPath,
                DrawCall::MoveTo(Point::new(0.0, 0.0)),
                DrawCall::LineTo(Point::new(4.0, 3.0)),
                DrawCall::Stroke,
                DrawCall::ClosePath,
            ]
        );
        assert_eq!(renderer.segments_drawn(), 1);
        assert_eq!(renderer.cursor(), Point::new(4.0, 3.0));
    }

    #[test]
    fn release_returns_to_idle_and_keeps_cursor() {
        let (renderer, _) = drive(&[
            PointerEvent::press(0.0, 0.0),
            PointerEvent::moved(7.0, 7.0),
            PointerEvent::release(50.0, 50.0),
        ]);
        assert_eq!(renderer.state(), RendererState::Idle);
        assert_eq!(renderer.cursor(), Point::new(7.0, 7.0));
    }

    #[test]
    fn move_item_while_idle_is_ignored() {
        let mut stream = PointerStream::new();
        let mut renderer = StrokeRenderer::new();
        let mut surface = RecordingSurface::new(10.0, 10.0);

        // Window opened on the stream but the renderer never saw it.
        stream.feed(PointerEvent::press(0.0, 0.0));
        let item = stream.feed(PointerEvent::moved(1.0, 1.0)).unwrap();
        assert_eq!(renderer.handle(item, &mut surface), None);
        assert!(surface.is_blank());
    }

    #[test]
    fn state_names() {
        assert_eq!(RendererState::Idle.as_str(), "idle");
        assert_eq!(RendererState::Drawing.as_str(), "drawing");
    }
}
