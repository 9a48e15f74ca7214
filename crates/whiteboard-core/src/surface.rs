//! Drawing surface abstraction.
//!
//! `CanvasSurface` is the immediate-mode subset of the Canvas2D API the
//! stroke renderer needs. Every call mutates pixels at once; there is no
//! batching and no retained scene. The browser bridge implements it over
//! `CanvasRenderingContext2d`; [`RecordingSurface`] implements it headlessly
//! by logging each call.

use kurbo::{Line, Point, Size};
use serde::{Deserialize, Serialize};

// ─── Style ───────────────────────────────────────────────────────────────

/// How the ends of a stroked segment are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// Canvas2D `lineCap` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// How consecutive path segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineJoin {
    /// Canvas2D `lineJoin` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Pen settings applied to the surface on every (re)initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Any CSS color string. Default: **white** (chalk on a dark board).
    pub color: String,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "white".to_string(),
            line_width: 8.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}

// ─── Surface trait ───────────────────────────────────────────────────────

/// A fixed-size, immediate-mode 2D drawing target.
pub trait CanvasSurface {
    fn size(&self) -> Size;

    /// Erase every pixel.
    fn clear(&mut self);

    fn apply_style(&mut self, style: &StrokeStyle);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);

    /// Paint the current path with the active style.
    fn stroke(&mut self);
    fn close_path(&mut self);
}

// ─── Recording surface ───────────────────────────────────────────────────

/// One primitive call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Style(StrokeStyle),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    ClosePath,
}

/// Headless surface that logs every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            calls: Vec::new(),
        }
    }

    /// Full call log, including calls from before the last clear.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls made since the most recent `clear()`.
    pub fn calls_since_clear(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Clear))
            .map_or(0, |idx| idx + 1);
        &self.calls[start..]
    }

    /// Number of times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear))
            .count()
    }

    /// Line segments currently visible: every `line_to` that was part of a
    /// stroked path since the last clear, in paint order.
    pub fn segments(&self) -> Vec<Line> {
        let mut painted = Vec::new();
        let mut path: Vec<Line> = Vec::new();
        let mut pen: Option<Point> = None;

        for call in self.calls_since_clear() {
            match call {
                DrawCall::BeginPath => {
                    path.clear();
                    pen = None;
                }
                DrawCall::MoveTo(p) => pen = Some(*p),
                DrawCall::LineTo(p) => {
                    if let Some(from) = pen {
                        path.push(Line::new(from, *p));
                    }
                    pen = Some(*p);
                }
                DrawCall::Stroke => painted.extend(path.iter().copied()),
                DrawCall::Clear | DrawCall::Style(_) | DrawCall::ClosePath => {}
            }
        }
        painted
    }

    /// `true` if nothing has been stroked since the last clear.
    pub fn is_blank(&self) -> bool {
        !self
            .calls_since_clear()
            .iter()
            .any(|call| matches!(call, DrawCall::Stroke))
    }

    /// Style most recently applied, if any.
    pub fn current_style(&self) -> Option<&StrokeStyle> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Style(style) => Some(style),
            _ => None,
        })
    }
}

impl CanvasSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn apply_style(&mut self, style: &StrokeStyle) {
        self.calls.push(DrawCall::Style(style.clone()));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draw_line(surface: &mut RecordingSurface, from: (f64, f64), to: (f64, f64)) {
        surface.begin_path();
        surface.move_to(from.into());
        surface.line_to(to.into());
        surface.stroke();
        surface.close_path();
    }

    #[test]
    fn new_surface_is_blank() {
        let surface = RecordingSurface::new(900.0, 500.0);
        assert!(surface.is_blank());
        assert_eq!(surface.size(), Size::new(900.0, 500.0));
        assert!(surface.segments().is_empty());
    }

    #[test]
    fn stroked_lines_become_segments() {
        let mut surface = RecordingSurface::new(900.0, 500.0);
        draw_line(&mut surface, (0.0, 0.0), (10.0, 0.0));
        draw_line(&mut surface, (10.0, 0.0), (10.0, 10.0));

        assert_eq!(
            surface.segments(),
            vec![
                Line::new((0.0, 0.0), (10.0, 0.0)),
                Line::new((10.0, 0.0), (10.0, 10.0)),
            ]
        );
        assert!(!surface.is_blank());
    }

    #[test]
    fn unstroked_path_leaves_no_pixels() {
        let mut surface = RecordingSurface::new(900.0, 500.0);
        surface.begin_path();
        surface.move_to(Point::new(1.0, 1.0));
        surface.line_to(Point::new(2.0, 2.0));
        surface.close_path();

        assert!(surface.is_blank());
        assert!(surface.segments().is_empty());
    }

    #[test]
    fn clear_wipes_segments_but_keeps_log() {
        let mut surface = RecordingSurface::new(900.0, 500.0);
        draw_line(&mut surface, (0.0, 0.0), (5.0, 5.0));
        surface.clear();

        assert!(surface.is_blank());
        assert!(surface.segments().is_empty());
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.calls().len(), 6);
        assert!(surface.calls_since_clear().is_empty());
    }

    #[test]
    fn current_style_tracks_latest() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        assert!(surface.current_style().is_none());

        surface.apply_style(&StrokeStyle::default());
        let thin = StrokeStyle {
            line_width: 1.0,
            ..StrokeStyle::default()
        };
        surface.apply_style(&thin);
        assert_eq!(surface.current_style(), Some(&thin));
    }

    #[test]
    fn canvas_keywords() {
        assert_eq!(LineCap::Round.as_str(), "round");
        assert_eq!(LineCap::Square.as_str(), "square");
        assert_eq!(LineJoin::Bevel.as_str(), "bevel");
        assert_eq!(LineJoin::default().as_str(), "round");
    }
}
