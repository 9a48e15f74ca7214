//! Bounded move stream.
//!
//! Turns the raw press / move / release sequence into per-stroke windows.
//! A press opens a fresh [`MoveWindow`]; moves are only let through while a
//! window is open; the next release closes it. The release is never
//! forwarded as a move.
//!
//! Every press derives its own window, so a stroke's moves are never
//! swallowed because an earlier window already terminated.

use crate::input::PointerEvent;
use kurbo::Point;

/// An open `[press, release)` window. Identified by the 1-based stroke
/// number assigned when it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveWindow {
    stroke: u64,
}

impl MoveWindow {
    pub fn stroke(&self) -> u64 {
        self.stroke
    }
}

/// What the stream yields for an accepted event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamItem {
    /// A press opened a window at `position`.
    Opened { window: MoveWindow, position: Point },
    /// A move inside the open window.
    Move { window: MoveWindow, position: Point },
    /// A release closed the window.
    Closed { window: MoveWindow },
}

#[derive(Debug, Default)]
pub struct PointerStream {
    window: Option<MoveWindow>,
    opened: u64,
}

impl PointerStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// The window currently accepting moves.
    pub fn window(&self) -> Option<MoveWindow> {
        self.window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_some()
    }

    /// Windows opened since this stream was created.
    pub fn strokes_opened(&self) -> u64 {
        self.opened
    }

    /// Feed one canvas-relative event. Returns `None` for events that fall
    /// outside any window (moves while idle, stray releases).
    pub fn feed(&mut self, event: PointerEvent) -> Option<StreamItem> {
        match event {
            PointerEvent::Press { position } => {
                if let Some(stale) = self.window {
                    log::debug!("press without release; dropping window #{}", stale.stroke);
                }
                self.opened += 1;
                let window = MoveWindow {
                    stroke: self.opened,
                };
                self.window = Some(window);
                log::debug!("window #{} opened at ({}, {})", window.stroke, position.x, position.y);
                Some(StreamItem::Opened { window, position })
            }
            PointerEvent::Move { position } => self
                .window
                .map(|window| StreamItem::Move { window, position }),
            PointerEvent::Release { .. } => {
                let window = self.close()?;
                Some(StreamItem::Closed { window })
            }
        }
    }

    /// Tear down the open window without a release event.
    pub fn close(&mut self) -> Option<MoveWindow> {
        let window = self.window.take()?;
        log::debug!("window #{} closed", window.stroke);
        Some(window)
    }
}
