//! Pointer input abstraction.
//!
//! Normalizes the host's press / move / release device events into a
//! `PointerEvent` consumed by the pointer stream. Positions arrive in
//! viewport (device) coordinates and are shifted into canvas space with
//! [`PointerEvent::to_canvas`].

use kurbo::{Point, Vec2};

/// A normalized pointer event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed (mouse down, pointer down).
    Press { position: Point },

    /// Pointer moved, pressed or not.
    Move { position: Point },

    /// Button released.
    Release { position: Point },
}

impl PointerEvent {
    pub fn press(x: f64, y: f64) -> Self {
        Self::Press {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self::Release {
            position: Point::new(x, y),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::Press { position } | Self::Move { position } | Self::Release { position } => {
                *position
            }
        }
    }

    /// Re-express the event relative to the canvas origin, given the canvas
    /// offset inside its containing layout.
    pub fn to_canvas(self, offset: Vec2) -> Self {
        let local = self.position() - offset;
        match self {
            Self::Press { .. } => Self::Press { position: local },
            Self::Move { .. } => Self::Move { position: local },
            Self::Release { .. } => Self::Release { position: local },
        }
    }
}
