//! Whiteboard core: a freehand drawing canvas driven by pointer events.
//!
//! Host-independent: the pointer stream and stroke renderer talk to an
//! abstract [`CanvasSurface`], so the same state machine runs behind the
//! WASM bridge and inside headless tests.

pub mod config;
pub mod input;
pub mod renderer;
pub mod stream;
pub mod surface;
pub mod whiteboard;

pub use config::{ConfigError, WhiteboardConfig};
pub use input::PointerEvent;
pub use renderer::{RendererState, StrokeRenderer};
pub use stream::{MoveWindow, PointerStream, StreamItem};
pub use surface::{CanvasSurface, DrawCall, LineCap, LineJoin, RecordingSurface, StrokeStyle};
pub use whiteboard::{Whiteboard, WhiteboardStats};

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Line, Point, Size, Vec2};
