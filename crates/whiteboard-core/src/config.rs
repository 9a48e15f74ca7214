//! Widget configuration.
//!
//! Passed from the host page as JSON (camelCase keys). Every field is
//! optional; missing ones fall back to the defaults below.

use crate::surface::StrokeStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid whiteboard config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("stroke line width must be a positive number, got {0}")]
    LineWidth(f64),
}

/// Configuration for a mounted whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhiteboardConfig {
    /// Canvas bitmap width in pixels. Default: **900**.
    pub width: u32,
    /// Canvas bitmap height in pixels. Default: **500**.
    pub height: u32,

    /// Heading rendered above the canvas.
    pub title: String,
    pub title_class: String,

    pub canvas_id: String,
    pub canvas_class: String,

    /// Text on the reset button.
    pub reset_label: String,
    pub reset_class: String,

    pub stroke: StrokeStyle,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            title: "PlatziBoard".to_string(),
            title_class: "web-title".to_string(),
            canvas_id: "reactive-canvas".to_string(),
            canvas_class: "reactive-canvas".to_string(),
            reset_label: "Reiniciar".to_string(),
            reset_class: "restart-button".to_string(),
            stroke: StrokeStyle::default(),
        }
    }
}

impl WhiteboardConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        let line_width = self.stroke.line_width;
        if !line_width.is_finite() || line_width <= 0.0 {
            return Err(ConfigError::LineWidth(line_width));
        }
        Ok(())
    }
}
