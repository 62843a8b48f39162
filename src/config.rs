//! Editor configuration: default dimensions for new rooms and objects.
//!
//! The host may hand the engine a JSON document overriding any subset of
//! these values; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex_color;
use crate::error::{EditorError, positive};

pub const DEFAULT_ROOM_WIDTH: f32 = 10.0;
pub const DEFAULT_ROOM_LENGTH: f32 = 10.0;
pub const DEFAULT_ROOM_HEIGHT: f32 = 3.0;
pub const DEFAULT_RECT_TABLE_WIDTH: f32 = 1.5;
pub const DEFAULT_RECT_TABLE_LENGTH: f32 = 2.0;
pub const DEFAULT_TABLE_HEIGHT: f32 = 0.75;
pub const DEFAULT_ROUND_TABLE_RADIUS: f32 = 1.0;
pub const DEFAULT_TABLE_COLOR: &str = "#8b4513";
pub const DEFAULT_SEAT_RADIUS: f32 = 0.25;
pub const DEFAULT_FOV_Y_DEG: f32 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDefaults {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        Self { width: DEFAULT_ROOM_WIDTH, length: DEFAULT_ROOM_LENGTH, height: DEFAULT_ROOM_HEIGHT }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectTableDefaults {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Default for RectTableDefaults {
    fn default() -> Self {
        Self { width: DEFAULT_RECT_TABLE_WIDTH, length: DEFAULT_RECT_TABLE_LENGTH, height: DEFAULT_TABLE_HEIGHT }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTableDefaults {
    pub radius: f32,
    pub height: f32,
}

impl Default for RoundTableDefaults {
    fn default() -> Self {
        Self { radius: DEFAULT_ROUND_TABLE_RADIUS, height: DEFAULT_TABLE_HEIGHT }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fov_y_deg: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self { eye: [5.0, 5.0, 10.0], target: [0.0, 0.0, 0.0], fov_y_deg: DEFAULT_FOV_Y_DEG }
    }
}

/// Typed editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Room created at startup, before the user submits the setup form.
    pub room: RoomDefaults,
    pub rectangular_table: RectTableDefaults,
    pub round_table: RoundTableDefaults,
    pub table_color: String,
    /// Seat footprint radius, used for bounds clamping and picking.
    pub seat_radius: f32,
    pub camera: CameraDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            room: RoomDefaults::default(),
            rectangular_table: RectTableDefaults::default(),
            round_table: RoundTableDefaults::default(),
            table_color: DEFAULT_TABLE_COLOR.to_string(),
            seat_radius: DEFAULT_SEAT_RADIUS,
            camera: CameraDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] for malformed JSON, or the
    /// validation error for a non-positive dimension or bad color.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| EditorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every dimension is positive and canonicalize the table color.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&mut self) -> Result<(), EditorError> {
        positive("room width", self.room.width)?;
        positive("room length", self.room.length)?;
        positive("room height", self.room.height)?;
        positive("table width", self.rectangular_table.width)?;
        positive("table length", self.rectangular_table.length)?;
        positive("table height", self.rectangular_table.height)?;
        positive("table radius", self.round_table.radius)?;
        positive("table height", self.round_table.height)?;
        positive("seat radius", self.seat_radius)?;
        positive("field of view", self.camera.fov_y_deg)?;
        self.table_color =
            normalize_hex_color(&self.table_color).ok_or_else(|| EditorError::InvalidColor(self.table_color.clone()))?;
        Ok(())
    }
}
