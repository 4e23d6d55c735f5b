//! Scene parameters persisted as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{GridMode, RectMode};
use crate::error::Result;
use crate::math3d::{Camera, Projection};

/// Everything the scenes read each frame: grid pattern, showcase rectangle
/// mode, projection mode, focal scale, camera, and the billboard image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Grid spacing in pixels; must stay positive
    pub grid_step: i32,
    pub grid_mode: GridMode,
    pub rect_mode: RectMode,
    pub projection: Projection,
    /// Focal-length-like projection scale, distinct from the camera's
    /// field-of-view angle
    pub fov_factor: f32,
    pub camera: Camera,
    /// Image for the billboard scene; a checkerboard stands in when unset
    /// or undecodable
    #[serde(default)]
    pub image_path: Option<String>,
}

impl RenderConfig {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_step: 10,
            grid_mode: GridMode::Dots,
            rect_mode: RectMode::Outline,
            projection: Projection::Perspective,
            fov_factor: 768.0,
            camera: Camera::default(),
            image_path: None,
        }
    }
}
