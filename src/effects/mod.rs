mod billboard;
mod point_field;

pub use billboard::Billboard;
pub use point_field::PointField;

use crate::config::RenderConfig;
use crate::display::FrameBuffer;
use crate::error::Result;

/// Trait for renderable scenes.
///
/// A scene recomputes its derived state in `update`, then draws a whole
/// frame (clear, backdrop, geometry) in `render`. Both return `Result`
/// because grid and projection parameters carry explicit error kinds; a
/// failed update must leave the scene's derived state from the previous
/// frame intact so the loop can log and move on.
pub trait Effect {
    /// Update scene state (called each frame)
    /// - dt: delta time in seconds
    /// - width/height: buffer dimensions for screen-space placement
    /// - config: shared scene parameters, mutated by the key bindings
    fn update(&mut self, dt: f32, width: u32, height: u32, config: &RenderConfig) -> Result<()>;

    /// Render the scene into the frame buffer
    fn render(&self, buffer: &mut FrameBuffer, config: &RenderConfig) -> Result<()>;

    /// Scene name for the banner and FPS title
    fn name(&self) -> &str;
}
