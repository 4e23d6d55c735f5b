//! Bouncing Billboard Scene
//!
//! Drives the image compositor: a decoded bitmap drifts around the
//! viewport bouncing off the edges while its destination extents pulse, so
//! every frame exercises nearest-neighbor scaling and, at the edges, the
//! destination clip.

use super::Effect;
use crate::bitmap::Bitmap;
use crate::config::RenderConfig;
use crate::display::FrameBuffer;
use crate::error::Result;
use crate::util::rgb;

/// Scale pulse amplitude around 1.0
const PULSE_DEPTH: f32 = 0.4;
/// Pulse speed in radians per second
const PULSE_RATE: f32 = 1.5;

/// A bitmap bounced around the buffer with a breathing scale
pub struct Billboard {
    bitmap: Bitmap,
    // Center position; the bounce clamps the center, not the edges, so up
    // to half the image hangs off-screen at each wall.
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    phase: f32,
}

impl Billboard {
    pub fn new(bitmap: Bitmap) -> Self {
        Self {
            bitmap,
            x: 200.0,
            y: 150.0,
            vx: 120.0, // pixels per second
            vy: 80.0,
            phase: 0.0,
        }
    }

    /// Destination extents for the current pulse phase, never below 1x1
    fn extents(&self) -> (i32, i32) {
        let scale = 1.0 + PULSE_DEPTH * self.phase.sin();
        let w = (self.bitmap.width() as f32 * scale).max(1.0) as i32;
        let h = (self.bitmap.height() as f32 * scale).max(1.0) as i32;
        (w, h)
    }
}

impl Effect for Billboard {
    fn update(&mut self, dt: f32, width: u32, height: u32, _config: &RenderConfig) -> Result<()> {
        self.phase += PULSE_RATE * dt;

        self.x += self.vx * dt;
        self.y += self.vy * dt;

        let screen_w = width as f32;
        let screen_h = height as f32;

        if self.x <= 0.0 {
            self.x = 0.0;
            self.vx = self.vx.abs();
        } else if self.x >= screen_w {
            self.x = screen_w;
            self.vx = -self.vx.abs();
        }

        if self.y <= 0.0 {
            self.y = 0.0;
            self.vy = self.vy.abs();
        } else if self.y >= screen_h {
            self.y = screen_h;
            self.vy = -self.vy.abs();
        }

        Ok(())
    }

    fn render(&self, buffer: &mut FrameBuffer, config: &RenderConfig) -> Result<()> {
        buffer.clear(rgb(0, 0, 0));
        buffer.background_grid(config.grid_step, config.grid_mode)?;

        let (w, h) = self.extents();
        buffer.blit_bitmap(
            &self.bitmap,
            self.x as i32 - w / 2,
            self.y as i32 - h / 2,
            w,
            h,
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "Billboard"
    }
}
