//! Depth-Shaded Point-Field Scene
//!
//! A fixed 9x9x9 grid of world-space points projected to screen markers
//! each frame: dot-grid backdrop, two static showcase rectangles, then one
//! small filled square per point, darkened with distance.

use super::Effect;
use crate::config::RenderConfig;
use crate::display::{FrameBuffer, RectMode};
use crate::error::Result;
use crate::math3d::{project, Vec2, Vec3};
use crate::util::{darken_color, rgb};

/// Samples per axis over [-1, 1]
const GRID_SAMPLES: i32 = 9;
/// World-space spacing between samples
const GRID_SPACING: f32 = 0.25;
/// Base marker color before depth shading (opaque cyan)
const MARKER_COLOR: u32 = rgb(0x00, 0xFF, 0xFF);
/// Inclusive rect extents for one marker: a 5x5 pixel square
const MARKER_EXTENT: i32 = 4;

/// Enumerate the point grid: x-outer, y-middle, z-inner.
///
/// Integer counters keep the corners exact; accumulating 0.25 steps in f32
/// would drift past the far edge.
fn build_point_grid() -> Vec<Vec3> {
    let count = (GRID_SAMPLES * GRID_SAMPLES * GRID_SAMPLES) as usize;
    let mut points = Vec::with_capacity(count);

    for xi in 0..GRID_SAMPLES {
        for yi in 0..GRID_SAMPLES {
            for zi in 0..GRID_SAMPLES {
                points.push(Vec3::new(
                    -1.0 + xi as f32 * GRID_SPACING,
                    -1.0 + yi as f32 * GRID_SPACING,
                    -1.0 + zi as f32 * GRID_SPACING,
                ));
            }
        }
    }

    points
}

/// The point-cloud scene
pub struct PointField {
    /// World points, generated once and never mutated
    points: Vec<Vec3>,
    /// Screen-space counterparts, index-aligned with `points`, fully
    /// rebuilt every update
    projected: Vec<Vec2>,
    /// Staging vector; swapped into `projected` only when the whole
    /// update succeeds
    scratch: Vec<Vec2>,
}

impl PointField {
    pub fn new() -> Self {
        let points = build_point_grid();
        let count = points.len();
        Self {
            points,
            projected: Vec::new(),
            scratch: Vec::with_capacity(count),
        }
    }

    #[cfg(test)]
    fn projected(&self) -> &[Vec2] {
        &self.projected
    }
}

impl Default for PointField {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for PointField {
    fn update(&mut self, _dt: f32, width: u32, height: u32, config: &RenderConfig) -> Result<()> {
        let half = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

        self.scratch.clear();
        for point in &self.points {
            // Naive camera-space approximation: only the camera's z offsets
            // the point, there is no full view transform yet.
            let view = Vec3::new(point.x, point.y, point.z - config.camera.position.z);
            let screen = project(view, config.projection, config.fov_factor)? + half;
            self.scratch.push(screen);
        }

        // All-or-nothing: a failed update above bails before this swap and
        // the previous frame's projections stay intact.
        std::mem::swap(&mut self.projected, &mut self.scratch);
        Ok(())
    }

    fn render(&self, buffer: &mut FrameBuffer, config: &RenderConfig) -> Result<()> {
        buffer.clear(rgb(0, 0, 0));
        buffer.background_grid(config.grid_step, config.grid_mode)?;

        // Static showcase shapes
        buffer.draw_rect(100, 100, 20, 10, rgb(0xFF, 0x00, 0x00), config.rect_mode);
        buffer.draw_rect(300, 200, 300, 150, rgb(0xFF, 0x00, 0xFF), RectMode::Fill);

        // Markers: shading keys off the point's world z, while projection
        // used the camera-relative z.
        for (point, screen) in self.points.iter().zip(&self.projected) {
            let color = darken_color(MARKER_COLOR, point.z);
            buffer.draw_rect(
                screen.x as i32 - MARKER_EXTENT / 2,
                screen.y as i32 - MARKER_EXTENT / 2,
                MARKER_EXTENT,
                MARKER_EXTENT,
                color,
                RectMode::Fill,
            );
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "Point Field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use crate::math3d::Projection;

    #[test]
    fn test_grid_has_729_points_z_inner() {
        let points = build_point_grid();
        assert_eq!(points.len(), 729);
        assert_eq!(points[0], Vec3::new(-1.0, -1.0, -1.0));
        // z is the innermost axis, then y, then x
        assert_eq!(points[1], Vec3::new(-1.0, -1.0, -0.75));
        assert_eq!(points[9], Vec3::new(-1.0, -0.75, -1.0));
        assert_eq!(points[81], Vec3::new(-0.75, -1.0, -1.0));
        assert_eq!(points[728], Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_update_projects_center_point_to_viewport_center() {
        let mut field = PointField::new();
        let config = RenderConfig::default();
        field.update(0.0, 800, 600, &config).unwrap();

        assert_eq!(field.projected().len(), 729);
        // The grid's central point (0, 0, 0) sits on the optical axis
        let center = 4 * 81 + 4 * 9 + 4;
        assert_eq!(field.projected()[center], Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_update_matches_perspective_formula() {
        let mut field = PointField::new();
        let config = RenderConfig::default();
        field.update(0.0, 800, 600, &config).unwrap();

        // Corner point (1, -1, -1): camera-relative z = -1 - (-5) = 4
        let corner = 8 * 81;
        let expected = Vec2::new(400.0 + 768.0 / 4.0, 300.0 - 768.0 / 4.0);
        assert_eq!(field.projected()[corner], expected);
    }

    #[test]
    fn test_update_failure_keeps_previous_projections() {
        let mut field = PointField::new();
        let mut config = RenderConfig::default();
        field.update(0.0, 800, 600, &config).unwrap();
        let before = field.projected().to_vec();

        // Camera at z = -1 puts the near plane through the z = -1 points
        config.camera.position.z = -1.0;
        let err = field.update(0.0, 800, 600, &config);
        assert!(matches!(err, Err(RasterError::ZeroDepth)));
        assert_eq!(field.projected(), &before[..]);
    }

    #[test]
    fn test_orthographic_update_ignores_camera() {
        let mut field = PointField::new();
        let mut config = RenderConfig::default();
        config.projection = Projection::Orthographic;
        // Would be degenerate under perspective; orthographic never divides
        config.camera.position.z = -1.0;
        field.update(0.0, 800, 600, &config).unwrap();

        let corner = 8 * 81;
        assert_eq!(
            field.projected()[corner],
            Vec2::new(400.0 + 768.0, 300.0 - 768.0)
        );
    }

    #[test]
    fn test_render_draws_depth_shaded_marker() {
        let mut field = PointField::new();
        let config = RenderConfig::default();
        let mut buffer = FrameBuffer::new(800, 600).unwrap();

        field.update(0.0, 800, 600, &config).unwrap();
        field.render(&mut buffer, &config).unwrap();

        // Corner point (1, -1, -1) lands at (592, 108); its world z of -1
        // clamps the darkening factor, leaving the marker at full cyan.
        assert_eq!(buffer.get_pixel(592, 108), Some(MARKER_COLOR));
        // Showcase rectangles: outline corner and fill interior
        assert_eq!(buffer.get_pixel(100, 100), Some(rgb(0xFF, 0x00, 0x00)));
        assert_eq!(buffer.get_pixel(450, 275), Some(rgb(0xFF, 0x00, 0xFF)));
    }

    #[test]
    fn test_render_rejects_degenerate_grid_step() {
        let field = PointField::new();
        let mut config = RenderConfig::default();
        config.grid_step = 0;
        let mut buffer = FrameBuffer::new(64, 64).unwrap();

        let err = field.render(&mut buffer, &config);
        assert!(matches!(err, Err(RasterError::DegenerateGrid { .. })));
    }
}
