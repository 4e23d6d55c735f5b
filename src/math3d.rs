//! 3D Math for the Point-Field Pipeline
//!
//! Plain value types for world/screen coordinates, camera parameters, and
//! the naive 3D-to-screen projection.

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// 2D Vector (screen coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// 3D Vector (world coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Camera parameters.
///
/// Only `position.z` feeds the current pipeline (as a view-space z offset);
/// `rotation` and `fov_angle` are carried in the config but not consumed.
// TODO: wire rotation and fov_angle into project() once a real view transform lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position vector
    pub position: Vec3,
    /// Euler angles in degrees
    pub rotation: Vec3,
    /// Angle opening of the camera (field of view)
    pub fov_angle: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -5.0),
            rotation: Vec3::zero(),
            fov_angle: 60.0,
        }
    }
}

/// Projection mode for [`project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Ignore depth: screen = world xy scaled by the fov factor.
    Orthographic,
    /// Perspective divide: screen = world xy scaled by fov factor / z.
    Perspective,
}

/// Project a 3D point onto the camera-centered screen plane.
///
/// Left-handed coordinates: +z recedes from the viewer. The result is
/// centered on the optical axis; callers add half the viewport to reach
/// top-left-origin screen space.
///
/// Perspective projection of a point at z == 0 has no defined image and
/// returns [`RasterError::ZeroDepth`].
#[inline]
pub fn project(point: Vec3, mode: Projection, fov_factor: f32) -> Result<Vec2> {
    match mode {
        Projection::Orthographic => Ok(Vec2::new(point.x * fov_factor, point.y * fov_factor)),
        Projection::Perspective => {
            if point.z == 0.0 {
                return Err(RasterError::ZeroDepth);
            }
            Ok(Vec2::new(
                point.x * fov_factor / point.z,
                point.y * fov_factor / point.z,
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_divide() {
        let p = project(Vec3::new(1.0, 1.0, 2.0), Projection::Perspective, 768.0).unwrap();
        assert_eq!(p, Vec2::new(384.0, 384.0));
    }

    #[test]
    fn test_orthographic_ignores_z() {
        let p = project(Vec3::new(1.0, 1.0, 1.0), Projection::Orthographic, 768.0).unwrap();
        assert_eq!(p, Vec2::new(768.0, 768.0));

        let q = project(Vec3::new(1.0, 1.0, 99.0), Projection::Orthographic, 768.0).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_perspective_zero_depth_rejected() {
        let err = project(Vec3::new(1.0, 1.0, 0.0), Projection::Perspective, 768.0);
        assert!(matches!(err, Err(RasterError::ZeroDepth)));
    }

    #[test]
    fn test_orthographic_zero_depth_fine() {
        assert!(project(Vec3::new(1.0, 1.0, 0.0), Projection::Orthographic, 768.0).is_ok());
    }

    #[test]
    fn test_perspective_negative_z_mirrors() {
        // A point behind the projection plane lands mirrored, as in the
        // original math; rejecting it is the scene's call, not the projector's.
        let p = project(Vec3::new(1.0, 1.0, -2.0), Projection::Perspective, 768.0).unwrap();
        assert_eq!(p, Vec2::new(-384.0, -384.0));
    }

    #[test]
    fn test_vec2_add() {
        assert_eq!(
            Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0),
            Vec2::new(4.0, 6.0)
        );
    }

    #[test]
    fn test_default_camera() {
        let cam = Camera::default();
        assert_eq!(cam.position.z, -5.0);
        assert_eq!(cam.rotation, Vec3::zero());
    }
}
