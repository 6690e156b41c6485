//! Ground-plane camera geometry shared by every spawn routine.
//!
//! The ground plane is world XZ; 2D vectors here store `(x, z)` in `(x, y)`.

use glam::{Vec2, Vec3};

use crate::camera::{CameraFrame, Projection};

/// Heading used when the camera looks straight up or down
pub const FALLBACK_FORWARD_XZ: Vec2 = Vec2::X;

/// Horizontal FOV assumed for projections without a field of view
pub const ORTHOGRAPHIC_FALLBACK_FOV_RAD: f32 = std::f32::consts::FRAC_PI_3;

/// Below this squared length the projected forward vector is treated as degenerate
const DEGENERATE_LENGTH_SQ: f32 = 1e-8;

/// Rotate a ground-plane vector 90° so that `forward` (x, z) yields the camera's right
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Camera forward and right axes projected onto the ground plane
///
/// # Returns
/// Tuple of (forward2, right2), both unit length and perpendicular
pub fn camera_basis_xz(camera: &CameraFrame) -> (Vec2, Vec2) {
    let flat = Vec2::new(camera.forward.x, camera.forward.z);
    let forward2 = if flat.is_finite() && flat.length_squared() > DEGENERATE_LENGTH_SQ {
        flat.normalize()
    } else {
        FALLBACK_FORWARD_XZ
    };
    (forward2, rotate90(forward2))
}

/// Horizontal field of view (radians)
pub fn horizontal_fov_radians(camera: &CameraFrame) -> f32 {
    match camera.projection {
        Projection::Perspective { fov_y_rad, aspect } => {
            2.0 * ((fov_y_rad / 2.0).tan() * aspect).atan()
        }
        Projection::Orthographic { .. } => ORTHOGRAPHIC_FALLBACK_FOV_RAD,
    }
}

/// Half-width of the horizontal frustum at a given depth (world units)
pub fn frustum_half_width(camera: &CameraFrame, depth: f32) -> f32 {
    (horizontal_fov_radians(camera) / 2.0).tan() * depth
}

/// Ground-plane distance from the camera to a point
pub fn radial_distance_xz(camera: &CameraFrame, point: Vec3) -> f32 {
    Vec2::new(point.x - camera.position.x, point.z - camera.position.z).length()
}

/// Signed distance of a point from the camera's forward axis (positive = right)
pub fn lateral_offset(camera: &CameraFrame, point: Vec3) -> f32 {
    let (_, right2) = camera_basis_xz(camera);
    right2.dot(Vec2::new(point.x - camera.position.x, point.z - camera.position.z))
}

/// Camera-relative ground point at `depth` along forward and `lateral` along right
pub fn ground_point(camera: &CameraFrame, depth: f32, lateral: f32, water_level: f32) -> Vec3 {
    let (forward2, right2) = camera_basis_xz(camera);
    let offset = forward2 * depth + right2 * lateral;
    Vec3::new(
        camera.position.x + offset.x,
        water_level,
        camera.position.z + offset.y,
    )
}
