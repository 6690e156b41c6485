//! Camera frame consumed by the simulation, and the rig that produces one per frame.

use glam::{Mat4, Vec3};

use crate::input::SceneInput;
use crate::params::{CameraPreset, FixedCamera, PointerPanCamera, RenderConfig, SweepCamera};

/// Projection model of a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective lens
    Perspective {
        /// Vertical field of view (radians)
        fov_y_rad: f32,
        /// Width / height
        aspect: f32,
    },

    /// Orthographic box
    Orthographic {
        /// Half of the view height (world units)
        half_height: f32,
        /// Width / height
        aspect: f32,
    },
}

/// Read-only camera state for one frame
///
/// Uses the GL clip convention: points inside the frustum land in the `[-1, 1]` NDC cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Eye position (world units)
    pub position: Vec3,
    /// View direction (unit length)
    pub forward: Vec3,
    pub projection: Projection,
    /// Near clipping plane (world units)
    pub near: f32,
    /// Far clipping plane (world units)
    pub far: f32,
}

impl CameraFrame {
    /// Perspective camera looking from `eye` toward `target`
    pub fn look_at(eye: Vec3, target: Vec3, render_config: &RenderConfig) -> Self {
        let forward = (target - eye).try_normalize().unwrap_or(Vec3::NEG_Z);
        Self {
            position: eye,
            forward,
            projection: Projection::Perspective {
                fov_y_rad: render_config.fov_degrees.to_radians(),
                aspect: render_config.aspect_ratio(),
            },
            near: render_config.near_plane_m,
            far: render_config.far_plane_m,
        }
    }

    /// View matrix (right-handed, Y up)
    ///
    /// A camera looking straight up or down has no defined roll around Y, so -Z is
    /// used as screen-up in that case.
    pub fn view_matrix(&self) -> Mat4 {
        let up = if self.forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        Mat4::look_to_rh(self.position, self.forward, up)
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y_rad, aspect } => {
                Mat4::perspective_rh_gl(fov_y_rad, aspect, self.near, self.far)
            }
            Projection::Orthographic {
                half_height,
                aspect,
            } => {
                let half_width = half_height * aspect;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates
    pub fn project_to_ndc(&self, world: Vec3) -> Vec3 {
        self.view_proj().project_point3(world)
    }

    /// Whether a world point falls inside the NDC cube
    pub fn ndc_contains(&self, world: Vec3) -> bool {
        ndc_in_view(self.project_to_ndc(world))
    }
}

/// NDC cube test: `|x| <= 1`, `|y| <= 1`, `-1 < z < 1`
///
/// NaN coordinates (degenerate projection) count as outside.
pub fn ndc_in_view(ndc: Vec3) -> bool {
    ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z > -1.0 && ndc.z < 1.0
}

/// Camera rig driven by a preset, elapsed time and pointer input
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &CameraPreset {
        &self.preset
    }

    /// Compute camera position and look-at target
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    /// * `input` - Pointer state for this frame
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32, input: &SceneInput) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed(params),
            CameraPreset::PointerPan(params) => Self::compute_pointer_pan(params, input),
            CameraPreset::Sweep(params) => Self::compute_sweep(params, time_s),
        }
    }

    fn compute_fixed(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Pointer pan: the look target orbits the world origin against the pointer (parallax feel)
    fn compute_pointer_pan(p: &PointerPanCamera, input: &SceneInput) -> (Vec3, Vec3) {
        let angle = -input.pointer_x.clamp(-1.0, 1.0) * p.max_pan_rad;
        let eye = Vec3::from_array(p.position);
        let target = Self::orbit_target(angle, p.look_height_m, p.look_distance_m);
        (eye, target)
    }

    /// Sweep: same geometry as the pointer pan, angle follows a slow sine
    fn compute_sweep(p: &SweepCamera, time_s: f32) -> (Vec3, Vec3) {
        let angle = (time_s * p.pan_freq_hz * std::f32::consts::TAU).sin() * p.pan_amplitude_rad;
        let eye = Vec3::from_array(p.position);
        let target = Self::orbit_target(angle, p.look_height_m, p.look_distance_m);
        (eye, target)
    }

    fn orbit_target(angle: f32, height: f32, distance: f32) -> Vec3 {
        Vec3::new(angle.sin() * distance, height, -angle.cos() * distance)
    }

    /// Create the camera frame for rendering and simulation
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    /// * `input` - Pointer state for this frame
    /// * `render_config` - Rendering configuration (FOV, aspect ratio, etc.)
    pub fn frame(
        &self,
        time_s: f32,
        input: &SceneInput,
        render_config: &RenderConfig,
    ) -> CameraFrame {
        let (eye, target) = self.compute_position_and_target(time_s, input);
        CameraFrame::look_at(eye, target, render_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_pan_centre_looks_down_negative_z() {
        let camera = CameraSystem::new(CameraPreset::default());
        let (eye, target) = camera.compute_position_and_target(0.0, &SceneInput::default());

        assert_eq!(eye, Vec3::new(0.0, 10.0, 15.0));
        assert!(target.x.abs() < 1e-6);
        assert!(target.z < eye.z, "target should be ahead along -Z");
        assert!(target.y < eye.y, "camera should pitch down onto the water");
    }

    #[test]
    fn test_pointer_right_pans_view_left() {
        let camera = CameraSystem::new(CameraPreset::default());
        let input = SceneInput {
            pointer_x: 1.0,
            pointer_y: 0.0,
        };
        let (_, target) = camera.compute_position_and_target(0.0, &input);

        // Looking down -Z, screen right is +X; the target swings toward -X
        let expected = -(std::f32::consts::PI / 24.0).sin() * 15.0;
        assert!((target.x - expected).abs() < 1e-4);
    }

    #[test]
    fn test_sweep_stays_within_amplitude() {
        let params = SweepCamera::default();
        let camera = CameraSystem::new(CameraPreset::Sweep(params.clone()));
        let max_x = params.pan_amplitude_rad.sin() * params.look_distance_m + 1e-4;

        for t in 0..200 {
            let (_, target) =
                camera.compute_position_and_target(t as f32 * 0.5, &SceneInput::default());
            assert!(
                target.x.abs() <= max_x,
                "target x {} exceeds sweep amplitude at t={}",
                target.x,
                t
            );
        }
    }

    #[test]
    fn test_point_ahead_is_in_view_and_behind_is_not() {
        let camera = CameraSystem::new(CameraPreset::default());
        let frame = camera.frame(0.0, &SceneInput::default(), &RenderConfig::default());

        assert!(frame.ndc_contains(Vec3::new(0.0, 0.0, -30.0)));
        assert!(!frame.ndc_contains(Vec3::new(0.0, 0.0, 40.0)));
        // Under the camera, below the lower frustum edge
        assert!(!frame.ndc_contains(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_vertical_camera_projection_is_finite() {
        let frame = CameraFrame {
            position: Vec3::new(0.0, 50.0, 0.0),
            forward: Vec3::NEG_Y,
            projection: Projection::Perspective {
                fov_y_rad: 30f32.to_radians(),
                aspect: 1.0,
            },
            near: 0.1,
            far: 500.0,
        };

        let ndc = frame.project_to_ndc(Vec3::ZERO);
        assert!(ndc.is_finite());
        assert!(ndc_in_view(ndc));
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraPreset::Fixed(FixedCamera::default()));
        let frame = camera.frame(0.0, &SceneInput::default(), &RenderConfig::default());
        let view_proj = frame.view_proj();

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(view_proj.is_finite());
    }

    #[test]
    fn test_ndc_rejects_nan() {
        assert!(!ndc_in_view(Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(ndc_in_view(Vec3::new(1.0, -1.0, 0.99)));
        assert!(!ndc_in_view(Vec3::new(0.0, 0.0, 1.0)));
    }
}
