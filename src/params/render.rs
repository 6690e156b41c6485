//! Rendering and recording configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Viewport width (pixels)
    pub window_width: u32,

    /// Viewport height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    /// Narrow lens so distant boats stay readable
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane_m: f32,

    /// Far clipping plane (world units)
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 30.0,
            near_plane_m: 0.1,
            far_plane_m: 500.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Recording mode configuration (top-down chart frames)
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Write one chart every N simulated frames
    pub every_n_frames: usize,

    /// Chart side length (pixels)
    pub image_size_px: u32,

    /// World extent covered by the chart, centred on the camera (world units)
    pub world_extent_m: f32,
}

impl RecordingConfig {
    pub fn new(output_dir: impl Into<PathBuf>, every_n_frames: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            every_n_frames: every_n_frames.max(1),
            image_size_px: 512,
            world_extent_m: 180.0,
        }
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of the chart for a given frame number
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }

    /// Whether a chart is due for this frame
    pub fn should_capture(&self, frame_num: usize) -> bool {
        frame_num % self.every_n_frames == 0
    }
}
