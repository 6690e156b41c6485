//! Pointer input state scoped to one scene.
//!
//! The host feeds window events in; the camera rig reads the normalized pointer once
//! per frame. Dropping the value when the scene unmounts is the whole teardown.

/// Pointer position in normalized device space (`x` right, `y` up, both in `[-1, 1]`)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneInput {
    pub pointer_x: f32,
    pub pointer_y: f32,
}

impl SceneInput {
    /// Build from a window-space cursor position (pixels, origin top-left)
    pub fn from_window_position(x_px: f32, y_px: f32, width_px: f32, height_px: f32) -> Self {
        let mut input = Self::default();
        input.pointer_moved(x_px, y_px, width_px, height_px);
        input
    }

    /// Update from a window-space cursor position (pixels, origin top-left)
    pub fn pointer_moved(&mut self, x_px: f32, y_px: f32, width_px: f32, height_px: f32) {
        if width_px <= 0.0 || height_px <= 0.0 {
            return;
        }
        self.pointer_x = ((x_px / width_px) * 2.0 - 1.0).clamp(-1.0, 1.0);
        self.pointer_y = (-((y_px / height_px) * 2.0 - 1.0)).clamp(-1.0, 1.0);
    }
}
