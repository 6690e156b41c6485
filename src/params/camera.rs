//! Camera rig configuration and presets.

/// Static camera (eye and look-at target never change)
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (world units)
    pub position: [f32; 3],

    /// Look-at target (world units)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 6.0, 15.0],
            target: [0.0, 6.0, 0.0], // Level gaze toward the horizon
        }
    }
}

/// Pointer-driven camera: fixed eye, look target swings with horizontal pointer position
#[derive(Debug, Clone)]
pub struct PointerPanCamera {
    /// Camera position (world units)
    pub position: [f32; 3],

    /// Height of the look-at target (world units)
    /// Below eye height so the camera pitches down onto the water
    pub look_height_m: f32,

    /// Horizontal distance from eye to look-at target (world units)
    pub look_distance_m: f32,

    /// Yaw at full pointer deflection (radians)
    pub max_pan_rad: f32,
}

impl Default for PointerPanCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 15.0],
            look_height_m: 6.0,
            look_distance_m: 15.0,
            max_pan_rad: std::f32::consts::PI / 24.0, // 7.5° each way
        }
    }
}

/// Time-driven pan for headless runs (no pointer available)
#[derive(Debug, Clone)]
pub struct SweepCamera {
    /// Camera position (world units)
    pub position: [f32; 3],

    /// Height of the look-at target (world units)
    pub look_height_m: f32,

    /// Horizontal distance from eye to look-at target (world units)
    pub look_distance_m: f32,

    /// Pan amplitude (radians, ±)
    pub pan_amplitude_rad: f32,

    /// Pan frequency (Hz)
    pub pan_freq_hz: f32,
}

impl Default for SweepCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 15.0],
            look_height_m: 6.0,
            look_distance_m: 15.0,
            pan_amplitude_rad: 0.35,
            pan_freq_hz: 0.02, // One full sweep every 50s
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Stationary camera
    Fixed(FixedCamera),

    /// Pointer-driven pan (the landing page behaviour)
    PointerPan(PointerPanCamera),

    /// Slow automatic pan
    Sweep(SweepCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::PointerPan(PointerPanCamera::default())
    }
}
