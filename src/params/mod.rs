//! Parameter definitions with units and documented semantics.
//!
//! Tunable numbers live here with:
//! - Units (world units, seconds, Hz, radians)
//! - Documented defaults and meanings
//! - Validation where a bad value would break the simulation

mod boats;
mod camera;
mod render;
mod stars;

// Re-export all types
pub use boats::{
    BoatSystemConfig, CollisionMode, ConfigError, RockingBase, SpawnBand, SpeedRange,
};
pub use camera::{CameraPreset, FixedCamera, PointerPanCamera, SweepCamera};
pub use render::{RecordingConfig, RenderConfig};
pub use stars::StarFieldConfig;
