//! Boat traffic configuration and validation.

use serde::Deserialize;
use thiserror::Error;

/// Rejected configuration values. Construction fails fast on any of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target population must be at least 1")]
    EmptyPopulation,
    #[error("speed range must satisfy 0 < min <= max, got [{min}, {max}]")]
    SpeedRange { min: f32, max: f32 },
    #[error("collision distance must be finite and >= 0, got {0}")]
    CollisionDistance(f32),
    #[error("rocking base must be finite with amplitude >= 0, got {speed} / {amplitude}")]
    Rocking { speed: f32, amplitude: f32 },
    #[error("spawn band must satisfy 0 <= min < max, got [{min}, {max}]")]
    SpawnBand { min: f32, max: f32 },
    #[error("spawn distance and separation must be finite and >= 0, got {spawn} / {separation}")]
    SpawnSpacing { spawn: f32, separation: f32 },
    #[error("lateral coverage must lie in (0, 1], got {0}")]
    LateralCoverage(f32),
    #[error("invalid star field: radius {radius}, depth {depth}, saturation {saturation}")]
    StarField {
        radius: f32,
        depth: f32,
        saturation: f32,
    },
    #[error("could not parse boat config: {0}")]
    Parse(String),
}

/// Boat cruise speed range (world units per second)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self { min: 0.3, max: 1.5 }
    }
}

/// Base values for the idle rocking animation, jittered per boat
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RockingBase {
    /// Rocking angular speed multiplier (radians per second before the per-axis factors)
    pub speed: f32,

    /// Rocking amplitude (radians)
    pub amplitude: f32,
}

impl Default for RockingBase {
    fn default() -> Self {
        Self {
            speed: 1.0,
            amplitude: 0.05,
        }
    }
}

/// Camera-relative band in which boats live
///
/// All distances are measured on the ground plane from the camera position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnBand {
    /// Boats closer than this are culled (world units)
    pub min_distance_m: f32,

    /// Boats farther than this are culled (world units)
    pub max_distance_m: f32,

    /// Upper bound on the depth step between boats of the initial batch
    pub spawn_distance_m: f32,

    /// Lower bound on the depth step between boats of the initial batch
    pub min_separation_m: f32,

    /// Fraction of the horizontal frustum half-width used by the initial batch
    /// (keeps boats away from the extreme screen edges)
    pub lateral_coverage: f32,
}

impl Default for SpawnBand {
    fn default() -> Self {
        Self {
            // Lower frustum edge of the default rig meets the water ~24m out;
            // edge spawns sit up to ~10% closer in depth than their radial distance
            min_distance_m: 30.0,
            max_distance_m: 80.0,
            spawn_distance_m: 25.0,
            min_separation_m: 6.0,
            lateral_coverage: 0.8,
        }
    }
}

/// Whether predicted collisions halt boats for the frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Pure frustum culling, boats never stop
    #[default]
    Off,

    /// Boats with a dangerous neighbor ahead stop translating (rocking continues)
    Halt,
}

/// Boat traffic configuration, fixed for a scene session
///
/// Deserializing a partial document fills every missing field from `Default`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoatSystemConfig {
    /// Number of boats kept alive every frame
    pub target_population: usize,

    /// Cruise speed range (world units per second)
    pub speed_range: SpeedRange,

    /// Extra clearance added to both collision radii (world units)
    pub collision_distance: f32,

    /// Rocking animation base values
    pub rocking_base: RockingBase,

    /// Camera-relative spawn and cull band
    pub spawn: SpawnBand,

    /// Collision gating behaviour
    pub collision_mode: CollisionMode,
}

impl Default for BoatSystemConfig {
    fn default() -> Self {
        Self {
            target_population: 6,
            speed_range: SpeedRange::default(),
            collision_distance: 15.0,
            rocking_base: RockingBase::default(),
            spawn: SpawnBand::default(),
            collision_mode: CollisionMode::Off,
        }
    }
}

impl BoatSystemConfig {
    /// Parse a JSON document, merging the fields it names over the defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration (non-empty population, ordered ranges, etc.)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        let SpeedRange { min, max } = self.speed_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::SpeedRange { min, max });
        }

        if !(self.collision_distance.is_finite() && self.collision_distance >= 0.0) {
            return Err(ConfigError::CollisionDistance(self.collision_distance));
        }

        let RockingBase { speed, amplitude } = self.rocking_base;
        if !(speed.is_finite() && amplitude.is_finite() && amplitude >= 0.0) {
            return Err(ConfigError::Rocking { speed, amplitude });
        }

        let band = &self.spawn;
        if !(band.min_distance_m.is_finite()
            && band.max_distance_m.is_finite()
            && band.min_distance_m >= 0.0
            && band.max_distance_m > band.min_distance_m)
        {
            return Err(ConfigError::SpawnBand {
                min: band.min_distance_m,
                max: band.max_distance_m,
            });
        }

        if !(band.spawn_distance_m.is_finite()
            && band.min_separation_m.is_finite()
            && band.spawn_distance_m >= 0.0
            && band.min_separation_m >= 0.0)
        {
            return Err(ConfigError::SpawnSpacing {
                spawn: band.spawn_distance_m,
                separation: band.min_separation_m,
            });
        }

        if !(band.lateral_coverage > 0.0 && band.lateral_coverage <= 1.0) {
            return Err(ConfigError::LateralCoverage(band.lateral_coverage));
        }

        Ok(())
    }
}
