//! Boat agent state and the random boat factory.

use glam::{Vec2, Vec3};

use super::catalog::BoatModel;
use crate::params::BoatSystemConfig;
use crate::random::RandomSource;

/// Water level of the ground plane (world units)
pub const WATER_LEVEL: f32 = 0.0;

/// Collision radius shared by every model (world units)
pub const BOAT_COLLISION_RADIUS: f32 = 8.0;

/// One live boat
#[derive(Debug, Clone, PartialEq)]
pub struct BoatAgent {
    /// Unique among live boats
    pub id: String,
    pub model: BoatModel,
    /// Ground-plane position, `y` stays at [`WATER_LEVEL`]
    pub position: Vec3,
    /// Unit heading in the ground plane, stored as (x, z)
    direction: Vec2,
    /// Yaw matching `direction`, `atan2(direction.y, direction.x)`
    rotation: f32,
    /// World units per second
    pub speed: f32,
    pub rocking_phase: f32,
    pub rocking_speed: f32,
    pub rocking_amplitude: f32,
    /// When false the boat holds position this frame
    pub is_moving: bool,
    pub collision_radius: f32,
}

impl BoatAgent {
    /// Unit heading on the ground plane as (x, z)
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Yaw of the heading (radians)
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Point the boat along `direction` (normalized here); zero vectors are ignored
    pub fn set_direction(&mut self, direction: Vec2) {
        if let Some(unit) = direction.try_normalize() {
            self.direction = unit;
            self.rotation = unit.y.atan2(unit.x);
        }
    }

    /// Point the boat along a yaw angle
    pub fn set_rotation(&mut self, yaw: f32) {
        self.set_direction(Vec2::new(yaw.cos(), yaw.sin()));
    }

    /// Ground-plane velocity at a given speed (world units per second)
    pub fn velocity(&self, speed: f32) -> Vec2 {
        self.direction * speed
    }

    /// Position after `dt_s` seconds at `speed` along the current heading
    pub fn advanced(&self, speed: f32, dt_s: f32) -> Vec3 {
        let step = self.velocity(speed) * dt_s;
        Vec3::new(
            self.position.x + step.x,
            self.position.y,
            self.position.z + step.y,
        )
    }

    /// Ground-plane position as (x, z)
    pub fn position_xz(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }
}

/// Build a boat with random model, rocking constants, heading and speed
///
/// The boat starts at the origin; placement is the caller's job.
pub fn create_random_agent(
    id: impl Into<String>,
    config: &BoatSystemConfig,
    rng: &mut dyn RandomSource,
) -> BoatAgent {
    let model = BoatModel::ALL[rng.index(BoatModel::ALL.len())];

    let heading = rng.next_unit() * std::f32::consts::TAU;
    let direction = Vec2::new(heading.cos(), heading.sin());
    let speed = rng.range(config.speed_range.min, config.speed_range.max);

    let rocking_phase = rng.next_unit() * std::f32::consts::TAU;
    let rocking_speed = config.rocking_base.speed + (rng.next_unit() - 0.5) * 0.5;
    let rocking_amplitude = config.rocking_base.amplitude + (rng.next_unit() - 0.5) * 0.02;

    BoatAgent {
        id: id.into(),
        model,
        position: Vec3::new(0.0, WATER_LEVEL, 0.0),
        direction,
        rotation: direction.y.atan2(direction.x),
        speed,
        rocking_phase,
        rocking_speed,
        rocking_amplitude,
        is_moving: true,
        collision_radius: BOAT_COLLISION_RADIUS,
    }
}
