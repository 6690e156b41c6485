//! Population controller: advances boats, culls the ones that leave view and
//! replaces each with a boat entering from the opposite edge.

use glam::Vec2;

use super::agent::{create_random_agent, BoatAgent};
use super::collision::nearest_dangerous_neighbor;
use super::spawn::{initial_placements, spawn_at_side, Side};
use crate::camera::CameraFrame;
use crate::geometry::{camera_basis_xz, radial_distance_xz};
use crate::params::{BoatSystemConfig, CollisionMode, ConfigError};
use crate::random::{RandomSource, SeededRandom};

/// Prefix of ids handed out by the controller
const ID_PREFIX: &str = "boat-";

/// A boat that left the view this frame
#[derive(Debug, Clone, PartialEq)]
pub struct ExitEvent {
    pub id: String,
    /// Side of the view it left through
    pub side: Side,
}

/// What happened during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub exits: Vec<ExitEvent>,
    /// Ids of replacement boats, in exit order
    pub spawned: Vec<String>,
    /// Boats held in place by the collision gate
    pub halted: usize,
}

/// Perspective-compensated speed: near boats slow down, far boats speed up
///
/// `speed * (0.6 + norm * 1.4)` where `norm` is the radial distance normalized over
/// the spawn band and clamped to `[0, 1]`.
pub fn effective_speed(
    base_speed: f32,
    radial_distance: f32,
    min_distance: f32,
    max_distance: f32,
) -> f32 {
    let span = (max_distance - min_distance).max(1e-3);
    let norm = ((radial_distance - min_distance) / span).clamp(0.0, 1.0);
    base_speed * (0.6 + norm * 1.4)
}

/// Fixed-size boat population kept inside the camera's view
pub struct BoatSystem {
    config: BoatSystemConfig,
    boats: Vec<BoatAgent>,
    rng: Box<dyn RandomSource>,
    next_id: u64,
}

impl BoatSystem {
    /// Create a boat system with an entropy-seeded random source and spawn the initial fleet
    pub fn new(config: BoatSystemConfig, camera: &CameraFrame) -> Result<Self, ConfigError> {
        Self::with_random(config, camera, Box::new(SeededRandom::from_entropy()))
    }

    /// Create a boat system with an explicit random source and spawn the initial fleet
    pub fn with_random(
        config: BoatSystemConfig,
        camera: &CameraFrame,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        let mut system = Self::from_agents(config, Vec::new(), rng)?;
        system.spawn_initial(camera);
        Ok(system)
    }

    /// Adopt an existing set of boats instead of spawning a fleet
    ///
    /// Replacements still happen one-for-one on exit, so the population stays at
    /// `boats.len()` (truncated to the target).
    pub fn from_agents(
        config: BoatSystemConfig,
        mut boats: Vec<BoatAgent>,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        boats.truncate(config.target_population);
        // Fresh ids start past every adopted `boat-<n>`
        let next_id = boats
            .iter()
            .filter_map(|boat| boat.id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
            .map(|n| n + 1)
            .max()
            .unwrap_or(0);
        Ok(Self {
            config,
            boats,
            rng,
            next_id,
        })
    }

    pub fn config(&self) -> &BoatSystemConfig {
        &self.config
    }

    /// Live boats
    pub fn boats(&self) -> &[BoatAgent] {
        &self.boats
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("{}{}", ID_PREFIX, self.next_id);
        self.next_id += 1;
        id
    }

    /// Spread the initial fleet across the band, in front of the camera
    fn spawn_initial(&mut self, camera: &CameraFrame) {
        let band = self.config.spawn;
        let (_, right2) = camera_basis_xz(camera);

        let placements = initial_placements(
            camera,
            &band,
            self.config.target_population,
            self.rng.as_mut(),
        );

        for position in placements {
            let id = self.allocate_id();
            let mut boat = create_random_agent(id, &self.config, self.rng.as_mut());
            boat.position = position;
            boat.set_direction(if self.rng.coin() { right2 } else { -right2 });
            self.boats.push(boat);
        }

        log::info!(
            "Spawned initial fleet of {} boats between {}m and {}m",
            self.boats.len(),
            band.min_distance_m,
            band.max_distance_m
        );
    }

    /// Whether a ground point is visible and inside the radial band
    pub fn is_in_view(&self, camera: &CameraFrame, point: glam::Vec3) -> bool {
        let radial = radial_distance_xz(camera, point);
        let band = &self.config.spawn;
        radial >= band.min_distance_m && radial <= band.max_distance_m && camera.ndc_contains(point)
    }

    /// Advance the simulation by one frame
    ///
    /// # Arguments
    /// * `camera` - Camera state for this frame
    /// * `dt_s` - Frame time in seconds (negative or non-finite values freeze motion)
    ///
    /// # Returns
    /// Exits, replacements and halts that happened this frame
    pub fn update(&mut self, camera: &CameraFrame, dt_s: f32) -> FrameReport {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        let band = self.config.spawn;
        let (_, right2) = camera_basis_xz(camera);
        let camera_xz = Vec2::new(camera.position.x, camera.position.z);

        let previous = std::mem::take(&mut self.boats);
        let mut boats = Vec::with_capacity(self.config.target_population);
        let mut report = FrameReport::default();

        for old in &previous {
            let mut boat = old.clone();

            if self.config.collision_mode == CollisionMode::Halt {
                let info = nearest_dangerous_neighbor(old, &previous, &self.config);
                boat.is_moving = !info.has_collision;
                if !boat.is_moving {
                    report.halted += 1;
                }
            }

            let next = if boat.is_moving {
                let radial = radial_distance_xz(camera, boat.position);
                let speed =
                    effective_speed(boat.speed, radial, band.min_distance_m, band.max_distance_m);
                boat.advanced(speed, dt_s)
            } else {
                boat.position
            };

            if self.is_in_view(camera, next) {
                boat.position = next;
                boats.push(boat);
            } else {
                let outward = Vec2::new(next.x, next.z) - camera_xz;
                let side = if right2.dot(outward) >= 0.0 {
                    Side::Right
                } else {
                    Side::Left
                };
                log::debug!("{} left view on the {:?} side", boat.id, side);
                report.exits.push(ExitEvent { id: boat.id, side });
            }
        }

        for exit in &report.exits {
            let entry = exit.side.opposite();
            let id = self.allocate_id();
            let spawn = spawn_at_side(
                camera,
                entry,
                band.min_distance_m,
                band.max_distance_m,
                self.rng.as_mut(),
            );

            let mut boat = create_random_agent(id, &self.config, self.rng.as_mut());
            boat.position = spawn.position;
            boat.set_direction(spawn.heading);
            log::debug!("{} replaces {} entering from the {:?} side", boat.id, exit.id, entry);

            report.spawned.push(boat.id.clone());
            boats.push(boat);
        }

        if boats.len() > self.config.target_population {
            boats.truncate(self.config.target_population);
            report.spawned.retain(|id| boats.iter().any(|boat| &boat.id == id));
        }

        self.boats = boats;
        report
    }
}
