//! Render adapter: turns boat agents into per-frame poses and GPU instance records.
//!
//! Nothing here draws. A renderer polls assets through [`AssetResolver`], asks for a
//! [`BoatPose`] per boat each frame and uploads the resulting [`BoatInstance`]s.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::boats::{BoatAgent, BoatModel};

/// Box drawn while a model is loading or after it failed to load (width, height, length)
pub const PLACEHOLDER_SIZE: Vec3 = Vec3::new(2.0, 1.0, 4.0);

/// Vertical offset of a placeholder below the water line
pub const PLACEHOLDER_SUBMERGE_M: f32 = -0.15;

/// Fraction of a loaded model's scaled height sunk below the water line
pub const SUBMERGE_FRACTION: f32 = 0.12;

/// Resolution state of a model asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetState {
    /// Still loading
    Pending,
    /// Loaded; unscaled bounding box size of the mesh
    Ready { bounding_size: Vec3 },
    /// Will never load
    Failed(String),
}

/// Source of model assets, polled once per frame for unresolved models
pub trait AssetResolver {
    fn resolve(&mut self, model: BoatModel) -> AssetState;
}

/// Resolver backed by a fixed table of bounding sizes
///
/// Models missing from the table resolve as failed.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    sizes: HashMap<BoatModel, Vec3>,
}

impl StaticAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bounding size of a model's mesh
    pub fn with_size(mut self, model: BoatModel, bounding_size: Vec3) -> Self {
        self.sizes.insert(model, bounding_size);
        self
    }
}

impl AssetResolver for StaticAssetResolver {
    fn resolve(&mut self, model: BoatModel) -> AssetState {
        match self.sizes.get(&model) {
            Some(size) => AssetState::Ready {
                bounding_size: *size,
            },
            None => AssetState::Failed(format!("no asset registered for {}", model)),
        }
    }
}

/// Caches settled asset states so a resolver is only polled while a model is pending
pub struct AssetCache<R: AssetResolver> {
    resolver: R,
    settled: HashMap<BoatModel, AssetState>,
}

impl<R: AssetResolver> AssetCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            settled: HashMap::new(),
        }
    }

    /// Current state of a model, polling the resolver if it hasn't settled yet
    pub fn state(&mut self, model: BoatModel) -> AssetState {
        if let Some(state) = self.settled.get(&model) {
            return state.clone();
        }

        let state = self.resolver.resolve(model);
        match &state {
            AssetState::Pending => {}
            AssetState::Ready { bounding_size } => {
                log::debug!("Asset {} ready, bounds {:?}", model, bounding_size);
                self.settled.insert(model, state.clone());
            }
            AssetState::Failed(reason) => {
                log::warn!("Asset {} failed to load, using placeholder: {}", model, reason);
                self.settled.insert(model, state.clone());
            }
        }
        state
    }
}

/// What to draw for a boat
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseShape {
    /// The loaded mesh with the catalog's uniform scale and model-space yaw correction
    Model {
        asset_path: &'static str,
        scale: f32,
        model_yaw_rad: f32,
    },
    /// Fixed-size box (`failed` distinguishes a missing asset from one still loading)
    Placeholder { size: Vec3, failed: bool },
}

/// Transform of one boat for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BoatPose {
    pub id: String,
    /// Ground position plus the submerge offset
    pub translation: Vec3,
    /// Heading around Y (radians), equal to the agent's rotation
    pub yaw: f32,
    /// Rocking around X (radians)
    pub pitch: f32,
    /// Rocking around Z (radians)
    pub roll: f32,
    pub shape: PoseShape,
}

/// Rocking angles `(pitch, roll)` of an agent at `time_s`
pub fn rocking_angles(agent: &BoatAgent, time_s: f32) -> (f32, f32) {
    let roll =
        (time_s * agent.rocking_speed * 0.3 + agent.rocking_phase).sin() * agent.rocking_amplitude;
    let pitch = (time_s * agent.rocking_speed * 0.2 + agent.rocking_phase).cos()
        * agent.rocking_amplitude
        * 0.6;
    (pitch, roll)
}

/// Build the pose of an agent at `time_s` given its asset state
///
/// Rocking continues while the boat is halted.
pub fn boat_pose(agent: &BoatAgent, time_s: f32, asset: &AssetState) -> BoatPose {
    let (pitch, roll) = rocking_angles(agent, time_s);
    let spec = agent.model.spec();

    let (shape, submerge) = match asset {
        AssetState::Ready { bounding_size } => (
            PoseShape::Model {
                asset_path: spec.asset_path,
                scale: spec.scale,
                model_yaw_rad: agent.model.yaw_correction_rad(),
            },
            -SUBMERGE_FRACTION * bounding_size.y * spec.scale,
        ),
        AssetState::Pending => (
            PoseShape::Placeholder {
                size: PLACEHOLDER_SIZE,
                failed: false,
            },
            PLACEHOLDER_SUBMERGE_M,
        ),
        AssetState::Failed(_) => (
            PoseShape::Placeholder {
                size: PLACEHOLDER_SIZE,
                failed: true,
            },
            PLACEHOLDER_SUBMERGE_M,
        ),
    };

    BoatPose {
        id: agent.id.clone(),
        translation: agent.position + Vec3::new(0.0, submerge, 0.0),
        yaw: agent.rotation(),
        pitch,
        roll,
        shape,
    }
}

/// Poses for a whole fleet, resolving assets through `assets`
pub fn fleet_poses<R: AssetResolver>(
    boats: &[BoatAgent],
    time_s: f32,
    assets: &mut AssetCache<R>,
) -> Vec<BoatPose> {
    boats
        .iter()
        .map(|boat| {
            let state = assets.state(boat.model);
            boat_pose(boat, time_s, &state)
        })
        .collect()
}

impl BoatPose {
    /// Model matrix: translation, then X/Y/Z Euler rocking and heading, then the
    /// shape's own model-space correction
    pub fn model_matrix(&self) -> Mat4 {
        let world = Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll),
            self.translation,
        );

        let local = match self.shape {
            PoseShape::Model {
                scale,
                model_yaw_rad,
                ..
            } => Mat4::from_scale_rotation_translation(
                Vec3::splat(scale),
                Quat::from_rotation_y(model_yaw_rad),
                Vec3::ZERO,
            ),
            PoseShape::Placeholder { size, .. } => Mat4::from_scale(size),
        };

        world * local
    }
}

/// Per-instance record for a boat instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct BoatInstance {
    pub model: [[f32; 4]; 4],
    /// 0 = mesh, 1 = loading placeholder, 2 = missing-asset placeholder
    pub shape_kind: u32,
    pub _padding: [u32; 3], // Padding for alignment
}

impl From<&BoatPose> for BoatInstance {
    fn from(pose: &BoatPose) -> Self {
        let shape_kind = match pose.shape {
            PoseShape::Model { .. } => 0,
            PoseShape::Placeholder { failed: false, .. } => 1,
            PoseShape::Placeholder { failed: true, .. } => 2,
        };
        Self {
            model: pose.model_matrix().to_cols_array_2d(),
            shape_kind,
            _padding: [0; 3],
        }
    }
}
