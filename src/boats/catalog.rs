//! Boat model catalog.
//!
//! Every per-model constant lives in one table so adding a hull is a one-place change.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Model-specific constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSpec {
    /// Asset location handed to the asset resolver
    pub asset_path: &'static str,

    /// Uniform scale applied to the loaded mesh
    pub scale: f32,

    /// Yaw added in model space so the hull's bow lines up with +X heading (radians)
    pub yaw_offset_rad: f32,

    /// -1 for meshes whose bow points opposite their authored forward axis
    pub forward_sign: f32,
}

/// Boat model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoatModel {
    Skiff,
    Trawler,
    Sailboat,
    Tug,
    Yacht,
}

impl BoatModel {
    pub const ALL: [BoatModel; 5] = [
        BoatModel::Skiff,
        BoatModel::Trawler,
        BoatModel::Sailboat,
        BoatModel::Tug,
        BoatModel::Yacht,
    ];

    /// Constants for this model
    pub fn spec(self) -> ModelSpec {
        match self {
            BoatModel::Skiff => ModelSpec {
                asset_path: "/static/models/boat_1.glb",
                scale: 0.05,
                yaw_offset_rad: -FRAC_PI_2,
                forward_sign: 1.0,
            },
            BoatModel::Trawler => ModelSpec {
                asset_path: "/static/models/boat_2.glb",
                scale: 0.004,
                yaw_offset_rad: 0.0,
                forward_sign: 1.0,
            },
            BoatModel::Sailboat => ModelSpec {
                asset_path: "/static/models/boat_3.glb",
                scale: 0.3,
                yaw_offset_rad: -FRAC_PI_2,
                forward_sign: -1.0,
            },
            BoatModel::Tug => ModelSpec {
                asset_path: "/static/models/boat_4.glb",
                scale: 0.3,
                yaw_offset_rad: 0.0,
                forward_sign: 1.0,
            },
            BoatModel::Yacht => ModelSpec {
                asset_path: "/static/models/boat_5.glb",
                scale: 0.005,
                yaw_offset_rad: -FRAC_PI_2 - 0.3,
                forward_sign: -1.0,
            },
        }
    }

    /// Model-space yaw: catalog offset, turned half a revolution for backward-facing meshes
    pub fn yaw_correction_rad(self) -> f32 {
        let spec = self.spec();
        if spec.forward_sign < 0.0 {
            spec.yaw_offset_rad + PI
        } else {
            spec.yaw_offset_rad
        }
    }
}

impl fmt::Display for BoatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().asset_path)
    }
}
