//! Boat traffic: agents, model catalog, spawn placement, collision heuristic and the
//! population controller that ties them together.

pub mod agent;
pub mod catalog;
pub mod collision;
pub mod spawn;
pub mod system;

pub use agent::{create_random_agent, BoatAgent, BOAT_COLLISION_RADIUS, WATER_LEVEL};
pub use catalog::{BoatModel, ModelSpec};
pub use collision::{nearest_dangerous_neighbor, CollisionInfo, LOOKAHEAD_S};
pub use spawn::{initial_depths, initial_placements, spawn_ahead, spawn_at_side, Side, SideSpawn};
pub use system::{effective_speed, BoatSystem, ExitEvent, FrameReport};
