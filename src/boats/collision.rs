//! Look-ahead collision heuristic (stop/go signal, no steering).

use super::agent::BoatAgent;
use crate::params::BoatSystemConfig;

/// How far ahead a boat's course is projected (seconds)
pub const LOOKAHEAD_S: f32 = 2.0;

/// Nearest flagged neighbor, if any
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionInfo {
    pub has_collision: bool,
    /// Ground distance from the projected position to the flagged neighbor
    /// (`f32::INFINITY` when nothing is flagged)
    pub distance: f32,
    pub other_id: Option<String>,
}

impl CollisionInfo {
    fn clear() -> Self {
        Self {
            has_collision: false,
            distance: f32::INFINITY,
            other_id: None,
        }
    }
}

/// Find the closest boat that `agent` would come dangerously near
///
/// The agent is projected [`LOOKAHEAD_S`] seconds along its heading at its base speed
/// and compared against every other boat's current position. A neighbor is dangerous
/// below `agent.collision_radius + other.collision_radius + config.collision_distance`.
/// Ties keep the first boat in `agents` order.
pub fn nearest_dangerous_neighbor(
    agent: &BoatAgent,
    agents: &[BoatAgent],
    config: &BoatSystemConfig,
) -> CollisionInfo {
    let future = agent.position_xz() + agent.velocity(agent.speed) * LOOKAHEAD_S;
    let mut nearest = CollisionInfo::clear();

    for other in agents.iter().filter(|other| other.id != agent.id) {
        let distance = future.distance(other.position_xz());
        let threshold = agent.collision_radius + other.collision_radius + config.collision_distance;

        if distance < threshold && distance < nearest.distance {
            nearest = CollisionInfo {
                has_collision: true,
                distance,
                other_id: Some(other.id.clone()),
            };
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boats::agent::create_random_agent;
    use crate::random::ScriptedRandom;
    use glam::{Vec2, Vec3};

    fn boat_at(id: &str, x: f32, z: f32) -> BoatAgent {
        let config = BoatSystemConfig::default();
        let mut boat = create_random_agent(id, &config, &mut ScriptedRandom::constant(0.5));
        boat.position = Vec3::new(x, 0.0, z);
        boat.set_direction(Vec2::X);
        boat.speed = 0.0;
        boat
    }

    #[test]
    fn test_close_pair_collides() {
        let config = BoatSystemConfig::default();
        let a = boat_at("a", 0.0, 0.0);
        let b = boat_at("b", 5.0, 0.0);
        let boats = vec![a.clone(), b];

        let info = nearest_dangerous_neighbor(&a, &boats, &config);
        assert!(info.has_collision);
        assert_eq!(info.other_id.as_deref(), Some("b"));
        assert!((info.distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distant_pair_is_clear() {
        let config = BoatSystemConfig::default();
        let a = boat_at("a", 0.0, 0.0);
        let b = boat_at("b", 40.0, 0.0);
        let boats = vec![a.clone(), b];

        let info = nearest_dangerous_neighbor(&a, &boats, &config);
        assert!(!info.has_collision);
        assert_eq!(info.other_id, None);
        assert!(info.distance.is_infinite());
    }

    #[test]
    fn test_projection_uses_heading_and_speed() {
        let config = BoatSystemConfig::default();
        // 40 apart now, but 2s at 5 u/s closes to 30 < 31
        let mut a = boat_at("a", 0.0, 0.0);
        a.speed = 5.0;
        let b = boat_at("b", 40.0, 0.0);
        let boats = vec![a.clone(), b];

        let info = nearest_dangerous_neighbor(&a, &boats, &config);
        assert!(info.has_collision);
        assert!((info.distance - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_reports_nearest_and_first_on_tie() {
        let config = BoatSystemConfig::default();
        let a = boat_at("a", 0.0, 0.0);
        let far = boat_at("far", 20.0, 0.0);
        let near_1 = boat_at("near-1", 0.0, 10.0);
        let near_2 = boat_at("near-2", 0.0, -10.0);
        let boats = vec![a.clone(), far, near_1, near_2];

        let info = nearest_dangerous_neighbor(&a, &boats, &config);
        assert_eq!(info.other_id.as_deref(), Some("near-1"));
    }

    #[test]
    fn test_alone_is_clear() {
        let config = BoatSystemConfig::default();
        let a = boat_at("a", 0.0, 0.0);
        let info = nearest_dangerous_neighbor(&a, std::slice::from_ref(&a), &config);
        assert!(!info.has_collision);
    }
}
