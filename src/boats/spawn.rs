//! Camera-relative spawn placement on the ground plane.

use glam::{Vec2, Vec3};

use super::agent::WATER_LEVEL;
use crate::camera::CameraFrame;
use crate::geometry::{camera_basis_xz, ground_point, horizontal_fov_radians};
use crate::params::SpawnBand;
use crate::random::RandomSource;

/// Fraction of the frustum half-width at which edge respawns are placed
const EDGE_FRACTION: f32 = 0.9;

/// Spread of the edge jitter, as a fraction of the half-width
const EDGE_JITTER: f32 = 0.1;

/// Lateral side of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Placement produced by an edge respawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideSpawn {
    pub position: Vec3,
    /// Unit heading along the camera's right axis, either way
    pub heading: Vec2,
}

/// Point `distance_ahead` in front of the camera, spread across the frustum width
///
/// The lateral offset is uniform in `[-hw, hw]` with
/// `hw = tan(hfov / 2) * distance_ahead * lateral_coverage`.
pub fn spawn_ahead(
    camera: &CameraFrame,
    distance_ahead: f32,
    lateral_coverage: f32,
    rng: &mut dyn RandomSource,
) -> Vec3 {
    let half_width =
        (horizontal_fov_radians(camera) / 2.0).tan() * distance_ahead * lateral_coverage;
    let lateral = (rng.next_unit() * 2.0 - 1.0) * half_width;
    ground_point(camera, distance_ahead, lateral, WATER_LEVEL)
}

/// Depths for an initial batch of `count` boats
///
/// Boats occupy consecutive slots of depth
/// `max(min_separation, min(spawn_distance, band_width / count))`, each placed at the
/// middle of its slot measured from the near edge of the band, so they never stack
/// at one depth. Depths past the far edge are clamped to it.
pub fn initial_depths(band: &SpawnBand, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let band_width = band.max_distance_m - band.min_distance_m;
    let step = band
        .min_separation_m
        .max(band.spawn_distance_m.min(band_width / count as f32));

    (0..count)
        .map(|i| (band.min_distance_m + step * (i as f32 + 0.5)).min(band.max_distance_m))
        .collect()
}

/// Ground positions for an initial batch of `count` boats
///
/// Depths come from [`initial_depths`] over a band whose far edge is pulled in so that
/// even a boat at the lateral coverage limit stays within `max_distance_m` radially.
pub fn initial_placements(
    camera: &CameraFrame,
    band: &SpawnBand,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Vec<Vec3> {
    let tan_half = (horizontal_fov_radians(camera) / 2.0).tan();
    let reach = (1.0 + (band.lateral_coverage * tan_half).powi(2)).sqrt();
    let depth_band = SpawnBand {
        max_distance_m: (band.max_distance_m / reach).max(band.min_distance_m),
        ..*band
    };

    initial_depths(&depth_band, count)
        .into_iter()
        .map(|depth| spawn_ahead(camera, depth, band.lateral_coverage, rng))
        .collect()
}

/// Placement at the `side` edge of the view, at a random radial distance
///
/// The radial ground distance is uniform in `[min_distance, max_distance]`. The point
/// sits at `edge_sign * 0.9 * hw` plus a small jitter, where `hw = tan(hfov / 2) * depth`
/// and `depth` is solved so the lateral offset keeps the radial distance exact.
pub fn spawn_at_side(
    camera: &CameraFrame,
    side: Side,
    min_distance: f32,
    max_distance: f32,
    rng: &mut dyn RandomSource,
) -> SideSpawn {
    let max_distance = max_distance.max(min_distance + 1.0);
    let radial = rng.range(min_distance, max_distance);

    let tan_half = (horizontal_fov_radians(camera) / 2.0).tan();
    let edge = side.sign() * EDGE_FRACTION + (rng.next_unit() - 0.5) * EDGE_JITTER;
    let lateral_ratio = edge * tan_half;

    // radial^2 = depth^2 + (lateral_ratio * depth)^2
    let depth = radial / (1.0 + lateral_ratio * lateral_ratio).sqrt();
    let position = ground_point(camera, depth, lateral_ratio * depth, WATER_LEVEL);

    let (_, right2) = camera_basis_xz(camera);
    let heading = if rng.coin() { -right2 } else { right2 };

    SideSpawn { position, heading }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::geometry::{lateral_offset, radial_distance_xz};
    use crate::random::{ScriptedRandom, SeededRandom};

    fn camera() -> CameraFrame {
        CameraFrame {
            position: Vec3::new(0.0, 10.0, 15.0),
            forward: Vec3::new(0.0, -4.0, -30.0).normalize(),
            projection: Projection::Perspective {
                fov_y_rad: 30f32.to_radians(),
                aspect: 16.0 / 9.0,
            },
            near: 0.1,
            far: 500.0,
        }
    }

    #[test]
    fn test_spawn_ahead_stays_within_lateral_bound() {
        let camera = camera();
        let coverage = 0.8;
        let depth = 40.0;
        let bound = (horizontal_fov_radians(&camera) / 2.0).tan() * depth * coverage;

        let mut rng = SeededRandom::from_seed(1234);
        for _ in 0..500 {
            let p = spawn_ahead(&camera, depth, coverage, &mut rng);
            assert_eq!(p.y, WATER_LEVEL);
            assert!(
                lateral_offset(&camera, p).abs() <= bound + 1e-3,
                "lateral offset {} exceeds {}",
                lateral_offset(&camera, p),
                bound
            );
        }
    }

    #[test]
    fn test_spawn_ahead_is_reproducible_with_seed() {
        let camera = camera();
        let a = spawn_ahead(&camera, 30.0, 0.8, &mut SeededRandom::from_seed(5));
        let b = spawn_ahead(&camera, 30.0, 0.8, &mut SeededRandom::from_seed(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_ahead_extremes_hit_coverage_edges() {
        let camera = camera();
        let bound = (horizontal_fov_radians(&camera) / 2.0).tan() * 30.0 * 0.5;

        let left = spawn_ahead(&camera, 30.0, 0.5, &mut ScriptedRandom::constant(0.0));
        assert!((lateral_offset(&camera, left) + bound).abs() < 1e-3);

        let centre = spawn_ahead(&camera, 30.0, 0.5, &mut ScriptedRandom::constant(0.5));
        assert!(lateral_offset(&camera, centre).abs() < 1e-3);
    }

    #[test]
    fn test_initial_depths_are_spread_inside_band() {
        let band = SpawnBand::default();
        let depths = initial_depths(&band, 6);

        assert_eq!(depths.len(), 6);
        assert!(depths[0] > band.min_distance_m);
        for pair in depths.windows(2) {
            assert!(pair[1] > pair[0], "depths must strictly increase: {:?}", depths);
        }
        assert!(*depths.last().unwrap() <= band.max_distance_m);
    }

    #[test]
    fn test_initial_depths_respect_min_separation() {
        let band = SpawnBand {
            min_separation_m: 12.0,
            ..SpawnBand::default()
        };
        let depths = initial_depths(&band, 20);
        assert!((depths[1] - depths[0] - 12.0).abs() < 1e-4);
        // Tail clamps to the far edge rather than overshooting it
        assert_eq!(*depths.last().unwrap(), band.max_distance_m);
        assert!(initial_depths(&band, 0).is_empty());
    }

    #[test]
    fn test_initial_placements_stay_inside_radial_band() {
        let camera = camera();
        let band = SpawnBand::default();
        // Extreme laterals on every draw
        for value in [0.0, 0.999_999] {
            let mut rng = ScriptedRandom::constant(value);
            let points = initial_placements(&camera, &band, 6, &mut rng);
            assert_eq!(points.len(), 6);
            for p in points {
                let radial = radial_distance_xz(&camera, p);
                assert!(
                    radial > band.min_distance_m && radial <= band.max_distance_m,
                    "initial boat at radial {} outside band",
                    radial
                );
                assert!(camera.ndc_contains(p));
            }
        }
    }

    #[test]
    fn test_side_spawn_lands_on_requested_edge_within_band() {
        let camera = camera();
        let mut rng = SeededRandom::from_seed(77);

        for i in 0..200 {
            let side = if i % 2 == 0 { Side::Left } else { Side::Right };
            let spawn = spawn_at_side(&camera, side, 30.0, 80.0, &mut rng);

            let radial = radial_distance_xz(&camera, spawn.position);
            assert!(
                (30.0 - 1e-3..=80.0 + 1e-3).contains(&radial),
                "radial distance {} outside band",
                radial
            );
            assert_eq!(lateral_offset(&camera, spawn.position).signum(), side.sign());
            assert!(camera.ndc_contains(spawn.position), "edge spawn should be visible");
        }
    }

    #[test]
    fn test_side_spawn_heading_follows_right_axis() {
        let camera = camera();
        let (_, right2) = camera_basis_xz(&camera);

        // radial, jitter, coin
        let mut rng = ScriptedRandom::new(vec![0.5, 0.5, 0.1]);
        let toward_left = spawn_at_side(&camera, Side::Right, 30.0, 80.0, &mut rng);
        assert!((toward_left.heading + right2).length() < 1e-6);

        let mut rng = ScriptedRandom::new(vec![0.5, 0.5, 0.9]);
        let toward_right = spawn_at_side(&camera, Side::Right, 30.0, 80.0, &mut rng);
        assert!((toward_right.heading - right2).length() < 1e-6);
    }

    #[test]
    fn test_side_spawn_widens_degenerate_band() {
        let camera = camera();
        let mut rng = ScriptedRandom::constant(0.999);
        let spawn = spawn_at_side(&camera, Side::Left, 40.0, 40.0, &mut rng);
        let radial = radial_distance_xz(&camera, spawn.position);
        assert!(radial > 40.0 && radial <= 41.0 + 1e-3);
    }
}
