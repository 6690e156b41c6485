//! Background starfield generated once on the CPU.
//!
//! Stars sit on a spherical shell around the scene. Each one steps a little further
//! inward than the last, and hue sweeps once around the wheel across the whole set.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::params::{ConfigError, StarFieldConfig};
use crate::random::RandomSource;
use crate::theme::srgb_to_linear;

/// Lightness of every star color
const STAR_LIGHTNESS: f32 = 0.9;

/// Per-star record for a point vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    /// Point size (pixels)
    pub size: f32,
    /// Linear RGB
    pub color: [f32; 3],
    pub _padding: f32, // Padding for alignment
}

/// Uniformly distributed point on a sphere of `radius` around the origin
pub fn star_position(radius: f32, rng: &mut dyn RandomSource) -> Vec3 {
    // Polar angle from +Y, cosine uniform in [-1, 1]
    let theta = (1.0 - rng.next_unit() * 2.0).clamp(-1.0, 1.0).acos();
    let phi = rng.next_unit() * TAU;
    Vec3::new(
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
        radius * theta.sin() * phi.cos(),
    )
}

/// Convert an HSL color (all components in `[0, 1]`) to linear RGB
pub fn hsl_to_linear(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let hue = hue.rem_euclid(1.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    if saturation == 0.0 {
        let grey = srgb_to_linear(lightness);
        return [grey, grey, grey];
    }

    let q = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        let c = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        };
        srgb_to_linear(c)
    };

    [channel(hue + 1.0 / 3.0), channel(hue), channel(hue - 1.0 / 3.0)]
}

/// Generate the starfield
///
/// # Arguments
/// * `config` - Shell size, star count and look
/// * `rng` - Random source (per star: radius step, two position samples, size)
///
/// # Returns
/// One vertex per star, radii in `[radius_m, radius_m + depth_m]` and non-increasing
pub fn generate_star_field(
    config: &StarFieldConfig,
    rng: &mut dyn RandomSource,
) -> Result<Vec<StarVertex>, ConfigError> {
    config.validate()?;

    let mut stars = Vec::with_capacity(config.count);
    let step = if config.count > 0 {
        config.depth_m / config.count as f32
    } else {
        0.0
    };
    let mut radius = config.radius_m + config.depth_m;

    for i in 0..config.count {
        radius = (radius - step * rng.next_unit()).max(config.radius_m);
        let position = star_position(radius, rng);
        let color = hsl_to_linear(
            i as f32 / config.count as f32,
            config.saturation,
            STAR_LIGHTNESS,
        );
        let size = (0.5 + 0.5 * rng.next_unit()) * config.size_factor;

        stars.push(StarVertex {
            position: position.to_array(),
            size,
            color,
            _padding: 0.0,
        });
    }

    log::debug!(
        "Generated {} stars between {}m and {}m",
        stars.len(),
        config.radius_m,
        config.radius_m + config.depth_m
    );
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_count_and_radius_bounds() {
        let config = StarFieldConfig {
            count: 500,
            ..Default::default()
        };
        let stars = generate_star_field(&config, &mut SeededRandom::from_seed(12)).unwrap();
        assert_eq!(stars.len(), 500);

        let mut previous = f32::INFINITY;
        for star in &stars {
            let r = Vec3::from_array(star.position).length();
            assert!(
                r >= config.radius_m - 1e-3 && r <= config.radius_m + config.depth_m + 1e-3,
                "star radius {} outside shell",
                r
            );
            assert!(r <= previous + 1e-3, "radii should step inward");
            previous = r;
            assert!(star.size >= 2.0 && star.size <= 4.0);
        }
    }

    #[test]
    fn test_seeded_field_is_reproducible() {
        let config = StarFieldConfig {
            count: 64,
            ..Default::default()
        };
        let a = generate_star_field(&config, &mut SeededRandom::from_seed(3)).unwrap();
        let b = generate_star_field(&config, &mut SeededRandom::from_seed(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_saturation_gives_white_stars() {
        let config = StarFieldConfig {
            count: 8,
            ..Default::default()
        };
        let stars = generate_star_field(&config, &mut ScriptedRandom::constant(0.5)).unwrap();
        let grey = srgb_to_linear(0.9);
        for star in stars {
            assert_eq!(star.color, [grey, grey, grey]);
        }
    }

    #[test]
    fn test_hue_sweep() {
        let red = hsl_to_linear(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
        let green = hsl_to_linear(1.0 / 3.0, 1.0, 0.5);
        assert!(green[1] > 0.99 && green[0] < 1e-4);
    }

    #[test]
    fn test_sphere_poles() {
        // cos(theta) = 1 - 2u: u = 0 is the north pole
        let top = star_position(10.0, &mut ScriptedRandom::constant(0.0));
        assert!((top - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = StarFieldConfig {
            radius_m: f32::NAN,
            ..Default::default()
        };
        assert!(generate_star_field(&config, &mut ScriptedRandom::constant(0.5)).is_err());
        assert_eq!(std::mem::size_of::<StarVertex>(), 32);
    }
}
