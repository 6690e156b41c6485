//! Background starfield parameters.

use super::boats::ConfigError;

/// Star shell around the scene, generated once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct StarFieldConfig {
    /// Number of stars
    pub count: usize,

    /// Inner radius of the star shell (world units)
    pub radius_m: f32,

    /// Thickness of the star shell (world units)
    /// Stars start at `radius_m + depth_m` and step inward
    pub depth_m: f32,

    /// Color saturation (0 = white stars)
    pub saturation: f32,

    /// Point size multiplier (pixels)
    pub size_factor: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 5000,
            radius_m: 100.0,
            depth_m: 50.0,
            saturation: 0.0,
            size_factor: 4.0,
        }
    }
}

impl StarFieldConfig {
    /// Validate configuration (finite non-negative shell, saturation in [0, 1])
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shell_ok = self.radius_m.is_finite()
            && self.depth_m.is_finite()
            && self.radius_m >= 0.0
            && self.depth_m >= 0.0;
        let look_ok = (0.0..=1.0).contains(&self.saturation)
            && self.size_factor.is_finite()
            && self.size_factor >= 0.0;

        if !(shell_ok && look_ok) {
            return Err(ConfigError::StarField {
                radius: self.radius_m,
                depth: self.depth_m,
                saturation: self.saturation,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(StarFieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_depth_and_bad_saturation() {
        let config = StarFieldConfig {
            depth_m: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::StarField { .. })));

        let config = StarFieldConfig {
            saturation: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
