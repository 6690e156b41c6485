//! Command-line argument parsing.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use seatraffic::params::{
    BoatSystemConfig, CameraPreset, CollisionMode, FixedCamera, PointerPanCamera, RecordingConfig,
    SweepCamera,
};
use seatraffic::theme::ThemeMode;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seatraffic")]
#[command(about = "Headless boat traffic for a decorative ocean scene", long_about = None)]
pub struct Args {
    /// Number of frames to simulate
    #[arg(long, value_name = "N", default_value = "600")]
    pub frames: usize,

    /// Simulated frames per second
    #[arg(long, value_name = "FPS", default_value = "30")]
    pub fps: f32,

    /// Random seed (entropy when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// JSON file with boat config overrides
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Camera preset: pointer (default), fixed, sweep
    #[arg(long, value_name = "PRESET", default_value = "pointer")]
    pub camera_preset: String,

    /// Collision mode override: off, halt
    #[arg(long, value_name = "MODE")]
    pub collision_mode: Option<String>,

    /// Theme: light (default), dark
    #[arg(long, value_name = "THEME", default_value = "light")]
    pub theme: String,

    /// Start a day/night toggle at this simulated time (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub toggle_theme_at: Option<f32>,

    /// Stars in the background starfield
    #[arg(long, value_name = "N", default_value = "5000")]
    pub stars: usize,

    /// Write top-down charts into this directory
    #[arg(long, value_name = "DIR")]
    pub record: Option<PathBuf>,

    /// Write a chart every N frames
    #[arg(long, value_name = "N", default_value = "10")]
    pub record_every: usize,
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "pointer" => {
                log::info!("Camera: pointer pan");
                CameraPreset::PointerPan(PointerPanCamera::default())
            }
            "fixed" => {
                log::info!("Camera: fixed");
                CameraPreset::Fixed(FixedCamera::default())
            }
            "sweep" => {
                log::info!("Camera: sweep");
                CameraPreset::Sweep(SweepCamera::default())
            }
            other => {
                log::warn!("Unknown camera preset '{}', using pointer", other);
                CameraPreset::default()
            }
        }
    }

    /// Parse theme from command-line arguments
    pub fn parse_theme(&self) -> ThemeMode {
        match self.theme.to_lowercase().as_str() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            other => {
                log::warn!("Unknown theme '{}', using light", other);
                ThemeMode::Light
            }
        }
    }

    /// Simulated frame rate, falling back to 30 for non-positive values
    pub fn frame_rate(&self) -> f32 {
        if self.fps.is_finite() && self.fps > 0.0 {
            self.fps
        } else {
            log::warn!("Invalid fps {}, using 30", self.fps);
            30.0
        }
    }

    /// Load boat configuration: defaults, then the JSON file, then CLI overrides
    pub fn load_boat_config(&self) -> Result<BoatSystemConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                log::info!("Loaded boat config from {}", path.display());
                BoatSystemConfig::from_json_str(&json)?
            }
            None => BoatSystemConfig::default(),
        };

        if let Some(mode) = &self.collision_mode {
            config.collision_mode = match mode.to_lowercase().as_str() {
                "off" => CollisionMode::Off,
                "halt" => CollisionMode::Halt,
                other => {
                    log::warn!(
                        "Unknown collision mode '{}', keeping {:?}",
                        other,
                        config.collision_mode
                    );
                    config.collision_mode
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record
            .as_ref()
            .map(|dir| RecordingConfig::new(dir, self.record_every))
    }
}
