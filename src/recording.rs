//! Top-down chart recording: one PNG per captured frame showing the camera wedge,
//! the spawn band and every boat.

use std::path::PathBuf;

use glam::Vec2;
use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::boats::{BoatAgent, BoatModel};
use crate::camera::CameraFrame;
use crate::geometry::{camera_basis_xz, horizontal_fov_radians};
use crate::params::{RecordingConfig, SpawnBand};
use crate::theme::ColorPalette;

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("could not create recording directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write chart: {0}")]
    Image(#[from] image::ImageError),
}

/// Half-size of a boat marker (pixels)
const MARKER_RADIUS_PX: i32 = 3;

/// Length of the heading tick drawn from each boat (world units)
const HEADING_TICK_M: f32 = 6.0;

fn to_rgb(c: [f32; 3]) -> Rgb<u8> {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([byte(c[0]), byte(c[1]), byte(c[2])])
}

fn model_color(model: BoatModel) -> Rgb<u8> {
    match model {
        BoatModel::Skiff => Rgb([240, 80, 60]),
        BoatModel::Trawler => Rgb([250, 190, 40]),
        BoatModel::Sailboat => Rgb([250, 250, 250]),
        BoatModel::Tug => Rgb([120, 220, 90]),
        BoatModel::Yacht => Rgb([200, 120, 240]),
    }
}

/// Writes top-down charts of the fleet
pub struct ChartRecorder {
    config: RecordingConfig,
    palette: ColorPalette,
}

impl ChartRecorder {
    /// Create the recorder and its output directories
    pub fn new(config: RecordingConfig, palette: ColorPalette) -> Result<Self, RecordingError> {
        std::fs::create_dir_all(config.frames_dir())?;
        log::info!("Recording charts to {}", config.frames_dir().display());
        Ok(Self { config, palette })
    }

    pub fn config(&self) -> &RecordingConfig {
        &self.config
    }

    /// Chart pixel for a world point; the camera sits at the centre, world -Z points up
    fn to_pixel(&self, camera: &CameraFrame, world: Vec2) -> (i32, i32) {
        let size = self.config.image_size_px as f32;
        let px_per_m = size / self.config.world_extent_m;
        let rel = world - Vec2::new(camera.position.x, camera.position.z);
        (
            (size / 2.0 + rel.x * px_per_m).round() as i32,
            (size / 2.0 + rel.y * px_per_m).round() as i32,
        )
    }

    fn plot(image: &mut RgbImage, (x, y): (i32, i32), color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
            image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn line(image: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 as f32 + (to.0 - from.0) as f32 * t;
            let y = from.1 as f32 + (to.1 - from.1) as f32 * t;
            Self::plot(image, (x.round() as i32, y.round() as i32), color);
        }
    }

    /// Draw one chart
    pub fn render_chart(
        &self,
        camera: &CameraFrame,
        band: &SpawnBand,
        boats: &[BoatAgent],
    ) -> RgbImage {
        let size = self.config.image_size_px;
        let mut image = RgbImage::from_pixel(size, size, to_rgb(self.palette.deep));

        let cam = Vec2::new(camera.position.x, camera.position.z);
        let (forward2, _) = camera_basis_xz(camera);
        let half_fov = horizontal_fov_radians(camera) / 2.0;
        let wedge_color = to_rgb(self.palette.light);
        let band_color = to_rgb(self.palette.secondary);

        // Frustum wedge edges
        for angle in [-half_fov, half_fov] {
            let edge = Vec2::from_angle(angle).rotate(forward2);
            Self::line(
                &mut image,
                self.to_pixel(camera, cam),
                self.to_pixel(camera, cam + edge * band.max_distance_m),
                wedge_color,
            );
        }

        // Band arcs inside the wedge
        for radius in [band.min_distance_m, band.max_distance_m] {
            let samples = 64;
            for i in 0..=samples {
                let angle = -half_fov + 2.0 * half_fov * i as f32 / samples as f32;
                let point = cam + Vec2::from_angle(angle).rotate(forward2) * radius;
                Self::plot(&mut image, self.to_pixel(camera, point), band_color);
            }
        }

        for boat in boats {
            let centre = self.to_pixel(camera, boat.position_xz());
            let color = model_color(boat.model);
            for dy in -MARKER_RADIUS_PX..=MARKER_RADIUS_PX {
                for dx in -MARKER_RADIUS_PX..=MARKER_RADIUS_PX {
                    Self::plot(&mut image, (centre.0 + dx, centre.1 + dy), color);
                }
            }
            let tip = boat.position_xz() + boat.direction() * HEADING_TICK_M;
            Self::line(&mut image, centre, self.to_pixel(camera, tip), color);
        }

        image
    }

    /// Write a chart if one is due this frame
    ///
    /// # Returns
    /// Path of the written file, or `None` when the frame is skipped
    pub fn capture(
        &self,
        frame_num: usize,
        camera: &CameraFrame,
        band: &SpawnBand,
        boats: &[BoatAgent],
    ) -> Result<Option<PathBuf>, RecordingError> {
        if !self.config.should_capture(frame_num) {
            return Ok(None);
        }
        let path = self.config.frame_path(frame_num);
        self.render_chart(camera, band, boats).save(&path)?;
        log::debug!("Wrote chart {}", path.display());
        Ok(Some(path))
    }
}
