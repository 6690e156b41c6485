//! Seatraffic - Headless driver for the boat traffic simulation
//!
//! Runs the camera rig, population controller, render adapter and theme for a fixed
//! number of frames, logging a summary every simulated second and optionally
//! writing top-down charts of the fleet.

mod cli;

use std::error::Error;

use clap::Parser;

use cli::Args;
use seatraffic::boats::{BoatModel, BoatSystem};
use seatraffic::camera::CameraSystem;
use seatraffic::input::SceneInput;
use seatraffic::params::{RenderConfig, StarFieldConfig};
use seatraffic::random::{RandomSource, SeededRandom};
use seatraffic::recording::ChartRecorder;
use seatraffic::render::{
    fleet_poses, AssetCache, BoatInstance, StaticAssetResolver, PLACEHOLDER_SIZE,
};
use seatraffic::stars::{generate_star_field, StarVertex};
use seatraffic::theme::{DayNightTransition, SceneUniforms};

/// Resolver for headless runs: every hull scales to the placeholder's size
fn headless_resolver() -> StaticAssetResolver {
    BoatModel::ALL
        .iter()
        .fold(StaticAssetResolver::new(), |resolver, model| {
            resolver.with_size(*model, PLACEHOLDER_SIZE / model.spec().scale)
        })
}

/// Synthetic pointer drifting slowly across the window
fn drifting_pointer(input: &mut SceneInput, time_s: f32, render_config: &RenderConfig) {
    let width = render_config.window_width as f32;
    let height = render_config.window_height as f32;
    let x_px = width * (0.5 + 0.4 * (time_s * 0.2).sin());
    input.pointer_moved(x_px, height * 0.5, width, height);
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Seatraffic - procedural boat traffic");

    let boat_config = args.load_boat_config()?;
    let render_config = RenderConfig::default();
    let camera = CameraSystem::new(args.parse_camera_preset());
    let fps = args.frame_rate();
    let dt_s = 1.0 / fps;

    let (rng, mut star_rng): (Box<dyn RandomSource>, SeededRandom) = match args.seed {
        Some(seed) => {
            log::info!("Seed: {}", seed);
            (
                Box::new(SeededRandom::from_seed(seed)),
                SeededRandom::from_seed(seed.wrapping_add(1)),
            )
        }
        None => (
            Box::new(SeededRandom::from_entropy()),
            SeededRandom::from_entropy(),
        ),
    };

    let star_config = StarFieldConfig {
        count: args.stars,
        ..StarFieldConfig::default()
    };
    let stars = generate_star_field(&star_config, &mut star_rng)?;
    log::info!(
        "Starfield: {} stars, {} bytes",
        stars.len(),
        bytemuck::cast_slice::<StarVertex, u8>(&stars).len()
    );

    let mut input = SceneInput::default();
    let first_frame = camera.frame(0.0, &input, &render_config);
    let mut boats = BoatSystem::with_random(boat_config, &first_frame, rng)?;

    let mut transition = DayNightTransition::new(args.parse_theme());
    let mut theme_toggled = false;
    let mut assets = AssetCache::new(headless_resolver());

    let recorder = match args.create_recording_config() {
        Some(config) => Some(ChartRecorder::new(config, transition.mode().palette())?),
        None => None,
    };

    let frames_per_summary = (fps.round() as usize).max(1);
    let mut instances: Vec<BoatInstance> = Vec::with_capacity(boats.config().target_population);
    let mut exits_since_summary = 0;
    let mut halted_since_summary = 0;

    for frame_num in 0..args.frames {
        let time_s = frame_num as f32 * dt_s;
        drifting_pointer(&mut input, time_s, &render_config);

        if let Some(toggle_at) = args.toggle_theme_at {
            if !theme_toggled && time_s >= toggle_at {
                theme_toggled = transition.toggle();
                log::info!("Day/night toggle started at t={:.1}s", time_s);
            }
        }
        transition.update(dt_s);

        let frame = camera.frame(time_s, &input, &render_config);
        let report = boats.update(&frame, dt_s);
        exits_since_summary += report.exits.len();
        halted_since_summary += report.halted;

        let poses = fleet_poses(boats.boats(), time_s, &mut assets);
        instances.clear();
        instances.extend(poses.iter().map(BoatInstance::from));
        let uniforms = SceneUniforms::new(frame.view_proj(), &transition, time_s);

        if let Some(recorder) = &recorder {
            recorder.capture(frame_num, &frame, &boats.config().spawn, boats.boats())?;
        }

        if (frame_num + 1) % frames_per_summary == 0 {
            log::info!(
                "t={:.1}s boats={} exits={} halted={} skybox={:.2} stars={:.2}",
                time_s + dt_s,
                boats.boats().len(),
                exits_since_summary,
                halted_since_summary,
                uniforms.skybox_intensity,
                uniforms.star_brightness
            );
            log::debug!(
                "Instance buffer {} bytes, uniforms {} bytes",
                bytemuck::cast_slice::<BoatInstance, u8>(&instances).len(),
                bytemuck::bytes_of(&uniforms).len()
            );
            exits_since_summary = 0;
            halted_since_summary = 0;
        }
    }

    log::info!("Simulated {} frames", args.frames);
    Ok(())
}
