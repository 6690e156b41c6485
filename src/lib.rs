//! Seatraffic library - Procedural boat traffic for a decorative ocean scene

pub mod boats;
pub mod camera;
pub mod geometry;
pub mod input;
pub mod params;
pub mod random;
pub mod recording;
pub mod render;
pub mod stars;
pub mod theme;
