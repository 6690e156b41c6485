//! Day/night theme: palettes, skybox intensity and the sun/moon toggle animation.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Skybox intensity at full day
pub const DAY_SKYBOX_INTENSITY: f32 = 1.0;

/// Skybox intensity at full night
pub const NIGHT_SKYBOX_INTENSITY: f32 = 0.1;

/// Length of a day/night toggle (seconds)
pub const TRANSITION_DURATION_S: f32 = 2.0;

/// Peak sun scale (world units)
pub const SUN_SCALE: f32 = 0.5;

/// Peak moon scale (world units)
pub const MOON_SCALE: f32 = 0.9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Resting skybox intensity for this mode
    pub fn skybox_intensity(self) -> f32 {
        match self {
            ThemeMode::Light => DAY_SKYBOX_INTENSITY,
            ThemeMode::Dark => NIGHT_SKYBOX_INTENSITY,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            ThemeMode::Light => ColorPalette::ocean_depths_light(),
            ThemeMode::Dark => ColorPalette::ocean_depths_dark(),
        }
    }
}

/// Convert one sRGB channel in `[0, 1]` to linear
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a packed `0xRRGGBB` sRGB color to linear RGB
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

/// Named scene colors (linear RGB)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub primary: [f32; 3],
    pub secondary: [f32; 3],
    pub accent: [f32; 3],
    pub deep: [f32; 3],
    pub light: [f32; 3],
    pub foam: [f32; 3],
    /// High-contrast text
    pub text: [f32; 3],
    /// High-contrast background
    pub background: [f32; 3],
}

impl ColorPalette {
    fn from_hex(hex: [u32; 8]) -> Self {
        Self {
            primary: srgb_hex_to_linear(hex[0]),
            secondary: srgb_hex_to_linear(hex[1]),
            accent: srgb_hex_to_linear(hex[2]),
            deep: srgb_hex_to_linear(hex[3]),
            light: srgb_hex_to_linear(hex[4]),
            foam: srgb_hex_to_linear(hex[5]),
            text: srgb_hex_to_linear(hex[6]),
            background: srgb_hex_to_linear(hex[7]),
        }
    }

    /// "Ocean Depths" day palette
    pub fn ocean_depths_light() -> Self {
        Self::from_hex([
            0x0EA5E9, // Sky blue
            0x06B6D4, // Cyan
            0xF59E0B, // Amber
            0x0369A1, // Deep blue
            0xBAE6FD, // Light blue
            0xF0F9FF, // Ice blue
            0xFFFFFF,
            0x0F172A,
        ])
    }

    /// "Ocean Depths" night palette
    pub fn ocean_depths_dark() -> Self {
        Self::from_hex([
            0x0C4A6E, // Deep ocean
            0x0E7490, // Teal
            0x1E40AF, // Indigo
            0x1E293B, // Slate
            0x334155, // Slate gray
            0x475569, // Cool gray
            0xF8FAFC,
            0x020617,
        ])
    }
}

/// Cosine ease used by the toggle: `0.5 * (1 - cos(pi * t))`
pub fn ease_in_out(t: f32) -> f32 {
    0.5 * (1.0 - (PI * t.clamp(0.0, 1.0)).cos())
}

/// Sun/moon toggle animation
///
/// The eased blend runs from 0 (full day) to 1 (full night). Toggles requested
/// mid-animation are ignored, and the mode flips once the animation settles.
#[derive(Debug, Clone, PartialEq)]
pub struct DayNightTransition {
    mode: ThemeMode,
    from: f32,
    to: f32,
    elapsed_s: f32,
    animating: bool,
}

impl DayNightTransition {
    pub fn new(mode: ThemeMode) -> Self {
        let rest = Self::rest_blend(mode);
        Self {
            mode,
            from: rest,
            to: rest,
            elapsed_s: 0.0,
            animating: false,
        }
    }

    fn rest_blend(mode: ThemeMode) -> f32 {
        match mode {
            ThemeMode::Light => 0.0,
            ThemeMode::Dark => 1.0,
        }
    }

    /// Mode in effect (changes when an animation completes)
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Start a toggle; returns false if one is already running
    pub fn toggle(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.from = Self::rest_blend(self.mode);
        self.to = Self::rest_blend(self.mode.toggled());
        self.elapsed_s = 0.0;
        self.animating = true;
        true
    }

    /// Advance the animation
    pub fn update(&mut self, dt_s: f32) {
        if !self.animating || !dt_s.is_finite() {
            return;
        }
        self.elapsed_s += dt_s.max(0.0);
        if self.elapsed_s >= TRANSITION_DURATION_S {
            self.animating = false;
            self.mode = self.mode.toggled();
            self.from = self.to;
            log::info!("Theme switched to {:?}", self.mode);
        }
    }

    /// Eased day-to-night blend in `[0, 1]`
    pub fn blend(&self) -> f32 {
        if !self.animating {
            return self.to;
        }
        let eased = ease_in_out(self.elapsed_s / TRANSITION_DURATION_S);
        self.from + (self.to - self.from) * eased
    }

    pub fn skybox_intensity(&self) -> f32 {
        let t = self.blend();
        DAY_SKYBOX_INTENSITY + (NIGHT_SKYBOX_INTENSITY - DAY_SKYBOX_INTENSITY) * t
    }

    /// Star brightness, the complement of the skybox intensity
    pub fn star_brightness(&self) -> f32 {
        1.0 - self.skybox_intensity()
    }

    /// Sun shrinks away over the first half of the blend
    pub fn sun_scale(&self) -> f32 {
        let t = self.blend();
        let factor = if t <= 0.5 { 1.0 - t * 2.0 } else { 0.0 };
        SUN_SCALE * factor
    }

    /// Moon grows over the second half of the blend
    pub fn moon_scale(&self) -> f32 {
        let t = self.blend();
        let factor = if t >= 0.5 { (t - 0.5) * 2.0 } else { 0.0 };
        MOON_SCALE * factor
    }
}

/// Uniform buffer for the scene shaders (camera, palette colors, theme state)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub primary: [f32; 4],
    pub secondary: [f32; 4],
    pub deep: [f32; 4],
    pub foam: [f32; 4],
    pub time: f32,
    pub skybox_intensity: f32,
    pub sun_scale: f32,
    pub moon_scale: f32,
    pub star_brightness: f32,
    pub _padding: [f32; 3], // Padding for alignment
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, transition: &DayNightTransition, time_s: f32) -> Self {
        let palette = transition.mode().palette();
        let rgba = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            primary: rgba(palette.primary),
            secondary: rgba(palette.secondary),
            deep: rgba(palette.deep),
            foam: rgba(palette.foam),
            time: time_s,
            skybox_intensity: transition.skybox_intensity(),
            sun_scale: transition.sun_scale(),
            moon_scale: transition.moon_scale(),
            star_brightness: transition.star_brightness(),
            _padding: [0.0; 3],
        }
    }
}
