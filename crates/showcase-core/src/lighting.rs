//! Light rig, atmosphere, and the per-frame lighting director.

use crate::clock::TimeSample;
use crate::color::Rgb;
use crate::constants::*;
use crate::mode::{ModePreset, ViewMode};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl Light {
    fn new(hex: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            intensity,
            position,
        }
    }
}

/// The scene's lights. Ambient has no meaningful position.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: Light,
    pub key: Light,
    pub rim: Light,
    pub accent: Light,
    pub glow1: Light,
    pub glow2: Light,
}

pub const GLOW1_HOME: Vec3 = Vec3::new(-5.0, 5.0, -3.0);
pub const GLOW2_HOME: Vec3 = Vec3::new(5.0, 3.0, 2.0);

impl Default for LightRig {
    fn default() -> Self {
        let normal = ModePreset::NORMAL;
        Self {
            ambient: Light::new(0x4a6fa5, normal.ambient, Vec3::ZERO),
            key: Light::new(0x6eb3ff, normal.key, Vec3::new(-8.0, 12.0, 6.0)),
            rim: Light::new(0x88ccff, normal.rim, Vec3::new(3.0, 3.0, -8.0)),
            accent: Light::new(0xaaddff, 1.5, Vec3::new(0.0, -2.0, 3.0)),
            glow1: Light::new(0x66aaff, normal.glow1, GLOW1_HOME),
            glow2: Light::new(0x88ddff, normal.glow2, GLOW2_HOME),
        }
    }
}

/// Background, fog and the shared sparkle opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_density: f32,
    pub sparkle_opacity: f32,
}

impl Default for Atmosphere {
    fn default() -> Self {
        let normal = ModePreset::NORMAL;
        Self {
            background: Rgb::from_hex(normal.background),
            fog_color: Rgb::from_hex(normal.background),
            fog_density: normal.fog_density,
            sparkle_opacity: 0.6,
        }
    }
}

/// Fog density for a scroll position outside Hero mode.
#[inline]
pub fn scroll_fog_density(scroll_eased: f32) -> f32 {
    FOG_DENSITY_TOP + (FOG_DENSITY_BOTTOM - FOG_DENSITY_TOP) * scroll_eased
}

#[inline]
pub fn sparkle_opacity(time: &TimeSample, scroll_eased: f32) -> f32 {
    (SPARKLE_OPACITY_BASE
        + SPARKLE_OPACITY_AMP * time.sin_ms(SPARKLE_OPACITY_FREQ)
        + SPARKLE_OPACITY_SCROLL * scroll_eased)
        .clamp(0.0, 1.0)
}

pub struct LightingDirector;

impl LightingDirector {
    /// Per-frame pass. Hero mode keeps its preset glow levels and fog; drift
    /// and sparkle opacity animate in both modes.
    pub fn update(
        mode: ViewMode,
        time: &TimeSample,
        scroll_eased: f32,
        lights: &mut LightRig,
        atmosphere: &mut Atmosphere,
    ) {
        if mode == ViewMode::Normal {
            let base = ModePreset::NORMAL;
            lights.glow1.intensity = base.glow1
                + GLOW1_AMP * time.sin_ms(GLOW1_FREQ)
                + GLOW1_SCROLL_BOOST * scroll_eased;
            lights.glow2.intensity = base.glow2
                + GLOW2_AMP * time.cos_ms(GLOW2_FREQ)
                + GLOW2_SCROLL_BOOST * scroll_eased;
            atmosphere.fog_density = scroll_fog_density(scroll_eased);
        }

        lights.glow1.position.x = GLOW1_HOME.x + time.sin_ms(GLOW1_DRIFT_FREQ) * GLOW1_DRIFT_AMP;
        lights.glow2.position.z = GLOW2_HOME.z + time.cos_ms(GLOW2_DRIFT_FREQ) * GLOW2_DRIFT_AMP;

        atmosphere.sparkle_opacity = sparkle_opacity(time, scroll_eased);
    }
}
