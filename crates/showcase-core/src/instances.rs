//! CPU-side packing of a `FrameView` into GPU instance data.
//!
//! Every visible thing is drawn as a camera-facing point sprite: model
//! sample points (lit on the CPU), the placeholder sphere, snow, mist and
//! sparkles. Both front-ends upload the same layout for `SCENE_WGSL`.

use crate::color::Rgb;
use crate::lighting::{Light, LightRig};
use crate::state::{FrameView, ModelView};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    /// xyz world position, w sprite size in world units
    pub pos_size: [f32; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    /// xyz eye, w fog density
    pub eye_fog: [f32; 4],
    pub fog_color: [f32; 4],
}

// Sprite sizes and colours
pub const MODEL_POINT_SIZE: f32 = 0.09;
pub const PLACEHOLDER_POINT_SIZE: f32 = 0.12;
pub const PLACEHOLDER_COLOR_RGB: u32 = 0x88ccff;
pub const SNOW_POINT_SIZE: f32 = 0.15;
pub const SNOW_ALPHA: f32 = 0.8;
pub const MIST_POINT_SIZE: f32 = 1.5;
pub const MIST_COLOR_RGB: u32 = 0x88ccff;
pub const MIST_ALPHA: f32 = 0.15;
pub const SPARKLE_POINT_SIZE: f32 = 0.08;
pub const SPARKLE_COLOR_RGB: u32 = 0xddffff;

// Point-light falloff distance for the glow and accent lights
const POINT_LIGHT_RANGE: f32 = 20.0;

pub fn scene_uniforms(frame: &FrameView<'_>) -> SceneUniforms {
    let cam = frame.camera;
    let view = cam.view_matrix();
    let right = view.row(0).truncate();
    let up = view.row(1).truncate();
    let fog = frame.atmosphere.fog_color.0;
    SceneUniforms {
        view_proj: cam.view_proj().to_cols_array_2d(),
        camera_right: right.extend(0.0).to_array(),
        camera_up: up.extend(0.0).to_array(),
        eye_fog: cam.eye.extend(frame.atmosphere.fog_density).to_array(),
        fog_color: fog.extend(1.0).to_array(),
    }
}

/// Background colour for the clear pass.
pub fn clear_color(frame: &FrameView<'_>) -> [f64; 4] {
    let c = frame.atmosphere.background.0;
    [c.x as f64, c.y as f64, c.z as f64, 1.0]
}

/// Packs frames into sprite instances. Snow and mist are cached between
/// frames and re-packed only when the frame reports moved particles;
/// sparkles are re-packed every frame since their opacity animates.
#[derive(Default)]
pub struct InstanceBuilder {
    drift: Vec<PointInstance>,
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `out` with this frame's sprites, model first so the translucent
    /// particles blend over it.
    pub fn build(&mut self, frame: &FrameView<'_>, out: &mut Vec<PointInstance>) {
        out.clear();
        push_model(frame, out);

        if frame.particles_dirty {
            self.drift.clear();
            self.drift.reserve(frame.snow.len() + frame.mist.len());
            let snow = Vec3::ONE;
            self.drift
                .extend(frame.snow.iter().map(|p| sprite(p, SNOW_POINT_SIZE, snow, SNOW_ALPHA)));
            let mist = Rgb::from_hex(MIST_COLOR_RGB).0;
            self.drift
                .extend(frame.mist.iter().map(|p| sprite(p, MIST_POINT_SIZE, mist, MIST_ALPHA)));
        }
        out.extend_from_slice(&self.drift);

        let sparkle = Rgb::from_hex(SPARKLE_COLOR_RGB).0;
        let alpha = frame.atmosphere.sparkle_opacity;
        out.extend(
            frame
                .sparkles
                .iter()
                .map(|p| sprite(p, SPARKLE_POINT_SIZE, sparkle, alpha)),
        );
    }
}

fn push_model(frame: &FrameView<'_>, out: &mut Vec<PointInstance>) {
    match &frame.model {
        ModelView::Loaded { scene, transform } => {
            for mesh in &scene.meshes {
                let emissive = mesh
                    .material
                    .map(|e| e.color.0 * e.intensity)
                    .unwrap_or(Vec3::ZERO);
                for p in &mesh.points {
                    let world = transform.transform_point3(*p);
                    let lit = shade(world, mesh.base_color, frame.lights) + emissive;
                    out.push(sprite(world, MODEL_POINT_SIZE, lit, 1.0));
                }
            }
        }
        ModelView::Placeholder { points, transform } => {
            let base = Rgb::from_hex(PLACEHOLDER_COLOR_RGB);
            push_points(out, points, transform, base, frame.lights);
        }
    }
}

fn push_points(
    out: &mut Vec<PointInstance>,
    points: &[Vec3],
    transform: &Mat4,
    base: Rgb,
    lights: &LightRig,
) {
    for p in points {
        let world = transform.transform_point3(*p);
        out.push(sprite(world, PLACEHOLDER_POINT_SIZE, shade(world, base, lights), 1.0));
    }
}

#[inline]
fn sprite(pos: Vec3, size: f32, rgb: Vec3, alpha: f32) -> PointInstance {
    PointInstance {
        pos_size: pos.extend(size).to_array(),
        color: rgb.extend(alpha).to_array(),
    }
}

/// Cheap per-point lighting: ambient plus distance-attenuated point lights.
pub fn shade(world: Vec3, base: Rgb, lights: &LightRig) -> Vec3 {
    let mut light = lights.ambient.color.0 * lights.ambient.intensity;
    for l in [&lights.key, &lights.rim, &lights.accent, &lights.glow1, &lights.glow2] {
        light += contribution(world, l);
    }
    base.0 * light
}

#[inline]
fn contribution(world: Vec3, light: &Light) -> Vec3 {
    let d = world.distance(light.position);
    let falloff = (1.0 - d / POINT_LIGHT_RANGE).clamp(0.0, 1.0);
    light.color.0 * light.intensity * falloff * falloff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeSample;
    use crate::config::ShowcaseConfig;
    use crate::state::SceneState;

    fn small_scene() -> SceneState {
        SceneState::new(&ShowcaseConfig {
            snow_count: 4,
            mist_count: 2,
            sparkle_count: 3,
            placeholder_points: 5,
            ..ShowcaseConfig::default()
        })
    }

    #[test]
    fn clean_frames_reuse_packed_snow_and_mist() {
        let mut scene = small_scene();
        let mut builder = InstanceBuilder::new();
        let mut out = Vec::new();
        let t = TimeSample::new(0.0, 0.016);

        builder.build(&FrameView::from_scene(&scene, t, true), &mut out);
        assert_eq!(out.len(), 5 + 4 + 2 + 3);
        let first_snow = out[5];

        scene.snow.step(1.0, 0.0);
        builder.build(&FrameView::from_scene(&scene, t, false), &mut out);
        assert_eq!(out.len(), 5 + 4 + 2 + 3);
        assert_eq!(out[5], first_snow);

        builder.build(&FrameView::from_scene(&scene, t, true), &mut out);
        assert_ne!(out[5], first_snow);
        assert_eq!(out[5].pos_size[..3], scene.snow.points.get(0).to_array());
    }

    #[test]
    fn sparkle_opacity_is_applied_on_clean_frames() {
        let mut scene = small_scene();
        let mut builder = InstanceBuilder::new();
        let mut out = Vec::new();
        let t = TimeSample::new(0.0, 0.016);
        builder.build(&FrameView::from_scene(&scene, t, true), &mut out);

        scene.atmosphere.sparkle_opacity = 0.25;
        builder.build(&FrameView::from_scene(&scene, t, false), &mut out);
        let last = out.last().copied().expect("sparkle");
        assert_eq!(last.color[3], 0.25);
    }

    #[test]
    fn shade_is_black_without_lights() {
        let mut rig = LightRig::default();
        for l in [
            &mut rig.ambient,
            &mut rig.key,
            &mut rig.rim,
            &mut rig.accent,
            &mut rig.glow1,
            &mut rig.glow2,
        ] {
            l.intensity = 0.0;
        }
        assert_eq!(shade(Vec3::ZERO, Rgb::new(1.0, 1.0, 1.0), &rig), Vec3::ZERO);
    }

    #[test]
    fn brighter_rim_lights_points_more() {
        let mut rig = LightRig::default();
        let p = rig.rim.position * 0.5;
        let before = shade(p, Rgb::new(1.0, 1.0, 1.0), &rig);
        rig.rim.intensity *= 2.0;
        let after = shade(p, Rgb::new(1.0, 1.0, 1.0), &rig);
        assert!(after.length() > before.length());
    }
}
