//! Model capability gate, the loaded model's mesh table, and idle animation.

use crate::clock::TimeSample;
use crate::color::Rgb;
use crate::constants::*;
use crate::pick::{ray_aabb, ray_sphere, sort_nearest_first, Aabb, Hit, MeshId, Ray, RayIntersect};
use glam::{Mat4, Quat, Vec3};

/// What the core knows about the model right now.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModelHandle {
    #[default]
    Unloaded,
    Loaded {
        bounding_size: Vec3,
        scale_factor: f32,
    },
    /// Load failed; the placeholder sphere stands in permanently.
    Placeholder,
}

impl ModelHandle {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelHandle::Loaded { .. })
    }
    pub fn is_unloaded(&self) -> bool {
        matches!(self, ModelHandle::Unloaded)
    }
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ModelHandle::Placeholder)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emissive {
    pub color: Rgb,
    pub intensity: f32,
}

impl Emissive {
    pub fn highlight() -> Self {
        Self {
            color: Rgb::from_hex(HIGHLIGHT_EMISSIVE_RGB),
            intensity: HIGHLIGHT_EMISSIVE_INTENSITY,
        }
    }
}

/// Material access into the scene graph by non-owning mesh handle.
pub trait EmissiveTarget {
    /// `None` for meshes without a highlightable material.
    fn emissive(&self, mesh: MeshId) -> Option<Emissive>;
    fn set_emissive(&mut self, mesh: MeshId, value: Emissive);
}

#[derive(Clone, Debug)]
pub struct SceneMesh {
    pub name: String,
    /// Bounds in model space (after centring, before scaling).
    pub bounds: Aabb,
    pub material: Option<Emissive>,
    pub base_color: Rgb,
    pub points: Vec<Vec3>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipInfo {
    pub name: String,
    pub duration: f32,
}

/// The loaded model as the core sees it: pickable meshes with materials.
///
/// Meshes are addressed by `MeshId` (their index). The table is never shrunk
/// while the model is alive, so handles stay valid for the session.
#[derive(Clone, Debug, Default)]
pub struct ModelScene {
    pub meshes: Vec<SceneMesh>,
    pub bounds: Aabb,
    pub clips: Vec<ClipInfo>,
    pub scale_factor: f32,
}

pub const CLICK_PROXY_NAME: &str = "dragonClickBox";

impl ModelScene {
    /// Centre the model on the origin, compute the fit scale and add the
    /// invisible click proxy. Returns the resulting capability handle.
    pub fn place(&mut self, target_size: f32) -> ModelHandle {
        let center = self.bounds.center();
        for m in &mut self.meshes {
            m.bounds = m.bounds.translated(-center);
            for p in &mut m.points {
                *p -= center;
            }
        }
        self.bounds = self.bounds.translated(-center);
        let size = self.bounds.size();
        let max_dim = self.bounds.max_dimension();
        self.scale_factor = if max_dim > f32::EPSILON {
            target_size / max_dim
        } else {
            1.0
        };
        self.meshes.push(SceneMesh {
            name: CLICK_PROXY_NAME.to_string(),
            bounds: self.bounds.scaled(CLICK_PROXY_SCALE),
            material: None,
            base_color: Rgb::new(0.0, 0.0, 0.0),
            points: Vec::new(),
        });
        ModelHandle::Loaded {
            bounding_size: size,
            scale_factor: self.scale_factor,
        }
    }

    pub fn mesh(&self, id: MeshId) -> Option<&SceneMesh> {
        self.meshes.get(id.0)
    }
}

impl RayIntersect for ModelScene {
    fn intersect(&self, ray: &Ray, transform: &Mat4) -> Vec<Hit> {
        let local = ray.to_local(transform);
        let mut hits: Vec<Hit> = self
            .meshes
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                ray_aabb(&local, &m.bounds).map(|t| Hit {
                    mesh: MeshId(i),
                    distance: t,
                })
            })
            .collect();
        sort_nearest_first(&mut hits);
        hits
    }
}

impl EmissiveTarget for ModelScene {
    fn emissive(&self, mesh: MeshId) -> Option<Emissive> {
        self.meshes.get(mesh.0).and_then(|m| m.material)
    }

    fn set_emissive(&mut self, mesh: MeshId, value: Emissive) {
        if let Some(mat) = self.meshes.get_mut(mesh.0).and_then(|m| m.material.as_mut()) {
            *mat = value;
        }
    }
}

/// Sphere shown while loading and after a failed load.
pub struct Placeholder;

impl Placeholder {
    pub const MESH: MeshId = MeshId(0);

    /// Roughly even points on the unit sphere (golden-angle spiral).
    pub fn points(count: usize) -> Vec<Vec3> {
        let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
        let n = count.max(2) as f32;
        (0..count)
            .map(|i| {
                let y = 1.0 - 2.0 * (i as f32 + 0.5) / n;
                let r = (1.0 - y * y).max(0.0).sqrt();
                let a = golden * i as f32;
                Vec3::new(a.cos() * r, y, a.sin() * r) * PLACEHOLDER_RADIUS
            })
            .collect()
    }
}

impl RayIntersect for Placeholder {
    fn intersect(&self, ray: &Ray, transform: &Mat4) -> Vec<Hit> {
        let local = ray.to_local(transform);
        ray_sphere(local.origin, local.dir, Vec3::ZERO, PLACEHOLDER_RADIUS)
            .map(|t| {
                vec![Hit {
                    mesh: Self::MESH,
                    distance: t,
                }]
            })
            .unwrap_or_default()
    }
}

/// Idle animation state applied on top of the fitted model transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub base_scale: f32,
    pub breath: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for ModelPose {
    fn default() -> Self {
        Self {
            base_scale: 1.0,
            breath: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl ModelPose {
    pub fn update(&mut self, handle: &ModelHandle, time: &TimeSample) {
        match handle {
            ModelHandle::Unloaded => {}
            ModelHandle::Loaded { scale_factor, .. } => {
                self.base_scale = *scale_factor;
                self.breath = time.sin_ms(BREATH_FREQ) * BREATH_AMP;
                self.yaw = time.sin_ms(SWAY_YAW_FREQ) * SWAY_YAW_AMP;
                self.pitch = time.sin_ms(SWAY_PITCH_FREQ) * SWAY_PITCH_AMP;
            }
            ModelHandle::Placeholder => {
                self.base_scale = 1.0;
                self.breath = time.sin_ms(BREATH_FREQ) * BREATH_AMP;
                self.yaw = (self.yaw + PLACEHOLDER_SPIN_PER_TICK) % std::f32::consts::TAU;
            }
        }
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::new(
            self.base_scale,
            self.base_scale * (1.0 + self.breath),
            self.base_scale,
        )
    }

    /// World transform for the posed model (or placeholder when `placeholder`).
    pub fn matrix(&self, placeholder: bool) -> Mat4 {
        let rotation = Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch);
        let translation = if placeholder {
            PLACEHOLDER_CENTER
        } else {
            Vec3::ZERO
        };
        Mat4::from_scale_rotation_translation(self.scale(), rotation, translation)
    }
}

/// Looping playback clocks for the model's animation clips.
#[derive(Clone, Debug)]
pub struct AnimationMixer {
    clips: Vec<ClipInfo>,
    times: Vec<f32>,
}

impl AnimationMixer {
    /// `None` when there is nothing to play.
    pub fn from_clips(clips: &[ClipInfo]) -> Option<Self> {
        let clips: Vec<ClipInfo> = clips
            .iter()
            .filter(|c| c.duration.is_finite() && c.duration > 0.0)
            .cloned()
            .collect();
        if clips.is_empty() {
            return None;
        }
        let times = vec![0.0; clips.len()];
        Some(Self { clips, times })
    }

    pub fn update(&mut self, delta_seconds: f32) {
        for (t, clip) in self.times.iter_mut().zip(&self.clips) {
            *t = (*t + delta_seconds) % clip.duration;
        }
    }

    pub fn clip_times(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.clips
            .iter()
            .zip(&self.times)
            .map(|(c, t)| (c.name.as_str(), *t))
    }
}
