//! Scene state owned by the frame orchestrator, and the read-only view of it
//! handed to renderers.
//!
//! These types avoid referencing platform-specific APIs and are used by both
//! the native and web frontends.

use crate::camera::{Camera, CameraDirector, OrbitControls};
use crate::clock::TimeSample;
use crate::config::ShowcaseConfig;
use crate::hover::HoverTracker;
use crate::lighting::{Atmosphere, LightRig};
use crate::mode::{StatusMessage, ViewMode};
use crate::model::{AnimationMixer, ModelHandle, ModelPose, ModelScene, Placeholder};
use crate::particles::{field_seed, MistField, PointBuffer, SnowField, SparkleField};
use crate::pick::{Hit, RayIntersect};
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

pub struct SceneState {
    pub mode: ViewMode,
    pub camera: Camera,
    pub director: CameraDirector,
    pub controls: OrbitControls,
    pub lights: LightRig,
    pub atmosphere: Atmosphere,
    pub snow: SnowField,
    pub mist: MistField,
    pub sparkles: SparkleField,
    pub hover: HoverTracker,
    pub model: ModelHandle,
    pub model_scene: Option<ModelScene>,
    pub placeholder_points: Vec<Vec3>,
    pub pose: ModelPose,
    pub mixer: Option<AnimationMixer>,
    pub status: StatusMessage,
    pub cursor: CursorStyle,
}

impl SceneState {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            mode: ViewMode::Normal,
            camera: Camera::default(),
            director: CameraDirector::new(config.camera_base_radius, config.camera_base_height),
            controls: OrbitControls::default(),
            lights: LightRig::default(),
            atmosphere: Atmosphere::default(),
            snow: SnowField::new(config.snow_count, field_seed(config.seed, 1)),
            mist: MistField::new(config.mist_count, field_seed(config.seed, 2)),
            sparkles: SparkleField::new(config.sparkle_count, field_seed(config.seed, 3)),
            hover: HoverTracker::new(),
            model: ModelHandle::Unloaded,
            model_scene: None,
            placeholder_points: Placeholder::points(config.placeholder_points),
            pose: ModelPose::default(),
            mixer: None,
            status: StatusMessage::Loading,
            cursor: CursorStyle::Default,
        }
    }

    /// World transform of whatever stands in for the model this frame.
    pub fn model_transform(&self) -> Mat4 {
        self.pose.matrix(!self.model.is_loaded())
    }

    /// Cast a ray through `ndc` against the current model capability.
    pub fn pick(&self, ndc: Vec2) -> Vec<Hit> {
        let ray = self.camera.ray_from_ndc(ndc);
        let transform = self.model_transform();
        match (&self.model, &self.model_scene) {
            (ModelHandle::Loaded { .. }, Some(scene)) => scene.intersect(&ray, &transform),
            (ModelHandle::Placeholder, _) => Placeholder.intersect(&ray, &transform),
            _ => Vec::new(),
        }
    }
}

pub enum ModelView<'a> {
    /// Placeholder sphere, shown while loading and after a failed load.
    Placeholder {
        points: &'a [Vec3],
        transform: Mat4,
    },
    Loaded {
        scene: &'a ModelScene,
        transform: Mat4,
    },
}

/// Everything a renderer needs for one frame, borrowed from the scene.
pub struct FrameView<'a> {
    pub time: TimeSample,
    pub mode: ViewMode,
    pub camera: &'a Camera,
    pub lights: &'a LightRig,
    pub atmosphere: &'a Atmosphere,
    pub snow: &'a PointBuffer,
    pub mist: &'a PointBuffer,
    pub sparkles: &'a PointBuffer,
    pub particles_dirty: bool,
    pub model: ModelView<'a>,
}

impl<'a> FrameView<'a> {
    pub fn from_scene(scene: &'a SceneState, time: TimeSample, particles_dirty: bool) -> Self {
        let transform = scene.model_transform();
        let model = match (&scene.model, &scene.model_scene) {
            (ModelHandle::Loaded { .. }, Some(s)) => ModelView::Loaded {
                scene: s,
                transform,
            },
            _ => ModelView::Placeholder {
                points: &scene.placeholder_points,
                transform,
            },
        };
        Self {
            time,
            mode: scene.mode,
            camera: &scene.camera,
            lights: &scene.lights,
            atmosphere: &scene.atmosphere,
            snow: &scene.snow.points,
            mist: &scene.mist.points,
            sparkles: &scene.sparkles.points,
            particles_dirty,
            model,
        }
    }
}
