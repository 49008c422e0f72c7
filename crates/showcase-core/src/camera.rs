//! Camera projection, choreography and the orbit-control collaborator.

use crate::clock::TimeSample;
use crate::constants::*;
use crate::mode::ViewMode;
use crate::pick::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space ray from the eye through an NDC point on the near plane.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, (p1 - self.eye).normalize_or_zero())
    }
}

/// Who currently drives the eye position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraControl {
    Autonomous,
    User,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub orbit_angle: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: CAMERA_START_EYE,
            target: Vec3::ZERO,
            orbit_angle: 0.0,
        }
    }
}

/// Exponential smoothing step: move `factor` of the remaining distance.
#[inline]
pub fn approach(current: Vec3, goal: Vec3, factor: f32) -> Vec3 {
    current + (goal - current) * factor
}

pub struct CameraDirector {
    pub rig: CameraRig,
    control: CameraControl,
    base_radius: f32,
    base_height: f32,
}

impl CameraDirector {
    pub fn new(base_radius: f32, base_height: f32) -> Self {
        Self {
            rig: CameraRig::default(),
            control: CameraControl::Autonomous,
            base_radius,
            base_height,
        }
    }

    pub fn control(&self) -> CameraControl {
        self.control
    }

    pub fn begin_user_orbit(&mut self) {
        if self.control != CameraControl::User {
            log::debug!("[camera] user orbit start");
            self.control = CameraControl::User;
        }
    }

    pub fn end_user_orbit(&mut self) {
        if self.control != CameraControl::Autonomous {
            log::debug!("[camera] user orbit end");
            self.control = CameraControl::Autonomous;
        }
    }

    /// Eye goal for the autonomous orbit at the current angle and scroll.
    pub fn orbit_goal(&self, time: &TimeSample, scroll_eased: f32) -> Vec3 {
        let radius = self.base_radius * (1.0 - SCROLL_RADIUS_SHRINK * scroll_eased);
        let height = self.base_height + SCROLL_HEIGHT_LIFT * scroll_eased;
        let a = self.rig.orbit_angle;
        Vec3::new(
            a.sin() * radius,
            height + time.sin_ms(CAMERA_BOB_FREQ) * CAMERA_BOB_AMP,
            a.cos() * radius,
        )
    }

    pub fn look_at_goal(time: &TimeSample) -> Vec3 {
        Vec3::new(0.0, time.sin_ms(LOOK_AT_BOB_FREQ) * LOOK_AT_BOB_AMP, 0.0)
    }

    /// Advance the rig one frame.
    ///
    /// The autonomous orbit angle accumulates the clamped frame delta and
    /// pauses during user orbit, so after a stall or a drag it lags
    /// `elapsed_ms * ORBIT_SPEED_PER_MS` instead of snapping forward.
    pub fn update(
        &mut self,
        mode: ViewMode,
        time: &TimeSample,
        scroll_eased: f32,
        controls: &mut OrbitControls,
    ) {
        match (mode, self.control) {
            (ViewMode::Hero, _) => {
                self.rig.position = approach(self.rig.position, HERO_EYE, HERO_SMOOTHING);
                self.rig.target = approach(self.rig.target, HERO_LOOK_AT, HERO_SMOOTHING);
                controls.target = self.rig.target;
            }
            (ViewMode::Normal, CameraControl::Autonomous) => {
                self.rig.orbit_angle += time.delta_ms() * ORBIT_SPEED_PER_MS;
                let goal = self.orbit_goal(time, scroll_eased);
                self.rig.position = approach(self.rig.position, goal, ORBIT_SMOOTHING);
                self.rig.target = Self::look_at_goal(time);
                controls.target = self.rig.target;
            }
            (ViewMode::Normal, CameraControl::User) => {
                let goal = Self::look_at_goal(time);
                controls.target = controls.target.lerp(goal, USER_TARGET_LERP);
                controls.update(&mut self.rig.position);
                self.rig.target = controls.target;
            }
        }
    }

    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.rig.position;
        camera.target = self.rig.target;
    }
}

/// Pointer-drag orbit around a target point.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: Vec3,
    dragging: bool,
    last_pointer: Vec2,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            dragging: false,
            last_pointer: Vec2::ZERO,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }
}

impl OrbitControls {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start signal. Returns false when disabled so the caller keeps autonomy.
    pub fn start(&mut self, pointer: Vec2) -> bool {
        if !self.enabled {
            return false;
        }
        self.dragging = true;
        self.last_pointer = pointer;
        true
    }

    /// End signal. Returns true if a drag was actually in progress.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Feed the latest pointer position; accumulates rotation for `update`.
    pub fn track(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        let d = pointer - self.last_pointer;
        self.last_pointer = pointer;
        // NDC spans 2 units per viewport.
        self.pending_yaw -= d.x * 0.5 * ORBIT_ROTATE_SPEED;
        self.pending_pitch += d.y * 0.5 * ORBIT_ROTATE_SPEED;
    }

    /// Apply accumulated rotation to `eye`, keeping its distance to `target`.
    pub fn update(&mut self, eye: &mut Vec3) {
        let offset = *eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            return;
        }
        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
        yaw += self.pending_yaw;
        pitch = (pitch + self.pending_pitch).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        let horizontal = radius * pitch.cos();
        *eye = self.target
            + Vec3::new(
                yaw.sin() * horizontal,
                radius * pitch.sin(),
                yaw.cos() * horizontal,
            );
    }
}
