//! Frame orchestrator.
//!
//! One `tick` per display refresh: sample the clock, drain staged input,
//! advance every director in a fixed order, push feedback to the host, then
//! hand the frame to the renderer.

use crate::clock::{Clock, TimeSample};
use crate::config::ShowcaseConfig;
use crate::constants::{RIM_BASELINE, RIM_HIGHLIGHT};
use crate::error::LoadError;
use crate::hover::HoverTransition;
use crate::input::{HotKey, InputEvent, InputState};
use crate::lighting::LightingDirector;
use crate::mode::{apply_preset, next_mode, status_for, StatusMessage, ToggleTrigger, ViewMode};
use crate::model::{AnimationMixer, ModelHandle, ModelScene};
use crate::state::{CursorStyle, FrameView, SceneState};

/// Host page/window feedback. Implementations treat a missing sink (no
/// status element, no window) as a silent no-op.
pub trait HostSurface {
    fn set_status(&mut self, status: StatusMessage);
    fn set_cursor(&mut self, cursor: CursorStyle);
    fn toggle_fullscreen(&mut self);
}

pub trait SceneRenderer {
    fn render(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()>;
}

pub struct Showcase {
    config: ShowcaseConfig,
    clock: Clock,
    pub input: InputState,
    scene: SceneState,
    shown_status: Option<StatusMessage>,
    shown_cursor: CursorStyle,
    frames: u64,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        let clock = Clock::new(config.max_delta_seconds);
        let scene = SceneState::new(&config);
        log::info!(
            "[showcase] snow={} mist={} sparkles={} seed={}",
            scene.snow.points.len(),
            scene.mist.points.len(),
            scene.sparkles.points.len(),
            config.seed
        );
        Self {
            config,
            clock,
            input: InputState::new(),
            scene,
            shown_status: None,
            shown_cursor: CursorStyle::Default,
            frames: 0,
        }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Viewport change; projection only, simulation state is untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.camera.set_viewport(width, height);
    }

    /// Out-of-band completion of the model load. The first outcome wins: a
    /// failure downgrades to the placeholder for the rest of the session.
    pub fn on_model_loaded(&mut self, result: Result<ModelScene, LoadError>) {
        if !self.scene.model.is_unloaded() {
            log::warn!("[model] ignoring late load result; state is {:?}", self.scene.model);
            return;
        }
        match result {
            Ok(mut scene) => {
                let handle = scene.place(self.config.model_target_size);
                if let ModelHandle::Loaded {
                    bounding_size,
                    scale_factor,
                } = handle
                {
                    log::info!(
                        "[model] loaded size=({:.2},{:.2},{:.2}) scale={:.3}",
                        bounding_size.x,
                        bounding_size.y,
                        bounding_size.z,
                        scale_factor
                    );
                }
                self.scene.mixer = AnimationMixer::from_clips(&scene.clips);
                self.scene.model_scene = Some(scene);
                self.scene.model = handle;
                self.scene.status = StatusMessage::Ready;
            }
            Err(e) => {
                log::error!("[model] load failed, using placeholder: {e}");
                self.scene.model = ModelHandle::Placeholder;
                self.scene.status = StatusMessage::LoadFailed;
            }
        }
    }

    /// Run one frame against the wall clock.
    pub fn tick(&mut self, host: &mut dyn HostSurface, renderer: &mut dyn SceneRenderer) {
        let time = self.clock.tick();
        self.advance(time, host, renderer);
    }

    /// Run one frame with an explicit time sample.
    pub fn advance(
        &mut self,
        time: TimeSample,
        host: &mut dyn HostSurface,
        renderer: &mut dyn SceneRenderer,
    ) {
        self.frames += 1;
        self.handle_events(host);

        let eased = self.input.scroll.eased();
        let scene = &mut self.scene;

        scene.controls.track(self.input.pointer.as_vec2());
        scene
            .director
            .update(scene.mode, &time, eased, &mut scene.controls);
        scene.director.apply_to(&mut scene.camera);

        scene.pose.update(&scene.model, &time);
        if let Some(mixer) = scene.mixer.as_mut() {
            mixer.update(time.delta_seconds);
        }

        scene.snow.step(time.elapsed_seconds(), eased);
        scene.mist.step();

        self.update_hover();

        let scene = &mut self.scene;
        LightingDirector::update(scene.mode, &time, eased, &mut scene.lights, &mut scene.atmosphere);

        self.flush_feedback(host);

        let scene = &mut self.scene;
        let snow_dirty = scene.snow.points.take_dirty();
        let mist_dirty = scene.mist.points.take_dirty();
        let sparkles_dirty = scene.sparkles.points.take_dirty();
        let frame = FrameView::from_scene(scene, time, snow_dirty || mist_dirty || sparkles_dirty);
        if let Err(e) = renderer.render(&frame) {
            log::error!("render error: {:?}", e);
        }
    }

    fn handle_events(&mut self, host: &mut dyn HostSurface) {
        for ev in self.input.drain() {
            match ev {
                InputEvent::Key(HotKey::HeroView) => self.toggle_hero(ToggleTrigger::Key),
                InputEvent::Click => {
                    let hit = !self.scene.model.is_unloaded()
                        && !self.scene.pick(self.input.pointer.as_vec2()).is_empty();
                    let hovering = self.scene.hover.is_hovering();
                    self.toggle_hero(ToggleTrigger::Click { hit, hovering });
                }
                InputEvent::DoubleClick => host.toggle_fullscreen(),
                InputEvent::PointerDown => {
                    let scene = &mut self.scene;
                    if scene.mode == ViewMode::Normal
                        && scene.controls.start(self.input.pointer.as_vec2())
                    {
                        scene.director.begin_user_orbit();
                    }
                }
                InputEvent::PointerUp => {
                    if self.scene.controls.end() {
                        self.scene.director.end_user_orbit();
                    }
                }
            }
        }
    }

    /// Flip Normal ⇄ Hero if the trigger is allowed, applying the whole
    /// mode table at once.
    pub fn toggle_hero(&mut self, trigger: ToggleTrigger) {
        let scene = &mut self.scene;
        let Some(mode) = next_mode(scene.mode, trigger, &scene.model) else {
            log::debug!("[mode] toggle ignored ({:?}, model {:?})", trigger, scene.model);
            return;
        };
        scene.mode = mode;
        apply_preset(mode, &mut scene.lights, &mut scene.atmosphere, &mut scene.controls);
        if mode == ViewMode::Hero {
            scene.director.end_user_orbit();
        }
        scene.status = status_for(mode, trigger);
        log::info!("[mode] {:?} via {:?}", mode, trigger);
    }

    fn update_hover(&mut self) {
        let scene = &mut self.scene;
        if !scene.model.is_loaded() {
            return;
        }
        let hits = scene.pick(self.input.pointer.as_vec2());
        let Some(model_scene) = scene.model_scene.as_mut() else {
            return;
        };
        let Some(transition) = scene.hover.update(&hits, model_scene) else {
            return;
        };
        let normal = scene.mode == ViewMode::Normal;
        match transition {
            HoverTransition::Started => {
                scene.cursor = CursorStyle::Pointer;
                if normal {
                    scene.lights.rim.intensity = RIM_HIGHLIGHT;
                    scene.status = StatusMessage::HoverHint;
                }
            }
            HoverTransition::Ended => {
                scene.cursor = CursorStyle::Default;
                if normal {
                    scene.lights.rim.intensity = RIM_BASELINE;
                    scene.status = StatusMessage::HoverLeft;
                }
            }
        }
    }

    /// Push status/cursor to the host only when they changed this frame.
    fn flush_feedback(&mut self, host: &mut dyn HostSurface) {
        if self.shown_status != Some(self.scene.status) {
            host.set_status(self.scene.status);
            self.shown_status = Some(self.scene.status);
        }
        if self.shown_cursor != self.scene.cursor {
            host.set_cursor(self.scene.cursor);
            self.shown_cursor = self.scene.cursor;
        }
    }
}
