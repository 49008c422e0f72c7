// Host-side scenario tests driving the frame orchestrator with a recording
// host and a renderer that only packs instances.

use glam::Vec3;
use showcase_core::*;

#[derive(Default)]
struct RecordingHost {
    statuses: Vec<StatusMessage>,
    cursors: Vec<CursorStyle>,
    fullscreen_toggles: usize,
}

impl HostSurface for RecordingHost {
    fn set_status(&mut self, status: StatusMessage) {
        self.statuses.push(status);
    }
    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursors.push(cursor);
    }
    fn toggle_fullscreen(&mut self) {
        self.fullscreen_toggles += 1;
    }
}

#[derive(Default)]
struct PackingRenderer {
    frames: usize,
    builder: InstanceBuilder,
    instances: Vec<PointInstance>,
    fail: bool,
}

impl SceneRenderer for PackingRenderer {
    fn render(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        self.frames += 1;
        self.builder.build(frame, &mut self.instances);
        if self.fail {
            anyhow::bail!("surface lost");
        }
        Ok(())
    }
}

const FRAME_MS: f64 = 1000.0 / 60.0;

struct Harness {
    show: Showcase,
    host: RecordingHost,
    renderer: PackingRenderer,
    frame: u64,
}

impl Harness {
    fn new() -> Self {
        let config = ShowcaseConfig {
            snow_count: 40,
            mist_count: 10,
            sparkle_count: 10,
            placeholder_points: 32,
            // A small model keeps the viewport corners clear of it.
            model_target_size: 1.0,
            ..ShowcaseConfig::default()
        };
        let mut show = Showcase::new(config);
        show.resize(800, 600);
        Self {
            show,
            host: RecordingHost::default(),
            renderer: PackingRenderer::default(),
            frame: 0,
        }
    }

    fn with_dragon() -> Self {
        let mut h = Self::new();
        // The pointer starts at the viewport centre, right on the model.
        h.point_at_corner();
        h.show.on_model_loaded(Ok(dragon()));
        h.tick();
        h
    }

    fn tick(&mut self) {
        self.frame += 1;
        let t = TimeSample::new(self.frame as f64 * FRAME_MS, (FRAME_MS / 1000.0) as f32);
        self.show.advance(t, &mut self.host, &mut self.renderer);
    }

    fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    fn point_at_centre(&mut self) {
        self.show.input.on_pointer_move(400.0, 300.0, 800.0, 600.0);
    }

    fn point_at_corner(&mut self) {
        self.show.input.on_pointer_move(2.0, 2.0, 800.0, 600.0);
    }

    fn click(&mut self) {
        self.show.input.on_pointer_down();
        self.show.input.on_pointer_up();
        self.show.input.on_click();
    }

    fn last_status(&self) -> Option<StatusMessage> {
        self.host.statuses.last().copied()
    }
}

fn dragon() -> ModelScene {
    let bounds = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    ModelScene {
        meshes: vec![SceneMesh {
            name: "body".to_string(),
            bounds,
            material: Some(Emissive {
                color: Rgb::new(0.0, 0.0, 0.0),
                intensity: 1.0,
            }),
            base_color: Rgb::new(0.8, 0.9, 1.0),
            points: vec![Vec3::ZERO, Vec3::ONE, -Vec3::ONE],
        }],
        bounds,
        clips: vec![ClipInfo {
            name: "idle".to_string(),
            duration: 2.0,
        }],
        scale_factor: 1.0,
    }
}

#[test]
fn first_frame_announces_loading_once() {
    let mut h = Harness::new();
    h.ticks(3);
    assert_eq!(h.host.statuses, vec![StatusMessage::Loading]);
    assert_eq!(h.renderer.frames, 3);
    assert_eq!(h.show.frames(), 3);
}

#[test]
fn successful_load_reports_ready_and_enables_hotkey() {
    let mut h = Harness::with_dragon();
    assert_eq!(h.last_status(), Some(StatusMessage::Ready));
    assert!(h.show.scene().model.is_loaded());
    assert!(h.show.scene().mixer.is_some());

    h.show.input.on_key_down("h", false);
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Hero);
    assert_eq!(h.last_status(), Some(StatusMessage::HeroFromKey));

    h.show.input.on_key_down("H", false);
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Normal);
    assert_eq!(h.last_status(), Some(StatusMessage::NormalFromKey));
}

#[test]
fn hotkey_before_load_is_ignored() {
    let mut h = Harness::new();
    h.show.input.on_key_down("h", false);
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Normal);
    assert_eq!(h.host.statuses, vec![StatusMessage::Loading]);
}

#[test]
fn load_failure_falls_back_to_placeholder_for_good() {
    let mut h = Harness::new();
    h.show.on_model_loaded(Err(LoadError::Fetch("404 Not Found".into())));
    h.tick();
    assert!(h.show.scene().model.is_placeholder());
    assert_eq!(h.last_status(), Some(StatusMessage::LoadFailed));

    h.show.input.on_key_down("h", false);
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Normal);

    // A late success does not resurrect the model.
    h.show.on_model_loaded(Ok(dragon()));
    assert!(h.show.scene().model.is_placeholder());
}

#[test]
fn clicking_the_placeholder_still_toggles() {
    let mut h = Harness::new();
    h.show.on_model_loaded(Err(LoadError::NoMeshes));
    h.ticks(2);
    h.point_at_centre();
    h.click();
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Hero);
    assert_eq!(h.last_status(), Some(StatusMessage::HeroFromClick));
}

#[test]
fn click_on_empty_space_changes_nothing() {
    let mut h = Harness::with_dragon();
    h.point_at_corner();
    h.tick();
    let statuses = h.host.statuses.len();
    h.click();
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Normal);
    assert_eq!(h.host.statuses.len(), statuses);
}

#[test]
fn hover_enter_and_leave_drive_rim_cursor_and_status() {
    let mut h = Harness::with_dragon();
    h.point_at_centre();
    h.tick();
    let scene = h.show.scene();
    assert!(scene.hover.is_hovering());
    assert_eq!(scene.lights.rim.intensity, RIM_HIGHLIGHT);
    assert_eq!(h.last_status(), Some(StatusMessage::HoverHint));
    assert_eq!(h.host.cursors, vec![CursorStyle::Pointer]);
    let body = &scene.model_scene.as_ref().expect("model").meshes[0];
    assert_eq!(body.material, Some(Emissive::highlight()));

    h.point_at_corner();
    h.tick();
    let scene = h.show.scene();
    assert!(!scene.hover.is_hovering());
    assert_eq!(scene.lights.rim.intensity, RIM_BASELINE);
    assert_eq!(h.last_status(), Some(StatusMessage::HoverLeft));
    assert_eq!(h.host.cursors, vec![CursorStyle::Pointer, CursorStyle::Default]);
    let body = &scene.model_scene.as_ref().expect("model").meshes[0];
    assert_eq!(
        body.material,
        Some(Emissive {
            color: Rgb::new(0.0, 0.0, 0.0),
            intensity: 1.0
        })
    );
}

#[test]
fn hovering_in_hero_changes_cursor_only() {
    let mut h = Harness::with_dragon();
    h.point_at_corner();
    h.show.input.on_key_down("h", false);
    h.tick();
    assert_eq!(h.show.scene().mode, ViewMode::Hero);

    h.point_at_centre();
    h.tick();
    assert_eq!(h.show.scene().lights.rim.intensity, 2.2);
    assert_eq!(h.last_status(), Some(StatusMessage::HeroFromKey));
    assert_eq!(h.host.cursors.last(), Some(&CursorStyle::Pointer));
}

#[test]
fn click_on_model_enters_and_leaves_hero() {
    let mut h = Harness::with_dragon();
    h.point_at_centre();
    h.tick();
    h.click();
    h.tick();
    let scene = h.show.scene();
    assert_eq!(scene.mode, ViewMode::Hero);
    assert!(!scene.controls.enabled);
    assert_eq!(scene.atmosphere.background.to_hex(), 0x1a3050);
    assert_eq!(h.last_status(), Some(StatusMessage::HeroFromClick));

    h.click();
    h.tick();
    let scene = h.show.scene();
    assert_eq!(scene.mode, ViewMode::Normal);
    assert!(scene.controls.enabled);
    assert_eq!(h.last_status(), Some(StatusMessage::NormalFromClick));
}

#[test]
fn hero_camera_converges_and_fog_stays_pinned() {
    let mut h = Harness::with_dragon();
    h.show.input.on_scroll(2000.0, 3000.0, 1000.0);
    h.show.input.on_key_down("h", false);
    h.ticks(400);
    let scene = h.show.scene();
    assert!(scene.camera.eye.distance(HERO_EYE) < 1e-3);
    assert!(scene.camera.target.distance(HERO_LOOK_AT) < 1e-3);
    assert_eq!(scene.atmosphere.fog_density, 0.03);
    assert_eq!(scene.lights.glow1.intensity, 3.0);
}

#[test]
fn full_scroll_tightens_orbit_and_thins_fog() {
    let mut h = Harness::with_dragon();
    let eye = h.show.scene().camera.eye;
    let start_radius = Vec3::new(eye.x, 0.0, eye.z).length();
    h.show.input.on_scroll(2000.0, 3000.0, 1000.0);
    h.tick();
    // One frame only closes 2% of the gap to the tighter orbit.
    let eye = h.show.scene().camera.eye;
    let radius = Vec3::new(eye.x, 0.0, eye.z).length();
    assert!((radius - start_radius).abs() < 0.1, "radius {start_radius} -> {radius}");
    assert!(radius > CAMERA_BASE_RADIUS * (1.0 - SCROLL_RADIUS_SHRINK) + 1.0);
    h.ticks(1499);
    let scene = h.show.scene();
    let eye = scene.camera.eye;
    let horizontal = Vec3::new(eye.x, 0.0, eye.z).length();
    let goal_radius = CAMERA_BASE_RADIUS * (1.0 - SCROLL_RADIUS_SHRINK);
    // The smoothed follower trails the moving goal slightly inside the circle.
    assert!(
        horizontal <= goal_radius + 1e-3 && horizontal > goal_radius - 0.4,
        "radius {horizontal}"
    );
    let lift = CAMERA_BASE_HEIGHT + SCROLL_HEIGHT_LIFT;
    assert!(eye.y > lift - CAMERA_BOB_AMP - 0.1 && eye.y < lift + CAMERA_BOB_AMP + 0.1);
    assert!((scene.atmosphere.fog_density - 0.03).abs() < 1e-6);
}

#[test]
fn drag_hands_camera_to_user_and_back() {
    let mut h = Harness::with_dragon();
    h.point_at_corner();
    h.tick();
    h.show.input.on_pointer_down();
    h.tick();
    assert_eq!(h.show.scene().director.control(), CameraControl::User);
    assert!(h.show.scene().controls.is_dragging());

    let before = h.show.scene().camera.eye;
    h.show.input.on_pointer_move(300.0, 2.0, 800.0, 600.0);
    h.tick();
    let after = h.show.scene().camera.eye;
    assert!(before.distance(after) > 0.1, "drag should orbit the eye");

    h.show.input.on_pointer_up();
    h.tick();
    assert_eq!(h.show.scene().director.control(), CameraControl::Autonomous);
}

#[test]
fn pointer_down_in_hero_does_not_start_orbit() {
    let mut h = Harness::with_dragon();
    h.show.input.on_key_down("h", false);
    h.tick();
    h.show.input.on_pointer_down();
    h.tick();
    assert_eq!(h.show.scene().director.control(), CameraControl::Autonomous);
    assert!(!h.show.scene().controls.is_dragging());
}

#[test]
fn double_click_requests_fullscreen() {
    let mut h = Harness::new();
    h.show.input.on_double_click();
    h.tick();
    assert_eq!(h.host.fullscreen_toggles, 1);
}

#[test]
fn render_errors_are_logged_not_fatal() {
    let mut h = Harness::with_dragon();
    h.renderer.fail = true;
    h.ticks(5);
    assert_eq!(h.renderer.frames, 6);
}

#[test]
fn frame_packs_model_and_every_particle() {
    let mut h = Harness::with_dragon();
    h.tick();
    // 3 model points + 40 snow + 10 mist + 10 sparkles
    assert_eq!(h.renderer.instances.len(), 3 + 40 + 10 + 10);

    let mut h = Harness::new();
    h.tick();
    assert_eq!(h.renderer.instances.len(), 32 + 40 + 10 + 10);
}

#[test]
fn resize_only_touches_projection() {
    let mut h = Harness::with_dragon();
    h.ticks(10);
    let eye = h.show.scene().camera.eye;
    h.show.resize(1920, 1080);
    assert!((h.show.scene().camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(h.show.scene().camera.eye, eye);
}
