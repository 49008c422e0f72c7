use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Clock
pub const MAX_DELTA_SECONDS: f32 = 0.1; // clamp after tab-suspend / window drag stalls

// Snow field
pub const SNOW_COUNT: usize = 3000;
pub const SNOW_EXTENT: f32 = 50.0; // x/z wrap limit
pub const SNOW_RESPAWN_FLOOR: f32 = -10.0;
pub const SNOW_RESPAWN_HEIGHT: f32 = 40.0;
pub const SNOW_WIND: f32 = 0.001;
pub const SNOW_SCROLL_SPEEDUP: f32 = 0.8; // speed factor at full scroll = 1 + this
pub const SNOW_DRIFT_MAX: f32 = 0.01; // |vx|, |vz| upper bound
pub const SNOW_FALL_MIN: f32 = 0.02;
pub const SNOW_FALL_SPAN: f32 = 0.05;

// Mist field
pub const MIST_COUNT: usize = 800;
pub const MIST_EXTENT: f32 = 30.0;
pub const MIST_Y_MIN: f32 = -5.0;
pub const MIST_Y_SPAN: f32 = 30.0;
pub const MIST_DRIFT_MAX: f32 = 0.005;

// Sparkle field
pub const SPARKLE_COUNT: usize = 500;
pub const SPARKLE_EXTENT: f32 = 20.0;
pub const SPARKLE_Y_MIN: f32 = -2.0;
pub const SPARKLE_Y_SPAN: f32 = 20.0;
pub const SPARKLE_OPACITY_BASE: f32 = 0.4;
pub const SPARKLE_OPACITY_AMP: f32 = 0.3;
pub const SPARKLE_OPACITY_FREQ: f64 = 0.002;
pub const SPARKLE_OPACITY_SCROLL: f32 = 0.2;

// Camera projection
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_EYE: Vec3 = Vec3::new(0.0, 2.0, 8.0);

// Camera choreography
pub const CAMERA_BASE_RADIUS: f32 = 8.0;
pub const CAMERA_BASE_HEIGHT: f32 = 2.0;
pub const ORBIT_SPEED_PER_MS: f32 = 0.0003;
pub const SCROLL_RADIUS_SHRINK: f32 = 0.35;
pub const SCROLL_HEIGHT_LIFT: f32 = 1.2;
pub const CAMERA_BOB_FREQ: f64 = 0.0002;
pub const CAMERA_BOB_AMP: f32 = 0.5;
pub const LOOK_AT_BOB_FREQ: f64 = 0.0003;
pub const LOOK_AT_BOB_AMP: f32 = 0.3;
pub const ORBIT_SMOOTHING: f32 = 0.02; // gliding feel
pub const HERO_SMOOTHING: f32 = 0.08;
pub const USER_TARGET_LERP: f32 = 0.1;
pub const HERO_EYE: Vec3 = Vec3::new(0.0, 1.2, 4.5);
pub const HERO_LOOK_AT: Vec3 = Vec3::new(0.0, 0.5, 0.0);

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 2.5; // radians per full-viewport drag
pub const ORBIT_PITCH_LIMIT: f32 = 1.45; // keeps the eye away from the poles
pub const CLICK_DRAG_TOLERANCE: f32 = 0.02; // NDC travel that still counts as a click

// Fog
pub const FOG_DENSITY_TOP: f32 = 0.08; // scroll = 0
pub const FOG_DENSITY_BOTTOM: f32 = 0.03; // scroll = 1

// Glow lights
pub const GLOW1_AMP: f32 = 0.5;
pub const GLOW1_FREQ: f64 = 0.001;
pub const GLOW1_SCROLL_BOOST: f32 = 0.8;
pub const GLOW2_AMP: f32 = 0.4;
pub const GLOW2_FREQ: f64 = 0.0012;
pub const GLOW2_SCROLL_BOOST: f32 = 0.6;
pub const GLOW1_DRIFT_FREQ: f64 = 0.0005;
pub const GLOW1_DRIFT_AMP: f32 = 2.0;
pub const GLOW2_DRIFT_FREQ: f64 = 0.0006;
pub const GLOW2_DRIFT_AMP: f32 = 1.5;

// Hover feedback
pub const RIM_HIGHLIGHT: f32 = 1.8;
pub const RIM_BASELINE: f32 = 1.2;
pub const HIGHLIGHT_EMISSIVE_RGB: u32 = 0x4488cc;
pub const HIGHLIGHT_EMISSIVE_INTENSITY: f32 = 0.6;

// Model
pub const MODEL_TARGET_SIZE: f32 = 12.0;
pub const CLICK_PROXY_SCALE: f32 = 1.2; // invisible pick box around the model
pub const MAX_MODEL_POINTS: usize = 24_000;
pub const BREATH_FREQ: f64 = 0.001;
pub const BREATH_AMP: f32 = 0.02;
pub const SWAY_YAW_FREQ: f64 = 0.0008;
pub const SWAY_YAW_AMP: f32 = 0.08;
pub const SWAY_PITCH_FREQ: f64 = 0.0005;
pub const SWAY_PITCH_AMP: f32 = 0.03;
pub const PLACEHOLDER_SPIN_PER_TICK: f32 = 0.002;
pub const PLACEHOLDER_RADIUS: f32 = 1.0;
pub const PLACEHOLDER_CENTER: Vec3 = Vec3::new(0.0, 0.5, 0.0);

// Input
pub const INBOX_CAPACITY: usize = 32;
