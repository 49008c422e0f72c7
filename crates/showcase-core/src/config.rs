use crate::constants::*;

/// Startup parameters. Front-ends start from `Default` and override what
/// their host provides (model path from argv, viewport size, ...).
#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    pub seed: u64,
    pub snow_count: usize,
    pub mist_count: usize,
    pub sparkle_count: usize,
    pub camera_base_radius: f32,
    pub camera_base_height: f32,
    pub model_target_size: f32,
    pub max_delta_seconds: f32,
    pub model_path: String,
    pub placeholder_points: usize,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            snow_count: SNOW_COUNT,
            mist_count: MIST_COUNT,
            sparkle_count: SPARKLE_COUNT,
            camera_base_radius: CAMERA_BASE_RADIUS,
            camera_base_height: CAMERA_BASE_HEIGHT,
            model_target_size: MODEL_TARGET_SIZE,
            max_delta_seconds: MAX_DELTA_SECONDS,
            model_path: "/model/icy_dragon.glb".to_string(),
            placeholder_points: 900,
        }
    }
}

impl ShowcaseConfig {
    pub fn with_model_path(mut self, path: impl Into<String>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
