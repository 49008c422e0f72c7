pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod hover;
pub mod input;
pub mod instances;
pub mod lighting;
pub mod loader;
pub mod mode;
pub mod model;
pub mod particles;
pub mod pick;
pub mod showcase;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use clock::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use hover::*;
pub use input::*;
pub use instances::*;
pub use lighting::*;
pub use loader::*;
pub use mode::*;
pub use model::*;
pub use particles::*;
pub use pick::*;
pub use showcase::*;
pub use state::*;
