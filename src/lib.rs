pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod script;
pub mod traits;
pub mod transform;
pub mod types;
pub mod viewer;

pub use camera::{ButtonState, FreeLookCamera, PointerButton, WORLD_UP};
pub use config::{CameraConfig, InputConfig, Settings};
pub use transform::RigidTransform;
