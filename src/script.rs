// script.rs - Headless replay of recorded camera input
use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

use crate::camera::{ButtonState, FreeLookCamera, PointerButton};
use crate::config::CameraConfig;

fn default_speed_scale() -> f32 {
    1.0
}

/// One input callback, as the windowing layer would have delivered it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    PointerPress {
        button: PointerButton,
        state: ButtonState,
        x: i32,
        y: i32,
    },
    PointerMove {
        x: i32,
        y: i32,
    },
    Key {
        key: char,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default = "default_speed_scale")]
        speed_scale: f32,
    },
    Analog {
        x: f32,
        y: f32,
    },
    SetPose {
        eye: [f32; 3],
        dir: [f32; 3],
    },
    SetSpeed {
        speed: f32,
    },
}

/// Initial pose plus a sequence of events
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputScript {
    pub eye: [f32; 3],
    pub dir: [f32; 3],
    /// Overrides the configured starting speed
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Outcome of a replay
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub camera: FreeLookCamera,
    pub handled_keys: usize,
    pub unhandled_keys: usize,
}

impl InputEvent {
    /// Apply to the camera. Returns the key result for key events.
    pub fn apply(&self, camera: &mut FreeLookCamera) -> Option<bool> {
        match *self {
            InputEvent::PointerPress { button, state, x, y } => {
                camera.pointer_press(button, state, x, y);
                None
            }
            InputEvent::PointerMove { x, y } => {
                camera.pointer_move(x, y);
                None
            }
            InputEvent::Key {
                key,
                x,
                y,
                speed_scale,
            } => Some(camera.key_press(key, x, y, speed_scale)),
            InputEvent::Analog { x, y } => {
                camera.analog_move(x, y);
                None
            }
            InputEvent::SetPose { eye, dir } => {
                camera.set_pose(Vec3::from_array(eye), Vec3::from_array(dir));
                None
            }
            InputEvent::SetSpeed { speed } => {
                camera.set_speed(speed);
                None
            }
        }
    }
}

impl InputScript {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid input script JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {:?}", path))?;
        let script = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse input script: {:?}", path))?;
        log::info!("Loaded input script {:?} with {} events", path, script.events.len());
        Ok(script)
    }

    /// Replay every event onto a fresh camera
    pub fn run(&self, config: &CameraConfig) -> ReplayReport {
        let mut camera =
            FreeLookCamera::with_config(Vec3::from_array(self.eye), Vec3::from_array(self.dir), config);
        if let Some(speed) = self.speed {
            camera.set_speed(speed);
        }

        let mut handled_keys = 0;
        let mut unhandled_keys = 0;
        for (index, event) in self.events.iter().enumerate() {
            match event.apply(&mut camera) {
                Some(true) => handled_keys += 1,
                Some(false) => {
                    log::debug!("Event {}: key not bound: {:?}", index, event);
                    unhandled_keys += 1;
                }
                None => {}
            }
            log::trace!(
                "Event {}: eye {} dir {}",
                index,
                camera.eye(),
                camera.direction()
            );
        }

        ReplayReport {
            camera,
            handled_keys,
            unhandled_keys,
        }
    }
}
