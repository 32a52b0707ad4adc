use glam::{Mat3, Quat, Vec3};
use serde::Deserialize;

use crate::config::CameraConfig;
use crate::transform::RigidTransform;

/// World up axis used for strafing, yaw, and the orientation basis
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pointer button reported with a press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Free-look camera driven by pointer drags, WASD keys and analog axes.
///
/// `direction` stays unit length across every handler, except after
/// [`FreeLookCamera::set_pose`] with a non-unit vector, which is stored as given.
///
/// Whenever `direction` is (nearly) parallel to [`WORLD_UP`] the lateral axis
/// is undefined. One policy covers every place that needs it:
/// - strafing (`A`/`D`, analog x) moves by zero,
/// - pointer pitch is skipped,
/// - [`FreeLookCamera::transform`] falls back to identity orientation.
///
/// "Nearly" means the raw `direction x WORLD_UP` is shorter than
/// [`CameraConfig::pole_epsilon`].
#[derive(Debug, Clone, PartialEq)]
pub struct FreeLookCamera {
    position: Vec3,
    direction: Vec3,
    last_pointer: (i32, i32),
    speed: f32,
    radians_per_pixel: f32,
    pole_epsilon: f32,
}

impl FreeLookCamera {
    /// Camera at `eye` looking along `dir` with default tuning.
    ///
    /// `dir` must be non-zero.
    pub fn new(eye: Vec3, dir: Vec3) -> Self {
        Self::with_config(eye, dir, &CameraConfig::default())
    }

    pub fn with_config(eye: Vec3, dir: Vec3, config: &CameraConfig) -> Self {
        if dir == Vec3::ZERO {
            log::warn!("Camera created with a zero look direction; orientation is undefined");
        }

        let camera = Self {
            position: eye,
            direction: dir.normalize(),
            last_pointer: (0, 0),
            speed: config.speed,
            radians_per_pixel: config.radians_per_pixel(),
            pole_epsilon: config.pole_epsilon,
        };
        log::debug!(
            "Camera created at {} looking {} (speed {})",
            camera.position,
            camera.direction,
            camera.speed
        );
        camera
    }

    /// Unit strafe axis, `None` near the poles
    fn lateral_axis(&self) -> Option<Vec3> {
        let lateral = self.direction.cross(WORLD_UP);
        let length = lateral.length();
        // An exact pole is undefined whatever the configured epsilon
        if length == 0.0 || length < self.pole_epsilon {
            None
        } else {
            Some(lateral / length)
        }
    }

    fn lateral_axis_or_zero(&self) -> Vec3 {
        self.lateral_axis().unwrap_or_else(|| {
            log::trace!("Looking along world up, lateral movement suppressed");
            Vec3::ZERO
        })
    }

    /// Record the drag anchor. Button and state are currently ignored.
    pub fn pointer_press(&mut self, button: PointerButton, state: ButtonState, x: i32, y: i32) {
        log::trace!("Pointer {:?} {:?} at ({}, {})", button, state, x, y);
        self.last_pointer = (x, y);
    }

    /// Rotate by the drag delta since the last recorded pointer position.
    ///
    /// Yaw about world up comes first, then pitch about the lateral axis taken
    /// before either rotation. Pitch is not clamped.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        let (last_x, last_y) = self.last_pointer;
        let dx = last_x as f32 - x as f32;
        let dy = last_y as f32 - y as f32;

        let lateral = self.lateral_axis();

        let yaw = Quat::from_axis_angle(WORLD_UP, dx * self.radians_per_pixel);
        let mut direction = yaw * self.direction;

        match lateral {
            Some(axis) => {
                let pitch = Quat::from_axis_angle(axis, dy * self.radians_per_pixel);
                direction = pitch * direction;
            }
            None => log::trace!("Looking along world up, pitch skipped"),
        }

        self.direction = direction.normalize();
        self.last_pointer = (x, y);
    }

    /// Translate for a WASD key (case-insensitive).
    ///
    /// Returns `false` and leaves the state untouched for any other key so the
    /// caller can fall through to its own bindings.
    pub fn key_press(&mut self, key: char, _x: i32, _y: i32, speed_scale: f32) -> bool {
        let step = self.speed * speed_scale;

        let offset = match key.to_ascii_uppercase() {
            'W' => self.direction * step,
            'S' => -self.direction * step,
            'D' => self.lateral_axis_or_zero() * step,
            'A' => -self.lateral_axis_or_zero() * step,
            _ => return false,
        };

        self.position += offset;
        true
    }

    /// Per-frame analog translation: `y` along the look direction, `x` along
    /// the lateral axis. Unscaled and applied even when both are zero.
    pub fn analog_move(&mut self, x: f32, y: f32) {
        let lateral = self.lateral_axis_or_zero();
        self.position += self.direction * y;
        self.position += lateral * x;
    }

    /// Current placement for the renderer
    pub fn transform(&self) -> RigidTransform {
        let Some(right) = self.lateral_axis() else {
            return RigidTransform::from_position(self.position);
        };

        let up = right.cross(self.direction);
        let basis = Mat3::from_cols(right, up, -self.direction);
        RigidTransform::new(self.position, Quat::from_mat3(&basis))
    }

    pub fn eye(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Pointer position the next drag delta is measured from
    pub fn last_pointer(&self) -> (i32, i32) {
        self.last_pointer
    }

    /// Overwrite position and direction.
    ///
    /// Unlike construction `dir` is stored as given and must already be unit length.
    pub fn set_pose(&mut self, eye: Vec3, dir: Vec3) {
        if !dir.is_normalized() {
            log::warn!("set_pose called with non-unit direction {} (length {})", dir, dir.length());
        }
        self.position = eye;
        self.direction = dir;
        log::debug!("Camera pose set to {} looking {}", eye, dir);
    }

    /// No validation; zero or negative speeds are accepted
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
