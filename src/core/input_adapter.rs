use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::camera::{ButtonState, FreeLookCamera, PointerButton};
use crate::config::InputConfig;

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(code) => PointerButton::Other(code),
        }
    }
}

impl From<ElementState> for ButtonState {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => ButtonState::Pressed,
            ElementState::Released => ButtonState::Released,
        }
    }
}

/// Held arrow keys, read as a pair of analog axes
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl AxisState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (lateral, forward) deflection in [-1, 1]
    pub const fn axes(&self) -> (f32, f32) {
        (
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.forward, self.backward),
        )
    }
}

/// Adapter that feeds Winit events into a [`FreeLookCamera`]
#[derive(Debug, Clone)]
pub struct WinitInput {
    config: InputConfig,
    /// Last cursor position in physical pixels
    cursor: (i32, i32),
    /// Mouse buttons currently down; cursor motion only rotates while non-empty
    held_buttons: HashSet<MouseButton>,
    axes: AxisState,
}

impl WinitInput {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            cursor: (0, 0),
            held_buttons: HashSet::new(),
            axes: AxisState::default(),
        }
    }

    /// Process a Winit WindowEvent. Returns true if the camera consumed it.
    pub fn process_event(&mut self, camera: &mut FreeLookCamera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(camera, position.x as i32, position.y as i32)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(camera, *button, *state);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state.is_pressed();
                match &event.logical_key {
                    Key::Character(text) if pressed => match text.chars().next() {
                        Some(key) => self.character(camera, key),
                        None => false,
                    },
                    Key::Named(named) => self.arrow_key(*named, pressed),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Record the cursor, rotating the camera while a button is held
    pub fn cursor_moved(&mut self, camera: &mut FreeLookCamera, x: i32, y: i32) -> bool {
        self.cursor = (x, y);
        if self.is_dragging() {
            camera.pointer_move(x, y);
            true
        } else {
            false
        }
    }

    pub fn mouse_input(&mut self, camera: &mut FreeLookCamera, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held_buttons.insert(button);
            }
            ElementState::Released => {
                self.held_buttons.remove(&button);
            }
        }
        camera.pointer_press(button.into(), state.into(), self.cursor.0, self.cursor.1);
    }

    /// Forward a typed character; false if the camera has no binding for it
    pub fn character(&mut self, camera: &mut FreeLookCamera, key: char) -> bool {
        let (x, y) = self.cursor;
        camera.key_press(key, x, y, self.config.key_speed_scale)
    }

    /// Track arrow keys as analog axes. Other named keys are not consumed.
    pub fn arrow_key(&mut self, key: NamedKey, pressed: bool) -> bool {
        match key {
            NamedKey::ArrowUp => self.axes.forward = pressed,
            NamedKey::ArrowDown => self.axes.backward = pressed,
            NamedKey::ArrowLeft => self.axes.left = pressed,
            NamedKey::ArrowRight => self.axes.right = pressed,
            _ => return false,
        }
        true
    }

    /// Apply this frame's analog movement, including zero deflection
    pub fn update(&mut self, camera: &mut FreeLookCamera, delta_time: f32) {
        let (x, y) = self.axes.axes();
        let scale = self.config.analog_units_per_second * delta_time;
        camera.analog_move(x * scale, y * scale);
    }

    /// Forget held buttons and arrow keys whose release may never arrive
    pub fn clear_held(&mut self) {
        self.held_buttons.clear();
        self.axes = AxisState::default();
    }

    pub fn is_dragging(&self) -> bool {
        !self.held_buttons.is_empty()
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn axes(&self) -> AxisState {
        self.axes
    }
}

impl Default for WinitInput {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
