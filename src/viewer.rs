// viewer.rs - Interactive window that drives the camera from live input
use anyhow::{Context, Result};
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::FreeLookCamera;
use crate::config::Settings;
use crate::core::{FrameClock, WinitInput};

const STATUS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

pub const START_EYE: Vec3 = Vec3::new(0.0, 2.0, 10.0);
pub const START_DIR: Vec3 = Vec3::new(0.0, -0.2, -1.0);

struct Viewer {
    window: Option<Window>,
    camera: FreeLookCamera,
    input: WinitInput,
    clock: FrameClock,
    frame_count: u32,
    status_timer: f32,
}

impl Viewer {
    fn new(settings: &Settings) -> Self {
        Self {
            window: None,
            camera: FreeLookCamera::with_config(START_EYE, START_DIR, &settings.camera),
            input: WinitInput::new(settings.input),
            clock: FrameClock::new(),
            frame_count: 0,
            status_timer: 0.0,
        }
    }

    fn update_status(&mut self, delta: f32) {
        self.frame_count += 1;
        self.status_timer += delta;

        if self.status_timer < STATUS_UPDATE_INTERVAL {
            return;
        }

        let fps = self.frame_count as f32 / self.status_timer;
        let transform = self.camera.transform();
        let status = format!(
            "eye {:.2}  dir {:.2}",
            self.camera.eye(),
            self.camera.direction()
        );
        log::info!("{} orientation {:.3} ({:.0} fps)", status, transform.orientation, fps);

        if let Some(window) = &self.window {
            window.set_title(&format!("freelook - {}", status));
        }

        self.frame_count = 0;
        self.status_timer = 0.0;
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(
            Window::default_attributes()
                .with_title("freelook")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(window) => {
                self.clock.reset();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::Focused(false) => self.input.clear_held(),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.input.update(&mut self.camera, delta);
                self.update_status(delta);
            }
            other => {
                if self.input.process_event(&mut self.camera, &other) {
                    log::trace!("Input consumed: {:?}", other);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the viewer window and run until it is closed
pub fn run(settings: &Settings) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut viewer = Viewer::new(settings);

    event_loop
        .run_app(&mut viewer)
        .context("Event loop exited with an error")?;

    log::info!(
        "Viewer closed at eye {} dir {}",
        viewer.camera.eye(),
        viewer.camera.direction()
    );
    Ok(())
}
