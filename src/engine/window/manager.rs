//! Window management implementation.

use std::sync::Arc;

use log::error;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

const WINDOW_TITLE: &str = "Lane Runner";

/// A key transition as the game cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: winit::keyboard::KeyCode,
    pub pressed: bool,
    pub repeat: bool,
}

/// Window events after filtering, for the app to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Close,
    Redraw,
    Resized(winit::dpi::PhysicalSize<u32>),
    Key(KeyEvent),
}

#[derive(Default)]
pub struct WindowManager {
    pub window: Option<Arc<Window>>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, Box<dyn std::error::Error>> {
        let attributes = Window::default_attributes().with_title(WINDOW_TITLE);
        let window = event_loop.create_window(attributes)
            .map_err(|e| {
                error!("Failed to create window: {:?}", e);
                e
            })?;

        let window = Arc::new(window);
        self.window = Some(Arc::clone(&window));
        Ok(window)
    }

    /// Reduces a raw window event to the handful the game reacts to.
    pub fn translate_window_event(event: WindowEvent) -> Option<HostEvent> {
        match event {
            WindowEvent::CloseRequested => Some(HostEvent::Close),
            WindowEvent::RedrawRequested => Some(HostEvent::Redraw),
            WindowEvent::Resized(physical_size) => Some(HostEvent::Resized(physical_size)),
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(keycode) = event.physical_key {
                    Some(HostEvent::Key(KeyEvent {
                        keycode,
                        pressed: event.state == winit::event::ElementState::Pressed,
                        repeat: event.repeat,
                    }))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn get_window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}
