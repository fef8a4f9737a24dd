use std::sync::Arc;

use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::engine::graphics::{renderer::Renderer, texture::Texture};
use crate::engine::input::{HostCommand, InputHandler};
use crate::engine::window::{HostEvent, WindowManager};
use crate::game::config::GameConfig;
use crate::game::scene;
use crate::game::simulation::Simulation;
use crate::game::state::GameState;
use crate::game::world::camera::Camera;

const TRACK_TEXTURE_PATH: &str = "assets/track.png";

pub struct App {
    window_manager: WindowManager,
    renderer: Option<Renderer>,
    camera: Camera,
    simulation: Simulation,
    input_handler: InputHandler,
    state: GameState,
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        let window = match self.window_manager.create_window(event_loop) {
            Ok(window) => window,
            Err(_) => {
                error!("Failed to create window, exiting");
                event_loop.exit();
                return;
            }
        };
        match pollster::block_on(Self::init_wgpu(window)) {
            Ok(renderer) => {
                info!("Renderer ready ({}x{})", renderer.config.width, renderer.config.height);
                self.renderer = Some(renderer);
                self.window_manager.request_redraw();
            }
            Err(e) => {
                error!("Failed to initialise wgpu: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match WindowManager::translate_window_event(event) {
            Some(HostEvent::Close) => {
                event_loop.exit();
            }
            Some(HostEvent::Redraw) => {
                if let Err(e) = self.redraw() {
                    error!("Render error: {:?}, exiting", e);
                    event_loop.exit();
                }
            }
            Some(HostEvent::Resized(physical_size)) => {
                self.resize(physical_size);
            }
            Some(HostEvent::Key(key)) => {
                let command = self
                    .input_handler
                    .handle_keyboard_input_event(key.keycode, key.pressed, key.repeat);
                if let Some(command) = command {
                    self.handle_host_command(command, event_loop);
                }
            }
            None => (),
        }
    }
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let simulation = Simulation::new(config);
        let input_handler = InputHandler::new(simulation.input_sender());
        Self {
            window_manager: WindowManager::new(),
            renderer: None,
            camera: Camera::new(),
            simulation,
            input_handler,
            state: GameState::new(),
        }
    }

    async fn init_wgpu(window: Arc<Window>) -> Result<Renderer, Box<dyn std::error::Error>> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window))?;
        let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }).await.ok_or("No suitable GPU adapter found")?;

        let (device, queue) = adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ).await?;

        let texture = Texture::load(&device, &queue, TRACK_TEXTURE_PATH)
            .unwrap_or_else(|e| {
                warn!("Failed to load track texture: {:?}, using default", e);
                Texture::create_default(&device, &queue)
            });

        Ok(Renderer::new(device, queue, surface, &adapter, size, texture))
    }

    /// One frame: advance the simulation, then draw what it produced.
    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        let dt = self.state.frame_delta();
        if let Err(e) = self.simulation.tick(dt) {
            warn!("Skipping simulation step: {}", e);
        }

        if let Some(renderer) = &mut self.renderer {
            let snapshot = scene::compose(&self.simulation, &self.camera);
            match renderer.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
                Err(wgpu::SurfaceError::Timeout) => warn!("Surface timeout, dropping frame"),
                Err(e) => return Err(e),
            }
        }

        self.state.update_frame_count();
        if let Some(fps) = self.state.update_fps_display() {
            info!(
                "FPS: {} | obstacles live: {} | collisions: {}",
                fps,
                self.simulation.spawner().obstacles().len(),
                self.simulation.player().collisions()
            );
        }

        self.window_manager.request_redraw();
        Ok(())
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            if let Some(renderer) = &mut self.renderer {
                renderer.resize(new_size);
            }
        }
    }

    fn handle_host_command(&mut self, command: HostCommand, event_loop: &ActiveEventLoop) {
        match command {
            HostCommand::ToggleFps => self.state.toggle_fps_display(),
            HostCommand::ToggleFullscreen => {
                self.input_handler
                    .handle_fullscreen_toggle(&mut self.state.fullscreen, self.window_manager.get_window());
            }
            HostCommand::Exit => event_loop.exit(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}
