//! Application entry point.

use lane_runner::{App, GameConfig};
use log::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Logger initialized");

    let config = GameConfig::from_env();
    if let Some(seed) = config.seed {
        info!("Obstacle seed: {}", seed);
    }

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        e
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(Box::new(e));
    }

    info!(
        "Session over after {:.1}s: {} obstacles, {} collisions",
        app.simulation().elapsed(),
        app.simulation().spawner().spawned_count(),
        app.simulation().player().collisions()
    );
    Ok(())
}
