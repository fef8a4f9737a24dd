//! Three-lane endless runner: simulation core plus a winit/wgpu host.

pub mod engine;
pub mod game;

// Re-export main types for convenience
pub use game::{App, GameConfig, SimError, Simulation};
