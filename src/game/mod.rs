//! Game-specific logic and features.

pub mod config;
pub mod lane;
pub mod obstacles;
pub mod player;
pub mod scene;
pub mod simulation;
pub mod state;
pub mod track;
pub mod world;

// Re-export commonly used types
pub use config::GameConfig;
pub use lane::Lane;
pub use simulation::{SimError, Simulation};
pub use world::{app::App, camera::Camera};
