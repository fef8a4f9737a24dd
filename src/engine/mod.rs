//! Engine module containing graphics, input, physics and window management.

pub mod graphics;
pub mod input;
pub mod physics;
pub mod window;

// Re-export commonly used types
pub use graphics::{renderer::Renderer, texture::Texture, vertex::Vertex};
pub use input::{InputHandler, RunnerInput};
pub use physics::PhysicsWorld;
