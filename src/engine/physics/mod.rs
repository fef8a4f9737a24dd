//! Collision-only physics world.

pub mod world;

pub use world::{BodyDesc, BodyHandle, BodyKind, Contact, PhysicsWorld};
