pub mod collision;
pub mod player;

pub use collision::{CollisionHandler, LogCollisionHandler};
pub use player::PlayerController;
