pub mod obstacle;
pub mod spawner;

pub use obstacle::{Obstacle, ObstacleId, ObstacleKind};
pub use spawner::ObstacleSpawner;
