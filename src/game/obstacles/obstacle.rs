use glam::Vec3;

use crate::engine::physics::BodyHandle;
use crate::game::lane::Lane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Box,
    Wall,
    Barrier,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Box, ObstacleKind::Wall, ObstacleKind::Barrier];

    pub fn extents(self) -> Vec3 {
        match self {
            ObstacleKind::Box => Vec3::new(1.0, 1.0, 1.0),
            ObstacleKind::Wall => Vec3::new(3.0, 2.0, 0.5),
            ObstacleKind::Barrier => Vec3::new(1.5, 0.5, 0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u64);

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub lane: Lane,
    pub position: Vec3,
    pub scale: Vec3,
    /// 0xRRGGBB, sRGB.
    pub color: u32,
    pub(crate) body: BodyHandle,
}

impl Obstacle {
    pub fn body(&self) -> BodyHandle {
        self.body
    }
}
