//! Builds the per-frame draw list from simulation state.
//!
//! Everything here is a copy. The renderer reads the snapshot and never
//! reaches back into the simulation.

use glam::Vec3;

use crate::game::simulation::Simulation;
use crate::game::world::camera::Camera;

const GROUND_SIZE: f32 = 100.0;
const GROUND_COLOR: u32 = 0x4a7026;
const TRACK_COLOR: u32 = 0x7a6c4e;
/// Track tiles sit slightly above the ground plane to avoid z-fighting.
const TRACK_LIFT: f32 = 0.01;
const SLAB_THICKNESS: f32 = 0.02;

/// Converts 0xRRGGBB sRGB into linear RGB.
pub fn linear_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Ground,
    TrackSegment(usize),
    Player,
    Obstacle(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstance {
    pub kind: EntityKind,
    /// Box centre.
    pub position: Vec3,
    /// Full box size.
    pub scale: Vec3,
    pub color: [f32; 3],
    /// Texture repeat count across the top face; `None` draws flat colour.
    pub texture_repeat: Option<[f32; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    /// Position of the directional light; it shines towards the origin.
    pub sun_position: Vec3,
    pub sun_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.3,
            sun_position: Vec3::new(10.0, 10.0, 10.0),
            sun_intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneSnapshot {
    pub camera: Camera,
    pub lighting: Lighting,
    pub instances: Vec<DrawInstance>,
}

pub fn compose(sim: &Simulation, camera: &Camera) -> SceneSnapshot {
    let mut instances = Vec::with_capacity(2 + sim.track().segments().len() + sim.spawner().obstacles().len());

    instances.push(DrawInstance {
        kind: EntityKind::Ground,
        position: Vec3::new(0.0, -SLAB_THICKNESS / 2.0, 0.0),
        scale: Vec3::new(GROUND_SIZE, SLAB_THICKNESS, GROUND_SIZE),
        color: linear_rgb(GROUND_COLOR),
        texture_repeat: None,
    });

    let track = sim.track().config();
    for segment in sim.track().segments() {
        instances.push(DrawInstance {
            kind: EntityKind::TrackSegment(segment.index),
            position: Vec3::new(0.0, TRACK_LIFT, segment.z),
            scale: Vec3::new(track.segment_width, SLAB_THICKNESS, track.segment_length),
            color: linear_rgb(TRACK_COLOR),
            texture_repeat: Some([5.0, 20.0]),
        });
    }

    let player = sim.player();
    instances.push(DrawInstance {
        kind: EntityKind::Player,
        position: player.position(),
        scale: player.size(),
        color: linear_rgb(player.color()),
        texture_repeat: None,
    });

    instances.extend(sim.spawner().obstacles().iter().map(|obstacle| DrawInstance {
        kind: EntityKind::Obstacle(obstacle.id.0),
        position: obstacle.position,
        scale: obstacle.scale,
        color: linear_rgb(obstacle.color),
        texture_repeat: None,
    }));

    SceneSnapshot {
        camera: *camera,
        lighting: Lighting::default(),
        instances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GameConfig;

    #[test]
    fn snapshot_contains_every_entity() {
        let mut sim = Simulation::new(GameConfig::default().with_seed(11));
        for _ in 0..30 {
            sim.tick(0.2).unwrap();
        }
        let scene = compose(&sim, &Camera::new());

        let obstacles = scene
            .instances
            .iter()
            .filter(|i| matches!(i.kind, EntityKind::Obstacle(_)))
            .count();
        assert!(obstacles > 0);
        assert_eq!(obstacles, sim.spawner().obstacles().len());
        assert_eq!(scene.instances.len(), 1 + 5 + 1 + obstacles);

        let player = scene.instances.iter().find(|i| i.kind == EntityKind::Player).unwrap();
        assert_eq!(player.position, sim.player().position());
    }

    #[test]
    fn srgb_conversion_endpoints() {
        assert_eq!(linear_rgb(0x000000), [0.0, 0.0, 0.0]);
        assert!(linear_rgb(0xffffff).iter().all(|c| (c - 1.0).abs() < 1e-5));
        let [r, g, b] = linear_rgb(0x808080);
        assert!(r > 0.2 && r < 0.23 && r == g && g == b);
    }
}
