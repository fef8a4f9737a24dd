//! Timed obstacle generation, movement and retirement.

use glam::Vec3;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::physics::{BodyDesc, BodyKind, PhysicsWorld};
use crate::game::config::SpawnerConfig;
use crate::game::lane::Lane;
use crate::game::obstacles::obstacle::{Obstacle, ObstacleId, ObstacleKind};

pub struct ObstacleSpawner {
    config: SpawnerConfig,
    rng: StdRng,
    spawn_timer: f32,
    next_id: u64,
    live: Vec<Obstacle>,
}

impl ObstacleSpawner {
    pub fn new(config: SpawnerConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            spawn_timer: 0.0,
            next_id: 1,
            live: Vec::new(),
        }
    }

    /// Advances the spawn timer and every live obstacle by `dt` seconds.
    pub fn tick(&mut self, dt: f32, physics: &mut PhysicsWorld) {
        self.spawn_timer += dt;
        if self.spawn_timer > self.config.spawn_interval {
            self.spawn(physics);
            // Reset, not decrement.
            self.spawn_timer = 0.0;
        }
        self.advance(dt, physics);
    }

    /// Creates one obstacle at the far end of the track in a random lane.
    pub fn spawn(&mut self, physics: &mut PhysicsWorld) -> ObstacleId {
        let lane = Lane::ALL[self.rng.gen_range(0..Lane::ALL.len())];
        let kind = ObstacleKind::ALL[self.rng.gen_range(0..ObstacleKind::ALL.len())];
        let color = self.config.palette[self.rng.gen_range(0..self.config.palette.len())];

        let scale = kind.extents();
        let position = Vec3::new(
            lane.x_offset(self.config.lane_width),
            scale.y / 2.0,
            self.config.spawn_z,
        );

        let id = ObstacleId(self.next_id);
        self.next_id += 1;

        let body = physics.add_body(BodyDesc {
            kind: BodyKind::Static,
            position,
            size: scale,
        });

        debug!("Spawned obstacle {:?}: {:?} in {:?} lane", id, kind, lane);
        self.live.push(Obstacle {
            id,
            kind,
            lane,
            position,
            scale,
            color,
            body,
        });
        id
    }

    fn advance(&mut self, dt: f32, physics: &mut PhysicsWorld) {
        let step = self.config.speed * dt;
        let retire_z = self.config.retire_z;

        for obstacle in &mut self.live {
            obstacle.position.z += step;
            physics.set_position(obstacle.body, obstacle.position);
        }

        self.live.retain(|obstacle| {
            if obstacle.position.z < retire_z {
                return true;
            }
            debug!("Retired obstacle {:?}", obstacle.id);
            physics.remove_body(obstacle.body);
            false
        });
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.live
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.live.iter().find(|obstacle| obstacle.id == id)
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Number of obstacles created this session.
    pub fn spawned_count(&self) -> u64 {
        self.next_id - 1
    }

    pub fn next_id(&self) -> ObstacleId {
        ObstacleId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner() -> ObstacleSpawner {
        ObstacleSpawner::new(SpawnerConfig::default(), Some(7))
    }

    #[test]
    fn spawn_places_obstacle_down_track() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();
        let id = spawner.spawn(&mut physics);
        let obstacle = spawner.get(id).unwrap();

        assert_eq!(obstacle.position.z, -50.0);
        assert_eq!(obstacle.position.x, obstacle.lane.index() as f32 * 3.0);
        assert_eq!(obstacle.position.y, obstacle.scale.y / 2.0);
        assert_eq!(obstacle.scale, obstacle.kind.extents());
        assert!(SpawnerConfig::default().palette.contains(&obstacle.color));
        assert_eq!(physics.position(obstacle.body()), Some(obstacle.position));
    }

    #[test]
    fn ids_strictly_increase() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();
        let mut seen = Vec::new();
        for _ in 0..200 {
            spawner.tick(0.75, &mut physics);
            for obstacle in spawner.obstacles() {
                if !seen.contains(&obstacle.id) {
                    seen.push(obstacle.id);
                }
            }
        }
        assert!(seen.len() > 10);
        assert_eq!(seen[0], ObstacleId(1));
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(spawner.next_id(), ObstacleId(spawner.spawned_count() + 1));
    }

    #[test]
    fn every_lane_kind_and_color_gets_used() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();
        let mut lanes = std::collections::HashSet::new();
        let mut kinds = std::collections::HashSet::new();
        let mut colors = std::collections::HashSet::new();
        for _ in 0..300 {
            let id = spawner.spawn(&mut physics);
            let obstacle = spawner.get(id).unwrap();
            lanes.insert(obstacle.lane);
            kinds.insert(obstacle.kind);
            colors.insert(obstacle.color);
        }
        assert_eq!(lanes.len(), 3);
        assert_eq!(kinds.len(), 3);
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn retired_exactly_at_threshold() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();
        let id = spawner.spawn(&mut physics);
        let body = spawner.get(id).unwrap().body();

        // 13 * 0.5s * 10 = 65 units: z = 15, still live.
        for _ in 0..13 {
            spawner.advance(0.5, &mut physics);
        }
        assert_eq!(spawner.get(id).unwrap().position.z, 15.0);

        // 7.0s total: z = 20, removed on this tick.
        spawner.advance(0.5, &mut physics);
        assert!(spawner.get(id).is_none());
        assert_eq!(physics.position(body), None);
    }

    #[test]
    fn timer_resets_instead_of_subtracting() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();

        spawner.tick(1.5, &mut physics);
        assert_eq!(spawner.spawned_count(), 0);
        spawner.tick(1.5, &mut physics);
        assert_eq!(spawner.spawned_count(), 1);
        assert_eq!(spawner.spawn_timer(), 0.0);

        // Exactly at the interval does not spawn; the comparison is strict.
        spawner.tick(2.0, &mut physics);
        assert_eq!(spawner.spawned_count(), 1);
    }

    #[test]
    fn physics_bodies_follow_obstacles() {
        let mut physics = PhysicsWorld::new();
        let mut spawner = spawner();
        for _ in 0..50 {
            spawner.tick(0.3, &mut physics);
            for obstacle in spawner.obstacles() {
                assert_eq!(physics.position(obstacle.body()), Some(obstacle.position));
            }
            assert_eq!(physics.body_count(), spawner.obstacles().len());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut physics_a = PhysicsWorld::new();
        let mut physics_b = PhysicsWorld::new();
        let mut a = ObstacleSpawner::new(SpawnerConfig::default(), Some(99));
        let mut b = ObstacleSpawner::new(SpawnerConfig::default(), Some(99));
        for _ in 0..10 {
            let ia = a.spawn(&mut physics_a);
            let ib = b.spawn(&mut physics_b);
            let (oa, ob) = (a.get(ia).unwrap(), b.get(ib).unwrap());
            assert_eq!((oa.lane, oa.kind, oa.color), (ob.lane, ob.kind, ob.color));
        }
    }
}
