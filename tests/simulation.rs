use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use lane_runner::engine::input::RunnerInput;
use lane_runner::engine::physics::Contact;
use lane_runner::game::lane::Lane;
use lane_runner::game::obstacles::ObstacleKind;
use lane_runner::game::scene::{compose, EntityKind};
use lane_runner::game::Camera;
use lane_runner::{GameConfig, Simulation};

const DT: f32 = 0.05;

fn seeded(seed: u64) -> Simulation {
    Simulation::new(GameConfig::default().with_seed(seed))
}

#[test]
fn invariants_hold_over_a_long_run() {
    let mut sim = seeded(2024);
    let inputs = [
        RunnerInput::MoveLeft,
        RunnerInput::Jump,
        RunnerInput::MoveLeft,
        RunnerInput::MoveRight,
        RunnerInput::MoveRight,
        RunnerInput::MoveRight,
        RunnerInput::Jump,
    ];

    for frame in 0..2400 {
        if frame % 37 == 0 {
            sim.queue_input(inputs[(frame / 37) % inputs.len()]);
        }
        sim.tick(DT).unwrap();

        let player = sim.player();
        assert!((-1..=1).contains(&player.lane().index()));
        assert!(player.position().y >= 1.0 && player.position().y <= 3.5 + 1e-4);
        assert_eq!(sim.physics().position(player.body()), Some(player.position()));

        for obstacle in sim.spawner().obstacles() {
            assert!(obstacle.position.z < 20.0);
            assert_eq!(sim.physics().position(obstacle.body()), Some(obstacle.position));
        }
        // Player body plus one per live obstacle, nothing leaked.
        assert_eq!(sim.physics().body_count(), 1 + sim.spawner().obstacles().len());

        assert_eq!(sim.track().segments().len(), 5);
    }

    assert!(sim.spawner().spawned_count() > 50);
    assert_eq!(sim.ticks(), 2400);
}

#[test]
fn centre_lane_obstacles_hit_a_stationary_runner() {
    let mut sim = seeded(77);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    sim.player_mut()
        .set_collision_handler(Box::new(move |contact: &Contact| sink.borrow_mut().push(contact.other)));

    let mut passed = HashSet::new();
    for _ in 0..1200 {
        sim.tick(DT).unwrap();
        for obstacle in sim.spawner().obstacles() {
            let blocking = obstacle.lane == Lane::Center && obstacle.kind != ObstacleKind::Barrier;
            if blocking && obstacle.position.z >= 1.0 {
                passed.insert(obstacle.body());
            }
        }
    }

    let near: usize = sim
        .spawner()
        .obstacles()
        .iter()
        .filter(|o| o.lane == Lane::Center && o.kind != ObstacleKind::Barrier)
        .filter(|o| o.position.z > -1.0 && o.position.z < 1.0)
        .count();

    let hits = sim.player().collisions() as usize;
    assert!(!passed.is_empty());
    assert!(hits >= passed.len() && hits <= passed.len() + near);
    assert_eq!(seen.borrow().len(), hits);
    for body in passed {
        assert!(seen.borrow().contains(&body));
    }
}

#[test]
fn snapshot_tracks_simulation() {
    let mut sim = seeded(5);
    sim.queue_input(RunnerInput::MoveRight);
    for _ in 0..100 {
        sim.tick(DT).unwrap();
    }
    let scene = compose(&sim, &Camera::new());

    let segments: Vec<_> = scene
        .instances
        .iter()
        .filter_map(|i| match i.kind {
            EntityKind::TrackSegment(index) => Some((index, i.position.z)),
            _ => None,
        })
        .collect();
    let expected: Vec<_> = sim.track().segments().iter().map(|s| (s.index, s.z)).collect();
    assert_eq!(segments, expected);

    let player = scene.instances.iter().find(|i| i.kind == EntityKind::Player).unwrap();
    assert!(player.position.x > 2.9);
}

#[test]
fn same_seed_replays_identically() {
    let mut a = seeded(31);
    let mut b = seeded(31);
    for _ in 0..400 {
        a.tick(DT).unwrap();
        b.tick(DT).unwrap();
    }
    let summary = |sim: &Simulation| {
        sim.spawner()
            .obstacles()
            .iter()
            .map(|o| (o.id, o.lane, o.kind, o.color))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&a), summary(&b));
}

#[test]
fn spawn_timer_resets_across_long_ticks() {
    let mut sim = seeded(11);
    sim.tick(1.5).unwrap();
    assert_eq!(sim.spawner().spawned_count(), 0);
    sim.tick(1.5).unwrap();
    assert_eq!(sim.spawner().spawned_count(), 1);
    assert_eq!(sim.spawner().spawn_timer(), 0.0);
    assert_eq!(sim.elapsed(), 3.0);
}

#[test]
fn jump_arc_follows_wall_clock_delta() {
    let mut sim = seeded(12);
    sim.queue_input(RunnerInput::Jump);
    sim.tick(0.5).unwrap();
    assert!(sim.player().is_jumping());
    assert!((sim.player().position().y - 3.5).abs() < 1e-4);

    sim.tick(0.5).unwrap();
    assert!(!sim.player().is_jumping());
    assert_eq!(sim.player().position().y, 1.0);

    // One long frame lands the whole jump.
    sim.queue_input(RunnerInput::Jump);
    sim.tick(1.0).unwrap();
    assert!(!sim.player().is_jumping());
    assert_eq!(sim.player().position().y, 1.0);
}

#[test]
fn slow_frames_still_report_collisions() {
    // 0.4s per frame moves obstacles 4 units, wider than any overlap window.
    let mut sim = seeded(77);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    sim.player_mut()
        .set_collision_handler(Box::new(move |contact: &Contact| sink.borrow_mut().push(contact.other)));

    let mut passed = HashSet::new();
    for _ in 0..300 {
        sim.tick(0.4).unwrap();
        for obstacle in sim.spawner().obstacles() {
            let blocking = obstacle.lane == Lane::Center && obstacle.kind != ObstacleKind::Barrier;
            if blocking && obstacle.position.z >= 1.0 {
                passed.insert(obstacle.body());
            }
        }
    }

    assert!(!passed.is_empty());
    for body in passed {
        assert!(seen.borrow().contains(&body));
    }
}
