//! The whole runner state, advanced one frame at a time.

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::trace;
use thiserror::Error;

use crate::engine::input::RunnerInput;
use crate::engine::physics::PhysicsWorld;
use crate::game::config::GameConfig;
use crate::game::obstacles::ObstacleSpawner;
use crate::game::player::PlayerController;
use crate::game::track::TrackScroller;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("frame delta must be finite and non-negative, got {0}")]
    InvalidDelta(f32),
}

pub struct Simulation {
    config: GameConfig,
    physics: PhysicsWorld,
    player: PlayerController,
    spawner: ObstacleSpawner,
    track: TrackScroller,
    input_tx: Sender<RunnerInput>,
    input_rx: Receiver<RunnerInput>,
    ticks: u64,
    elapsed: f64,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let mut physics = PhysicsWorld::new();
        let player = PlayerController::new(config.player.clone(), &mut physics);
        let spawner = ObstacleSpawner::new(config.spawner.clone(), config.seed);
        let track = TrackScroller::new(config.track.clone());
        let (input_tx, input_rx) = unbounded();

        Self {
            config,
            physics,
            player,
            spawner,
            track,
            input_tx,
            input_rx,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Sender for the host's keyboard handler.
    pub fn input_sender(&self) -> Sender<RunnerInput> {
        self.input_tx.clone()
    }

    pub fn queue_input(&self, input: RunnerInput) {
        // Both ends live in `self`, so the channel cannot be disconnected here.
        let _ = self.input_tx.send(input);
    }

    /// Advances the world by `dt` seconds. Inputs queued since the last tick
    /// are applied first, all at once.
    pub fn tick(&mut self, dt: f32) -> Result<(), SimError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidDelta(dt));
        }
        let dt = match self.config.max_frame_delta {
            Some(max) => dt.min(max),
            None => dt,
        };

        for input in self.input_rx.try_iter() {
            self.player.apply_input(input);
        }

        self.player.tick(dt, &mut self.physics);
        self.spawner.tick(dt, &mut self.physics);
        self.track.tick(dt);

        for contact in self.physics.step() {
            if contact.body == self.player.body() {
                self.player.on_contact(&contact);
            }
        }

        self.ticks += 1;
        self.elapsed += dt as f64;
        trace!("Tick {} dt={:.4}", self.ticks, dt);
        Ok(())
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn spawner(&self) -> &ObstacleSpawner {
        &self.spawner
    }

    pub fn track(&self) -> &TrackScroller {
        &self.track
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds, after any frame cap.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation {
        Simulation::new(GameConfig::default().with_seed(3))
    }

    #[test]
    fn negative_and_nan_deltas_are_rejected() {
        let mut sim = sim();
        sim.queue_input(RunnerInput::MoveLeft);

        assert_eq!(sim.tick(-0.1), Err(SimError::InvalidDelta(-0.1)));
        assert!(sim.tick(f32::NAN).is_err());
        assert_eq!(sim.ticks(), 0);
        // The queued input is still waiting for a valid tick.
        assert_eq!(sim.player().lane().index(), 0);

        assert!(sim.tick(0.0).is_ok());
        assert_eq!(sim.player().lane().index(), -1);
    }

    #[test]
    fn long_frames_pass_through_by_default() {
        let mut sim = sim();
        sim.tick(2.5).unwrap();
        assert_eq!(sim.elapsed(), 2.5);
        assert_eq!(sim.spawner().spawned_count(), 1);
    }

    #[test]
    fn frame_cap_clamps_when_configured() {
        let mut sim = Simulation::new(GameConfig::default().with_seed(3).with_max_frame_delta(0.25));
        sim.tick(5.0).unwrap();
        assert_eq!(sim.elapsed(), 0.25);
        assert_eq!(sim.spawner().spawned_count(), 0);
    }

    #[test]
    fn queued_inputs_apply_together() {
        let mut sim = sim();
        sim.queue_input(RunnerInput::MoveRight);
        sim.queue_input(RunnerInput::MoveRight);
        sim.queue_input(RunnerInput::Jump);
        sim.queue_input(RunnerInput::Jump);
        assert_eq!(sim.player().lane().index(), 0);

        sim.tick(0.1).unwrap();
        assert_eq!(sim.player().lane().index(), 1);
        assert!(sim.player().is_jumping());
        assert!((sim.player().jump_elapsed() - 0.1).abs() < 1e-6);
    }
}
