//! Player implementation.

use std::f32::consts::PI;

use glam::Vec3;
use log::debug;

use crate::engine::input::RunnerInput;
use crate::engine::physics::{BodyDesc, BodyHandle, BodyKind, Contact, PhysicsWorld};
use crate::game::config::PlayerConfig;
use crate::game::lane::Lane;
use crate::game::player::collision::{CollisionHandler, LogCollisionHandler};

pub struct PlayerController {
    config: PlayerConfig,
    lane: Lane,
    /// Render transform. Physics follows this, never the other way round.
    position: Vec3,
    is_jumping: bool,
    jump_elapsed: f32,
    body: BodyHandle,
    collision_handler: Box<dyn CollisionHandler>,
    collisions: u64,
}

impl PlayerController {
    pub fn new(config: PlayerConfig, physics: &mut PhysicsWorld) -> Self {
        let position = Vec3::new(0.0, config.base_height, 0.0);
        let body = physics.add_body(BodyDesc {
            kind: BodyKind::Dynamic,
            position,
            size: config.size,
        });
        physics.listen(body);

        Self {
            config,
            lane: Lane::Center,
            position,
            is_jumping: false,
            jump_elapsed: 0.0,
            body,
            collision_handler: Box::new(LogCollisionHandler),
            collisions: 0,
        }
    }

    pub fn apply_input(&mut self, input: RunnerInput) {
        match input {
            RunnerInput::MoveLeft => self.move_left(),
            RunnerInput::MoveRight => self.move_right(),
            RunnerInput::Jump => self.jump(),
        }
    }

    pub fn move_left(&mut self) {
        if let Some(lane) = self.lane.left() {
            debug!("Lane change: {:?} -> {:?}", self.lane, lane);
            self.lane = lane;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(lane) = self.lane.right() {
            debug!("Lane change: {:?} -> {:?}", self.lane, lane);
            self.lane = lane;
        }
    }

    /// Starts a jump. Ignored while already airborne.
    pub fn jump(&mut self) {
        if self.is_jumping {
            return;
        }
        debug!("Jump started");
        self.is_jumping = true;
        self.jump_elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32, physics: &mut PhysicsWorld) {
        let target_x = self.target_x();
        self.position.x += (target_x - self.position.x) * self.config.smoothing.factor(dt);

        if self.is_jumping {
            self.jump_elapsed += dt;
            if self.jump_elapsed >= self.config.jump_duration {
                self.is_jumping = false;
                self.position.y = self.config.base_height;
                debug!("Jump landed");
            } else {
                let phase = self.jump_elapsed / self.config.jump_duration;
                self.position.y = self.config.base_height + (PI * phase).sin() * self.config.jump_height;
            }
        }

        physics.set_position(self.body, self.position);
    }

    pub fn on_contact(&mut self, contact: &Contact) {
        self.collisions += 1;
        self.collision_handler.on_collide(contact);
    }

    pub fn set_collision_handler(&mut self, handler: Box<dyn CollisionHandler>) {
        self.collision_handler = handler;
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn target_x(&self) -> f32 {
        self.lane.x_offset(self.config.lane_width)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn size(&self) -> Vec3 {
        self.config.size
    }

    pub fn color(&self) -> u32 {
        self.config.color
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn jump_elapsed(&self) -> f32 {
        self.jump_elapsed
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}
