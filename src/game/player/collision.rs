//! What happens when the runner touches something.

use log::info;

use crate::engine::physics::Contact;

/// Receives contacts involving the runner's body. Gameplay consequences
/// (damage, game over, score) plug in here.
pub trait CollisionHandler {
    fn on_collide(&mut self, contact: &Contact);
}

/// Default handler: logs and nothing else.
#[derive(Debug, Default)]
pub struct LogCollisionHandler;

impl CollisionHandler for LogCollisionHandler {
    fn on_collide(&mut self, contact: &Contact) {
        info!("Collision detected with body {:?}", contact.other);
    }
}

impl<F> CollisionHandler for F
where
    F: FnMut(&Contact),
{
    fn on_collide(&mut self, contact: &Contact) {
        self(contact)
    }
}
