//! Axis-aligned box physics used for collision reporting.
//!
//! Positions are pushed in from game state every tick; the world never
//! integrates motion on its own. It only answers "which boxes overlap".
//! Overlap is tested on each body's swept box (the bounds of where it was at
//! the previous `step` and where it is now), so a fast mover cannot tunnel
//! through a thin body between two steps.

use std::collections::{BTreeMap, HashSet};

use glam::Vec3;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// Static bodies never report contacts against each other, even when one of
/// them is listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub position: Vec3,
    /// Full box size; halved internally.
    pub size: Vec3,
}

#[derive(Debug, Clone)]
struct Body {
    kind: BodyKind,
    position: Vec3,
    previous: Vec3,
    half_extents: Vec3,
    listening: bool,
}

impl Body {
    fn swept_bounds(&self) -> (Vec3, Vec3) {
        (
            self.position.min(self.previous) - self.half_extents,
            self.position.max(self.previous) + self.half_extents,
        )
    }

    fn overlaps(&self, other: &Body) -> bool {
        if self.kind == BodyKind::Static && other.kind == BodyKind::Static {
            return false;
        }
        let (min_a, max_a) = self.swept_bounds();
        let (min_b, max_b) = other.swept_bounds();
        min_a.cmplt(max_b).all() && min_b.cmplt(max_a).all()
    }
}

/// A newly started overlap between a listening body and another body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub body: BodyHandle,
    pub other: BodyHandle,
}

pub struct PhysicsWorld {
    bodies: BTreeMap<BodyHandle, Body>,
    touching: HashSet<(BodyHandle, BodyHandle)>,
    next_handle: u32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self {
            bodies: BTreeMap::new(),
            touching: HashSet::new(),
            next_handle: 1,
        }
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, desc: BodyDesc) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.insert(
            handle,
            Body {
                kind: desc.kind,
                position: desc.position,
                previous: desc.position,
                half_extents: desc.size * 0.5,
                listening: false,
            },
        );
        handle
    }

    pub fn remove_body(&mut self, handle: BodyHandle) {
        if self.bodies.remove(&handle).is_some() {
            self.touching.retain(|&(a, b)| a != handle && b != handle);
        }
    }

    /// Teleports the body. Returns `false` for an unknown handle.
    pub fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> bool {
        match self.bodies.get_mut(&handle) {
            Some(body) => {
                body.position = position;
                true
            }
            None => false,
        }
    }

    pub fn position(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(&handle).map(|body| body.position)
    }

    /// Marks a body as wanting contact reports from `step`.
    pub fn listen(&mut self, handle: BodyHandle) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.listening = true;
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Collects overlaps for listening bodies. A pair is reported when it
    /// starts touching and stays silent until it separates again. Afterwards
    /// every body's sweep restarts from its current position.
    pub fn step(&mut self) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let mut still_touching = HashSet::new();

        for (&handle, body) in self.bodies.iter().filter(|(_, b)| b.listening) {
            for (&other_handle, other) in &self.bodies {
                if other_handle == handle || !body.overlaps(other) {
                    continue;
                }
                let pair = (handle, other_handle);
                still_touching.insert(pair);
                if !self.touching.contains(&pair) {
                    debug!("Contact began: {:?} -> {:?}", handle, other_handle);
                    contacts.push(Contact {
                        body: handle,
                        other: other_handle,
                    });
                }
            }
        }

        self.touching = still_touching;
        for body in self.bodies.values_mut() {
            body.previous = body.position;
        }
        contacts
    }
}
