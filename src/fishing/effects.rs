//! Cosmetic effect jobs driven by the resolver tick.
//!
//! None of this feeds back into the reward logic; the renderer only needs the
//! positions these produce.

use crate::scene::Actor;
use glam::Vec3;

/// The fishing line segment while a cast is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    /// Line from the actor to a point `length` ahead and one unit up.
    pub fn from_actor(actor: &Actor, length: f32) -> Self {
        let ahead = actor.point_ahead(length);
        Self {
            start: actor.position,
            end: Vec3::new(ahead.x, actor.position.y + 1.0, ahead.y),
        }
    }
}

/// Height at which a caught fish appears above the water.
pub const FISH_SPAWN_HEIGHT: f32 = 0.5;

/// A caught fish rising out of the water until it reaches its target height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishRise {
    pub position: Vec3,
    pub color: u32,
    rise_per_tick: f32,
    target_height: f32,
}

impl FishRise {
    /// Spawns the fish `distance` ahead of the actor.
    pub fn spawn(
        actor: &Actor,
        distance: f32,
        color: u32,
        rise_per_tick: f32,
        target_height: f32,
    ) -> Self {
        let ahead = actor.point_ahead(distance);
        Self {
            position: Vec3::new(ahead.x, FISH_SPAWN_HEIGHT, ahead.y),
            color,
            rise_per_tick,
            target_height,
        }
    }

    pub fn is_done(&self) -> bool {
        self.position.y >= self.target_height
    }

    /// Advances one tick. Returns true once the fish has reached the target.
    pub fn advance(&mut self) -> bool {
        if !self.is_done() {
            self.position.y += self.rise_per_tick;
        }
        self.is_done()
    }
}
