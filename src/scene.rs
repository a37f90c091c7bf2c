//! The player actor and the catchable area it fishes in.
//!
//! World coordinates follow the ground plane `(x, z)` with `y` up. An actor
//! with facing angle `θ` looks along `(-sin θ, -cos θ)`, so `θ = 0` faces `-z`.

use glam::{Vec2, Vec3};

/// Where the player stands and which way they face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub position: Vec3,
    /// Rotation about the y axis, radians
    pub facing: f32,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            facing: 0.0,
        }
    }
}

impl Actor {
    pub fn new(x: f32, z: f32, facing: f32) -> Self {
        Self {
            position: Vec3::new(x, 1.0, z),
            facing,
        }
    }

    /// Position projected onto the ground plane.
    pub fn ground(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    /// Unit forward vector on the ground plane.
    pub fn forward(&self) -> Vec2 {
        Vec2::new(-self.facing.sin(), -self.facing.cos())
    }

    /// Ground point `distance` ahead of the actor.
    pub fn point_ahead(&self, distance: f32) -> Vec2 {
        self.ground() + self.forward() * distance
    }

    /// Moves along world axes.
    pub fn step(&mut self, direction: MoveDirection, speed: f32) {
        match direction {
            MoveDirection::North => self.position.z -= speed,
            MoveDirection::South => self.position.z += speed,
            MoveDirection::West => self.position.x -= speed,
            MoveDirection::East => self.position.x += speed,
        }
    }

    /// Turns by `radians`, keeping the angle in `(-π, π]`.
    pub fn turn(&mut self, radians: f32) {
        let turned = self.facing + radians;
        self.facing = (turned + std::f32::consts::PI).rem_euclid(std::f32::consts::TAU)
            - std::f32::consts::PI;
    }
}

/// World-axis movement, independent of facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    North,
    South,
    West,
    East,
}

/// A circular catchable area (the lake).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchArea {
    pub center: Vec2,
    pub radius: f32,
}

impl CatchArea {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Strictly inside the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) < self.radius
    }
}
