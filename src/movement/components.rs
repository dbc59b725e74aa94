//! Movement domain: kinematic components shared by every simulated body.

use bevy::prelude::*;

use crate::geometry::Aabb;

#[derive(Component, Debug)]
pub struct Player;

/// Tag for entities owned by the active level. Despawned on level swap.
#[derive(Component, Debug)]
pub struct SimEntity;

/// Top-left corner in world space
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// World units per frame
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box at `position`. Always derived on demand so it can never be stale.
    pub fn aabb(&self, position: Vec2) -> Aabb {
        Aabb::from_position(position, self.width, self.height)
    }
}

/// Result of the most recent collision pass
#[derive(Component, Debug, Default)]
pub struct Grounded(pub bool);

/// Set while the player rests on or presses into a hazard block
#[derive(Component, Debug, Default)]
pub struct TouchingHazard(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Multi-jump budget. Refilled by a jump attempt made while grounded.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct JumpCharges {
    pub remaining: u8,
    pub max: u8,
}

impl JumpCharges {
    pub fn new(max: u8) -> Self {
        Self {
            remaining: max,
            max,
        }
    }

    pub fn refill(&mut self) {
        self.remaining = self.max;
    }

    /// Try to jump. On success `vy` is overwritten (not added to) and one
    /// charge is consumed. A failed attempt changes nothing.
    pub fn attempt_jump(&mut self, grounded: bool, velocity: &mut Vec2, jump_velocity: f32) -> bool {
        if grounded {
            self.refill();
        }

        if self.remaining == 0 {
            return false;
        }

        velocity.y = jump_velocity;
        self.remaining -= 1;
        true
    }
}
