//! Movement domain: world physics and player tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What happens to the player when it falls below the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FallOutPolicy {
    /// Teleport to the level's safe point with velocity zeroed and jumps refilled
    #[default]
    Respawn,
    Kill,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Added to `vy` every frame, scaled by the frame's gravity multiplier
    pub gravity: f32,
    /// Horizontal velocity factor applied after collision resolution
    pub damping: f32,
    /// `|vx|` below this snaps to exactly zero
    pub velocity_snap: f32,
    pub fall_out_y: f32,
    pub player_fall_out: FallOutPolicy,
    /// Used when the level declares no safe point
    pub default_safe_point: (f32, f32),
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            damping: 0.8,
            velocity_snap: 0.01,
            fall_out_y: 5000.0,
            player_fall_out: FallOutPolicy::Respawn,
            default_safe_point: (960.0, 2400.0),
        }
    }
}

impl PhysicsTuning {
    pub fn default_safe_point(&self) -> Vec2 {
        Vec2::new(self.default_safe_point.0, self.default_safe_point.1)
    }

    pub fn is_out_of_world(&self, position: Vec2) -> bool {
        position.y > self.fall_out_y
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed while a direction is held
    pub run_speed: f32,
    /// Overwrites `vy` on a successful jump (negative is up)
    pub jump_velocity: f32,
    pub max_jumps: u8,
    pub max_health: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 120.0,
            run_speed: 4.0,
            jump_velocity: -20.0,
            max_jumps: 5,
            max_health: 5,
        }
    }
}

impl PlayerTuning {
    /// Apex height of a single jump under `gravity`: h = v² / (2g)
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * gravity)
    }
}
