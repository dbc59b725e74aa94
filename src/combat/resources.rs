//! Combat domain: tuning for contacts, hostiles and level rules.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Health lost by the player on a non-stomp contact
    pub contact_damage: u32,
    pub invulnerability_frames: u32,
    pub damage_flash_frames: u32,
    /// Horizontal push away from the hostile, applied by sign
    pub player_knockback_x: f32,
    pub player_knockback_y: f32,
    pub player_knockback_frames: u32,
    /// `vy` given to the player after a stomp
    pub stomp_bounce: f32,
    pub hostile_knockback_x: f32,
    pub hostile_knockback_y: f32,
    pub hostile_knockback_frames: u32,
    pub hostile_flash_frames: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            contact_damage: 1,
            invulnerability_frames: 90,
            damage_flash_frames: 20,
            player_knockback_x: 8.0,
            player_knockback_y: -10.0,
            player_knockback_frames: 15,
            stomp_bounce: -12.0,
            hostile_knockback_x: 8.0,
            hostile_knockback_y: -10.0,
            hostile_knockback_frames: 15,
            hostile_flash_frames: 20,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChaserTuning {
    pub width: f32,
    pub height: f32,
    pub max_health: u32,
    pub detection_radius: f32,
    /// Chase speed while the player is far
    pub move_speed: f32,
    /// Chase speed once within `run_distance` horizontally
    pub run_speed: f32,
    pub run_distance: f32,
    pub patrol_speed: f32,
    /// Horizontal band around the player where the chaser stands still
    pub chase_dead_zone: f32,
    pub jump_velocity: f32,
    /// Horizontal speed held for the whole leap
    pub leap_speed: f32,
    pub jump_cooldown_frames: u32,
    pub ledge_probe_distance: f32,
    pub max_jump_horizontal: f32,
    pub max_jump_vertical: f32,
}

impl Default for ChaserTuning {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 60.0,
            max_health: 3,
            detection_radius: 400.0,
            move_speed: 2.0,
            run_speed: 3.5,
            run_distance: 120.0,
            patrol_speed: 1.0,
            chase_dead_zone: 10.0,
            jump_velocity: -15.0,
            leap_speed: 5.0,
            jump_cooldown_frames: 60,
            ledge_probe_distance: 10.0,
            max_jump_horizontal: 150.0,
            max_jump_vertical: 100.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhantomTuning {
    /// Square body edge
    pub size: f32,
    pub detection_radius: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    /// Velocity factor applied after each move
    pub decay: f32,
    /// Homing stops inside this distance
    pub min_distance: f32,
}

impl Default for PhantomTuning {
    fn default() -> Self {
        Self {
            size: 80.0,
            detection_radius: 1000.0,
            acceleration: 0.2,
            max_speed: 1.5,
            decay: 0.95,
            min_distance: 10.0,
        }
    }
}

/// Effect of touching a hazard block as the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum HazardPolicy {
    /// Hazards behave as plain solid blocks
    #[default]
    Inert,
    /// Same gating as a contact hit
    Damage { amount: u32 },
    Lethal,
}

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Transition blocks only fire once no live hostile remains
    pub transition_requires_clear: bool,
    pub hazard: HazardPolicy,
}
