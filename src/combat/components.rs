//! Combat domain: health, damage timers and hostile controllers.

use bevy::prelude::*;

use crate::combat::resources::{ChaserTuning, PhantomTuning};
use crate::content::{ConfigError, validate_chaser, validate_phantom};
use crate::movement::Facing;

/// Marks an entity as an opponent of the player
#[derive(Component, Debug)]
pub struct Hostile;

/// Terminal state. Every simulation query filters it out; the entity is
/// reported and despawned during cleanup of the same frame.
#[derive(Component, Debug)]
pub struct Dead;

/// Every damage call against this entity is a no-op
#[derive(Component, Debug)]
pub struct DamageImmune;

/// Health component for damageable entities
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Returns the amount actually removed
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal_full(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Invulnerability frames - entity cannot take contact damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub frames: u32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.frames > 0
    }
}

/// Frames left of the hurt flash
#[derive(Component, Debug, Default)]
pub struct DamageFlash {
    pub frames: u32,
}

/// Steering is suppressed while this runs down
#[derive(Component, Debug, Default)]
pub struct Knockback {
    pub frames: u32,
}

impl Knockback {
    pub fn is_active(&self) -> bool {
        self.frames > 0
    }
}

/// Reach of a chaser's leap, used by ledge and landing probes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpEnvelope {
    pub ledge_probe_distance: f32,
    pub max_horizontal: f32,
    pub max_vertical: f32,
}

/// Behaviour branch taken on the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaserMode {
    #[default]
    Patrol,
    Chase,
    Leaping,
    Staggered,
}

/// Ground-bound hostile that patrols platforms and chases the player.
#[derive(Component, Debug, Clone)]
pub struct Chaser {
    pub detection_radius: f32,
    pub move_speed: f32,
    pub run_speed: f32,
    pub run_distance: f32,
    pub patrol_speed: f32,
    pub dead_zone: f32,
    pub jump_velocity: f32,
    pub leap_speed: f32,
    pub jump_cooldown_frames: u32,
    pub envelope: JumpEnvelope,
    pub facing: Facing,
    /// Frames until the next leap is allowed
    pub jump_cooldown: u32,
    /// Direction held until touchdown
    pub leap: Option<Facing>,
    pub mode: ChaserMode,
}

impl Chaser {
    pub fn from_tuning(tuning: &ChaserTuning) -> Result<Self, ConfigError> {
        if let Some(err) = validate_chaser(tuning).into_iter().next() {
            return Err(err);
        }

        Ok(Self {
            detection_radius: tuning.detection_radius,
            move_speed: tuning.move_speed,
            run_speed: tuning.run_speed,
            run_distance: tuning.run_distance,
            patrol_speed: tuning.patrol_speed,
            dead_zone: tuning.chase_dead_zone,
            jump_velocity: tuning.jump_velocity,
            leap_speed: tuning.leap_speed,
            jump_cooldown_frames: tuning.jump_cooldown_frames,
            envelope: JumpEnvelope {
                ledge_probe_distance: tuning.ledge_probe_distance,
                max_horizontal: tuning.max_jump_horizontal,
                max_vertical: tuning.max_jump_vertical,
            },
            facing: Facing::Right,
            jump_cooldown: 0,
            leap: None,
            mode: ChaserMode::Patrol,
        })
    }

    pub fn can_leap(&self) -> bool {
        self.jump_cooldown == 0
    }
}

/// Boss-class hostile that drifts through geometry toward the player.
#[derive(Component, Debug, Clone)]
pub struct Phantom {
    pub detection_radius: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub decay: f32,
    pub min_distance: f32,
}

impl Phantom {
    pub fn from_tuning(tuning: &PhantomTuning) -> Result<Self, ConfigError> {
        if let Some(err) = validate_phantom(tuning).into_iter().next() {
            return Err(err);
        }

        Ok(Self {
            detection_radius: tuning.detection_radius,
            acceleration: tuning.acceleration,
            max_speed: tuning.max_speed,
            decay: tuning.decay,
            min_distance: tuning.min_distance,
        })
    }
}
