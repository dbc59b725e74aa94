//! Movement domain: player bootstrap from tuning.

use bevy::prelude::*;

use crate::animation::VisualState;
use crate::combat::{DamageFlash, Health, Invulnerable, Knockback};
use crate::movement::{
    Body, Grounded, JumpCharges, Player, PlayerTuning, Position, SimEntity, TouchingHazard,
    Velocity,
};

/// Spawn the player at `position` with full health and jump charges.
pub fn spawn_player(commands: &mut Commands, tuning: &PlayerTuning, position: Vec2) -> Entity {
    let entity = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                SimEntity,
                Position(position),
                Velocity::default(),
                Body::new(tuning.width, tuning.height),
                Grounded::default(),
                TouchingHazard::default(),
                JumpCharges::new(tuning.max_jumps),
            ),
            // Combat
            (
                Health::new(tuning.max_health),
                Invulnerable::default(),
                DamageFlash::default(),
                Knockback::default(),
            ),
            VisualState::default(),
        ))
        .id();

    info!(
        "Spawned player at {} with {} health, {} jumps",
        position, tuning.max_health, tuning.max_jumps
    );
    entity
}
