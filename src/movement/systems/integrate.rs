//! Movement domain: per-frame integration of gravity, motion and bounds.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{Dead, Health, Hostile, Phantom, RulesConfig};
use crate::core::{FrameInput, PhaseTransitionEvent};
use crate::level::{ActiveLevel, Block, LevelGeometry, TransitionLatch};
use crate::movement::systems::collisions::{CollisionMode, ResolveOutcome, resolve_against_blocks};
use crate::movement::{
    Body, FallOutPolicy, Grounded, JumpCharges, PhysicsTuning, Player, Position, TouchingHazard,
    Velocity,
};

/// World parameters for one integration step
#[derive(Debug, Clone, Copy)]
pub struct IntegrationStep<'a> {
    pub physics: &'a PhysicsTuning,
    pub gravity_multiplier: f32,
    /// Right bound, ignored when not positive
    pub world_width: f32,
    pub blocks: &'a [Block],
    pub mode: CollisionMode,
}

/// Advance one body by one frame: gravity, move, resolve, damp, clamp.
pub fn integrate_body(
    body: &Body,
    position: &mut Vec2,
    velocity: &mut Vec2,
    step: &IntegrationStep,
) -> ResolveOutcome {
    velocity.y += step.physics.gravity * step.gravity_multiplier;
    *position += *velocity;

    let outcome = resolve_against_blocks(body, position, velocity, step.blocks, step.mode);

    velocity.x *= step.physics.damping;
    if velocity.x.abs() < step.physics.velocity_snap {
        velocity.x = 0.0;
    }

    if position.x < 0.0 {
        position.x = 0.0;
        velocity.x = 0.0;
    }
    if step.world_width > 0.0 && position.x + body.width > step.world_width {
        position.x = (step.world_width - body.width).max(0.0);
        velocity.x = 0.0;
    }

    outcome
}

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub(crate) fn integrate_player(
    mut commands: Commands,
    input: Res<FrameInput>,
    physics: Res<PhysicsTuning>,
    rules: Res<RulesConfig>,
    geometry: Res<LevelGeometry>,
    level: Res<ActiveLevel>,
    mut latch: ResMut<TransitionLatch>,
    mut transitions: MessageWriter<PhaseTransitionEvent>,
    hostiles: Query<(), (With<Hostile>, Without<Dead>)>,
    mut query: Query<
        (
            Entity,
            &Body,
            &mut Position,
            &mut Velocity,
            &mut Grounded,
            &mut TouchingHazard,
            &mut JumpCharges,
            Option<&mut Health>,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    let step = IntegrationStep {
        physics: &physics,
        gravity_multiplier: input.gravity_multiplier,
        world_width: level.world_width(),
        blocks: &geometry.blocks,
        mode: CollisionMode::Player,
    };

    for (entity, body, mut position, mut velocity, mut grounded, mut hazard, mut charges, health) in
        &mut query
    {
        let outcome = integrate_body(body, &mut position.0, &mut velocity.0, &step);
        grounded.0 = outcome.grounded;
        hazard.0 = outcome.hazard_contact;

        match outcome.transition {
            Some(next_phase) => {
                let cleared = !rules.transition_requires_clear || hostiles.is_empty();
                if latch.armed && cleared {
                    latch.armed = false;
                    transitions.write(PhaseTransitionEvent {
                        from_level: level.id().unwrap_or_default(),
                        next_phase,
                    });
                }
            }
            None => latch.armed = true,
        }

        if !physics.is_out_of_world(position.0) {
            continue;
        }

        match physics.player_fall_out {
            FallOutPolicy::Respawn => {
                position.0 = level.safe_point(physics.default_safe_point());
                velocity.0 = Vec2::ZERO;
                grounded.0 = false;
                charges.refill();
                info!("Player fell out of the world, respawned at {}", position.0);
            }
            FallOutPolicy::Kill => {
                if let Some(mut health) = health {
                    health.current = 0;
                }
                commands.entity(entity).insert(Dead);
                info!("Player fell out of the world");
            }
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn integrate_hostiles(
    mut commands: Commands,
    physics: Res<PhysicsTuning>,
    geometry: Res<LevelGeometry>,
    level: Res<ActiveLevel>,
    mut query: Query<
        (Entity, &Body, &mut Position, &mut Velocity, &mut Grounded),
        (With<Hostile>, Without<Phantom>, Without<Dead>, Without<Player>),
    >,
) {
    let step = IntegrationStep {
        physics: &physics,
        gravity_multiplier: 1.0,
        world_width: level.world_width(),
        blocks: &geometry.blocks,
        mode: CollisionMode::Hostile,
    };

    for (entity, body, mut position, mut velocity, mut grounded) in &mut query {
        let outcome = integrate_body(body, &mut position.0, &mut velocity.0, &step);
        grounded.0 = outcome.grounded;

        if physics.is_out_of_world(position.0) {
            debug!("Hostile {:?} fell out of the world", entity);
            commands.entity(entity).insert(Dead);
        }
    }
}
