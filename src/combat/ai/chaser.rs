//! Combat domain: chaser steering (patrol, chase, ledge handling, leaps).

use bevy::prelude::*;

use crate::combat::ai::probe::{MAX_LEAP_DROP, find_landing_block, has_ground_ahead};
use crate::combat::components::{Chaser, ChaserMode, Dead, Hostile, Knockback};
use crate::level::{Block, LevelGeometry};
use crate::movement::{Body, Facing, Grounded, Player, Position, Velocity};

/// The player must be at least this far above to trigger an upward leap
const CLIMB_TRIGGER: f32 = 50.0;

/// What the chaser can see of itself this frame
#[derive(Debug, Clone, Copy)]
pub struct ChaserSenses {
    pub position: Vec2,
    pub body: Body,
    pub grounded: bool,
    pub knocked_back: bool,
}

fn start_leap(chaser: &mut Chaser, velocity: &mut Vec2, facing: Facing, landing: &Block) {
    velocity.y = chaser.jump_velocity;
    velocity.x = facing.sign() * chaser.leap_speed;
    chaser.facing = facing;
    chaser.leap = Some(facing);
    chaser.jump_cooldown = chaser.jump_cooldown_frames;
    debug!(
        "Chaser leaping {:?} toward block at ({}, {})",
        facing, landing.x, landing.y
    );
}

/// Decide this frame's velocity for one chaser. Returns the branch taken.
pub fn steer_chaser(
    chaser: &mut Chaser,
    senses: ChaserSenses,
    velocity: &mut Vec2,
    player: Option<Vec2>,
    blocks: &[Block],
) -> ChaserMode {
    if senses.knocked_back {
        chaser.leap = None;
        return ChaserMode::Staggered;
    }

    if let Some(direction) = chaser.leap {
        if senses.grounded {
            chaser.leap = None;
        } else {
            velocity.x = direction.sign() * chaser.leap_speed;
            return ChaserMode::Leaping;
        }
    }

    let aabb = senses.body.aabb(senses.position);
    let envelope = chaser.envelope;

    let target = player.filter(|p| p.distance(senses.position) < chaser.detection_radius);
    let Some(target) = target else {
        if senses.grounded
            && !has_ground_ahead(&aabb, chaser.facing, blocks, envelope.ledge_probe_distance)
        {
            chaser.facing = chaser.facing.reversed();
        }
        velocity.x = chaser.facing.sign() * chaser.patrol_speed;
        return ChaserMode::Patrol;
    };

    let dx = target.x - senses.position.x;
    let dy = target.y - senses.position.y;

    if dx.abs() <= chaser.dead_zone {
        velocity.x = 0.0;
    } else {
        chaser.facing = Facing::from_sign(dx);
        let speed = if dx.abs() < chaser.run_distance {
            chaser.run_speed
        } else {
            chaser.move_speed
        };

        if senses.grounded
            && !has_ground_ahead(&aabb, chaser.facing, blocks, envelope.ledge_probe_distance)
        {
            let landing = chaser
                .can_leap()
                .then(|| find_landing_block(&aabb, chaser.facing, blocks, &envelope, -MAX_LEAP_DROP))
                .flatten();

            match landing {
                Some(block) => {
                    let facing = chaser.facing;
                    start_leap(chaser, velocity, facing, block);
                    return ChaserMode::Leaping;
                }
                None => {
                    chaser.facing = chaser.facing.reversed();
                    velocity.x = 0.0;
                    return ChaserMode::Chase;
                }
            }
        }

        velocity.x = chaser.facing.sign() * speed;
    }

    if dy < -CLIMB_TRIGGER && senses.grounded && chaser.can_leap() {
        // Only platforms above the feet are worth climbing toward
        if let Some(block) = find_landing_block(&aabb, chaser.facing, blocks, &envelope, 0.0) {
            let facing = chaser.facing;
            start_leap(chaser, velocity, facing, block);
            return ChaserMode::Leaping;
        }
    }

    ChaserMode::Chase
}

#[allow(clippy::type_complexity)]
pub(crate) fn update_chasers(
    geometry: Res<LevelGeometry>,
    player_query: Query<&Position, (With<Player>, Without<Dead>)>,
    mut chaser_query: Query<
        (
            &Position,
            &Body,
            &Grounded,
            &Knockback,
            &mut Velocity,
            &mut Chaser,
        ),
        (With<Hostile>, Without<Dead>, Without<Player>),
    >,
) {
    let player = player_query.iter().next().map(|position| position.0);

    for (position, body, grounded, knockback, mut velocity, mut chaser) in &mut chaser_query {
        let senses = ChaserSenses {
            position: position.0,
            body: *body,
            grounded: grounded.0,
            knocked_back: knockback.is_active(),
        };

        let mode = steer_chaser(&mut chaser, senses, &mut velocity.0, player, &geometry.blocks);
        if mode != chaser.mode {
            debug!("Chaser mode {:?} -> {:?}", chaser.mode, mode);
            chaser.mode = mode;
        }
    }
}
