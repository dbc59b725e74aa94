//! Combat domain: phasing hostile homing. Ignores level geometry.

use bevy::prelude::*;

use crate::combat::components::{Dead, Hostile, Phantom};
use crate::movement::{Player, Position, Velocity};

/// Accelerate toward `target` (when in range), move, then decay velocity.
/// Without a target the phantom holds still.
pub fn steer_phantom(
    phantom: &Phantom,
    position: &mut Vec2,
    velocity: &mut Vec2,
    target: Option<Vec2>,
) {
    let Some(target) = target else {
        return;
    };

    let to_target = target - *position;
    let distance = to_target.length();
    if distance > phantom.min_distance && distance < phantom.detection_radius {
        *velocity += to_target / distance * phantom.acceleration;
        *velocity = velocity.clamp_length_max(phantom.max_speed);
    }

    *position += *velocity;
    *velocity *= phantom.decay;
}

pub(crate) fn update_phantoms(
    player_query: Query<&Position, (With<Player>, Without<Dead>)>,
    mut phantom_query: Query<
        (&Phantom, &mut Position, &mut Velocity),
        (With<Hostile>, Without<Dead>, Without<Player>),
    >,
) {
    let target = player_query.iter().next().map(|position| position.0);

    for (phantom, mut position, mut velocity) in &mut phantom_query {
        steer_phantom(phantom, &mut position.0, &mut velocity.0, target);
    }
}
