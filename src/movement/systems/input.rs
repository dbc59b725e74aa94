//! Movement domain: applying the frame's input snapshot to the player.

use bevy::prelude::*;

use crate::combat::{Dead, Knockback};
use crate::core::FrameInput;
use crate::movement::{Grounded, JumpCharges, Player, PlayerTuning, Velocity};

pub(crate) fn apply_player_input(
    input: Res<FrameInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (&mut Velocity, &mut JumpCharges, &Grounded, Option<&Knockback>),
        (With<Player>, Without<Dead>),
    >,
) {
    for (mut velocity, mut charges, grounded, knockback) in &mut query {
        // Knockback owns horizontal motion until it runs out
        if !knockback.is_some_and(Knockback::is_active) {
            velocity.0.x = input.horizontal.axis() * tuning.run_speed;
        }

        if input.jump_pressed {
            if charges.attempt_jump(grounded.0, &mut velocity.0, tuning.jump_velocity) {
                debug!("Jump: {} of {} charges left", charges.remaining, charges.max);
            } else {
                debug!("Jump refused: no charges left");
            }
        }
    }
}
