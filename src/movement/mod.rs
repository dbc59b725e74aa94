//! Movement domain: kinematic bodies, the integrator and block collisions.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use bootstrap::spawn_player;
pub use components::{
    Body, Facing, Grounded, JumpCharges, Player, Position, SimEntity, TouchingHazard, Velocity,
};
pub use resources::{FallOutPolicy, PhysicsTuning, PlayerTuning};
pub use systems::collisions::{CollisionMode, ResolveOutcome, resolve_against_blocks};
pub use systems::integrate::{IntegrationStep, integrate_body};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::movement::systems::{apply_player_input, integrate_hostiles, integrate_player};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsTuning>()
            .init_resource::<PlayerTuning>()
            .add_systems(Update, apply_player_input.in_set(SimulationSet::Input))
            .add_systems(
                Update,
                (integrate_player, integrate_hostiles).in_set(SimulationSet::Integrate),
            );
    }
}
