//! Combat domain: hostiles, their AI, contacts and damage.

mod ai;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use ai::chaser::{ChaserSenses, steer_chaser};
pub use ai::phantom::steer_phantom;
pub use ai::probe::{LEDGE_TOLERANCE, find_landing_block, has_ground_ahead};
pub use components::{
    Chaser, ChaserMode, DamageFlash, DamageImmune, Dead, Health, Hostile, Invulnerable,
    JumpEnvelope, Knockback, Phantom,
};
pub use events::{DamageEvent, DamageKind};
pub use resources::{ChaserTuning, CombatTuning, HazardPolicy, PhantomTuning, RulesConfig};
pub use spawn::{ChaserBundle, PhantomBundle};
pub use systems::{Contact, classify_contact};

use bevy::prelude::*;

use crate::combat::ai::{update_chasers, update_phantoms};
use crate::combat::systems::{
    apply_damage_events, apply_hazard_contact, report_and_prune_dead, resolve_player_contacts,
    tick_combat_timers,
};
use crate::core::SimulationSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<ChaserTuning>()
            .init_resource::<PhantomTuning>()
            .init_resource::<RulesConfig>()
            .add_message::<DamageEvent>()
            .add_systems(
                Update,
                (update_chasers, update_phantoms).in_set(SimulationSet::Steering),
            )
            .add_systems(
                Update,
                (
                    (resolve_player_contacts, apply_hazard_contact),
                    apply_damage_events,
                )
                    .chain()
                    .in_set(SimulationSet::Combat),
            )
            .add_systems(Update, tick_combat_timers.in_set(SimulationSet::Timers))
            .add_systems(Update, report_and_prune_dead.in_set(SimulationSet::Cleanup));
    }
}
