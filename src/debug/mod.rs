//! Debug/Creative tooling for fast iteration and testing.
//!
//! Features:
//! - Toggle invincibility
//! - Spawn chasers and phantoms near the player
//! - Warp to a phase
//! - Periodic frame diagnostics in the log

mod state;
mod systems;


pub use state::{DebugAction, DebugActions, DebugState};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::debug::systems::{apply_invincibility, handle_debug_actions, log_frame_diagnostics};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .init_resource::<DebugActions>()
            .add_systems(
                Update,
                (handle_debug_actions, apply_invincibility)
                    .chain()
                    .in_set(SimulationSet::Input),
            )
            .add_systems(
                Update,
                log_frame_diagnostics
                    .run_if(|state: Res<DebugState>| state.show_info)
                    .in_set(SimulationSet::Cleanup),
            );
    }
}
