//! Core domain: frame ordering, gating, inputs and outbound events.

mod events;
mod resources;
mod systems;


pub use events::{
    EntityDiedEvent, EntityRole, LevelLoadFailedEvent, LevelLoadedEvent, PhaseTransitionEvent,
};
pub use resources::{
    FrameInput, HorizontalIntent, OutboundEvents, PAUSE_LOADING, PAUSE_MENU, SimEvent,
    SimulationClock, SimulationGate, simulation_active,
};

use bevy::prelude::*;

use crate::core::systems::{advance_clock, collect_outbound_events, release_frame_input};

/// Top-level phases of one `App::update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Queued level loads are applied, even while gated
    Load,
    /// The gated simulation step
    Simulate,
    /// Messages are copied to [`OutboundEvents`]
    Outbound,
}

/// Fixed per-frame order of the simulation step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Steering,
    Integrate,
    Combat,
    Timers,
    Cleanup,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationGate>()
            .init_resource::<FrameInput>()
            .init_resource::<OutboundEvents>()
            .init_resource::<SimulationClock>()
            .add_message::<PhaseTransitionEvent>()
            .add_message::<EntityDiedEvent>()
            .add_message::<LevelLoadedEvent>()
            .add_message::<LevelLoadFailedEvent>()
            .configure_sets(
                Update,
                (FrameSet::Load, FrameSet::Simulate, FrameSet::Outbound).chain(),
            )
            .configure_sets(Update, FrameSet::Simulate.run_if(simulation_active))
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Steering,
                    SimulationSet::Integrate,
                    SimulationSet::Combat,
                    SimulationSet::Timers,
                    SimulationSet::Cleanup,
                )
                    .chain()
                    .in_set(FrameSet::Simulate),
            )
            .add_systems(Update, advance_clock.in_set(SimulationSet::Input))
            .add_systems(
                Update,
                (collect_outbound_events, release_frame_input)
                    .chain()
                    .in_set(FrameSet::Outbound),
            );
    }
}

/// Advance the simulation by exactly one frame with the given input.
pub fn step_frame(app: &mut App, input: FrameInput) {
    app.insert_resource(input);
    app.update();
}
