//! Core domain: clock, input release and outbound event collection.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{
    EntityDiedEvent, LevelLoadFailedEvent, LevelLoadedEvent, PhaseTransitionEvent,
};
use crate::core::resources::{FrameInput, OutboundEvents, SimEvent, SimulationClock};

pub(crate) fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.frame += 1;
}

/// The jump request is an edge trigger: it lives for exactly one tick.
pub(crate) fn release_frame_input(mut input: ResMut<FrameInput>) {
    input.jump_pressed = false;
}

/// Copy this frame's messages into the queue drained by the driver
pub(crate) fn collect_outbound_events(
    mut transitions: MessageReader<PhaseTransitionEvent>,
    mut deaths: MessageReader<EntityDiedEvent>,
    mut loaded: MessageReader<LevelLoadedEvent>,
    mut failed: MessageReader<LevelLoadFailedEvent>,
    mut outbound: ResMut<OutboundEvents>,
) {
    for event in loaded.read() {
        outbound.push(SimEvent::LevelLoaded {
            id: event.id,
            name: event.name.clone(),
        });
    }

    for event in failed.read() {
        outbound.push(SimEvent::LevelLoadFailed {
            reason: event.reason.clone(),
        });
    }

    for event in transitions.read() {
        info!(
            "Phase transition requested: level {} -> phase {}",
            event.from_level, event.next_phase
        );
        outbound.push(SimEvent::PhaseTransition {
            from_level: event.from_level,
            next_phase: event.next_phase,
        });
    }

    for event in deaths.read() {
        outbound.push(SimEvent::EntityDied {
            entity: event.entity,
            role: event.role,
        });
    }
}
