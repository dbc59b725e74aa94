//! Core domain: frame gate, per-frame input and the outbound event queue.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::events::EntityRole;

/// Pause source held while a level is being fetched or applied.
pub const PAUSE_LOADING: &str = "loading";
/// Pause source owned by the presentation layer (menus, pause screen).
pub const PAUSE_MENU: &str = "paused";

/// Resource tracking whether the simulation may be stepped.
/// The simulation is gated while any source is active.
#[derive(Resource, Debug, Default)]
pub struct SimulationGate {
    pub sources: HashSet<String>,
}

impl SimulationGate {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn is_paused_by(&self, source: &str) -> bool {
        self.sources.contains(source)
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: true only while no pause source is active
pub fn simulation_active(gate: Res<SimulationGate>) -> bool {
    !gate.is_paused()
}

/// Horizontal steering requested for the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    pub fn axis(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Right => 1.0,
            HorizontalIntent::None => 0.0,
        }
    }
}

/// Input snapshot written by the driver before each tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FrameInput {
    pub horizontal: HorizontalIntent,
    /// Edge trigger, cleared once the tick has consumed it
    pub jump_pressed: bool,
    /// 1.0 normally, [`FrameInput::FAST_FALL_MULTIPLIER`] while fast-falling
    pub gravity_multiplier: f32,
}

impl FrameInput {
    pub const FAST_FALL_MULTIPLIER: f32 = 2.0;

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(horizontal: HorizontalIntent) -> Self {
        Self {
            horizontal,
            ..default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    pub fn with_fast_fall(mut self) -> Self {
        self.gravity_multiplier = Self::FAST_FALL_MULTIPLIER;
        self
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            horizontal: HorizontalIntent::None,
            jump_pressed: false,
            gravity_multiplier: 1.0,
        }
    }
}

/// Number of simulated (non-gated) frames since startup.
#[derive(Resource, Debug, Default)]
pub struct SimulationClock {
    pub frame: u64,
}

/// Outcome notifications handed to the presentation/driver layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    PhaseTransition { from_level: u32, next_phase: u32 },
    EntityDied { entity: Entity, role: EntityRole },
    LevelLoaded { id: u32, name: String },
    LevelLoadFailed { reason: String },
}

/// Queue of [`SimEvent`]s, filled at the end of every frame and drained by
/// the driver.
#[derive(Resource, Debug, Default)]
pub struct OutboundEvents {
    events: Vec<SimEvent>,
}

impl OutboundEvents {
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.events.iter()
    }
}
