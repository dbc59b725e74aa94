//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether player is invincible
    pub invincible: bool,
    /// Whether to log periodic frame diagnostics
    pub show_info: bool,
    pub info_interval_frames: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            invincible: false,
            show_info: false,
            info_interval_frames: 60,
        }
    }
}

/// Actions that can be requested by a driver or test harness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleInvincible,
    ToggleInfo,
    SpawnChaser,
    SpawnPhantom,
    FullHeal,
    /// Deal one point of damage with knockback to every chaser
    StrikeHostiles,
    /// Request a phase transition as if a transition block was touched
    WarpToPhase(u32),
}

/// Pending debug actions, consumed by the next simulated frame
#[derive(Resource, Debug, Default)]
pub struct DebugActions {
    pub pending: Vec<DebugAction>,
}

impl DebugActions {
    pub fn push(&mut self, action: DebugAction) {
        self.pending.push(action);
    }
}
