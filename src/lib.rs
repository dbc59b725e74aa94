//! Frame-stepped simulation core of a 2D side-scrolling platformer.
//!
//! One `App::update` is one simulation frame. World space is screen-like
//! (`+y` down, positions are top-left corners), velocities are in units per
//! frame and every timer counts frames.

pub mod animation;
pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod geometry;
pub mod level;
pub mod movement;

#[cfg(test)]
mod testing;

use bevy::prelude::*;
use std::path::PathBuf;

pub use crate::core::{FrameInput, HorizontalIntent, OutboundEvents, SimEvent, step_frame};

/// Every simulation domain. Add after `MinimalPlugins` (or none, in tests).
#[derive(Default)]
pub struct SimulationPlugin {
    /// RON tuning file; built-in defaults when `None`
    pub config_path: Option<PathBuf>,
}

impl SimulationPlugin {
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            content::ContentPlugin {
                config_path: self.config_path.clone(),
            },
            core::CorePlugin,
            level::LevelPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            animation::AnimationPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
