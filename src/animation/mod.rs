//! Animation domain: visual state selection and crossfade progress.
//!
//! The simulation only tracks which pose an entity shows and how far a
//! crossfade toward the next pose has advanced; drawing is left to the
//! presentation layer.


use bevy::prelude::*;

use crate::combat::Dead;
use crate::core::SimulationSet;
use crate::movement::Velocity;

/// `|vx|` below this shows the idle pose
pub const IDLE_SPEED_THRESHOLD: f32 = 0.5;
/// Blend gained per frame while a crossfade runs
pub const CROSSFADE_STEP: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualKind {
    #[default]
    Idle,
    MovingLeft,
    MovingRight,
}

impl VisualKind {
    pub fn for_velocity(vx: f32) -> Self {
        if vx.abs() < IDLE_SPEED_THRESHOLD {
            VisualKind::Idle
        } else if vx < 0.0 {
            VisualKind::MovingLeft
        } else {
            VisualKind::MovingRight
        }
    }
}

/// Pose shown now, pose being faded toward, and the fade progress in `[0, 1]`.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct VisualState {
    pub current: VisualKind,
    pub target: VisualKind,
    pub blend: f32,
}

impl VisualState {
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Retarget and advance the crossfade by one frame.
    /// Returns true on the frame the new pose takes over.
    pub fn advance(&mut self, target: VisualKind, step: f32) -> bool {
        self.target = target;

        if self.is_settled() {
            self.blend = 0.0;
            return false;
        }

        self.blend += step;
        if self.blend >= 1.0 {
            self.current = self.target;
            self.blend = 0.0;
            return true;
        }
        false
    }
}

pub(crate) fn update_visual_states(
    mut query: Query<(Entity, &Velocity, &mut VisualState), Without<Dead>>,
) {
    for (entity, velocity, mut visual) in &mut query {
        let target = VisualKind::for_velocity(velocity.0.x);
        if visual.advance(target, CROSSFADE_STEP) {
            debug!("{:?} visual state -> {:?}", entity, visual.current);
        }
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_visual_states.in_set(SimulationSet::Timers),
        );
    }
}
