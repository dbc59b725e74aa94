//! Combat domain: chaser and phantom spawning helpers.

use bevy::prelude::*;

use crate::animation::VisualState;
use crate::combat::components::{
    Chaser, DamageFlash, DamageImmune, Health, Hostile, Knockback, Phantom,
};
use crate::combat::resources::{ChaserTuning, PhantomTuning};
use crate::movement::{Body, Grounded, Position, SimEntity, Velocity};

/// Bundle for spawning a ground-bound chaser
#[derive(Bundle)]
pub struct ChaserBundle {
    pub hostile: Hostile,
    pub sim_entity: SimEntity,
    pub chaser: Chaser,
    pub health: Health,
    pub flash: DamageFlash,
    pub knockback: Knockback,
    pub position: Position,
    pub velocity: Velocity,
    pub body: Body,
    pub grounded: Grounded,
    pub visual: VisualState,
}

impl ChaserBundle {
    /// `chaser` is a validated template, see [`Chaser::from_tuning`]
    pub fn new(chaser: Chaser, tuning: &ChaserTuning, position: Vec2) -> Self {
        Self {
            hostile: Hostile,
            sim_entity: SimEntity,
            chaser,
            health: Health::new(tuning.max_health),
            flash: DamageFlash::default(),
            knockback: Knockback::default(),
            position: Position(position),
            velocity: Velocity::default(),
            body: Body::new(tuning.width, tuning.height),
            grounded: Grounded::default(),
            visual: VisualState::default(),
        }
    }
}

/// Bundle for spawning a phasing boss-class hostile
#[derive(Bundle)]
pub struct PhantomBundle {
    pub hostile: Hostile,
    pub sim_entity: SimEntity,
    pub phantom: Phantom,
    pub immune: DamageImmune,
    pub health: Health,
    pub position: Position,
    pub velocity: Velocity,
    pub body: Body,
    pub visual: VisualState,
}

impl PhantomBundle {
    pub fn new(phantom: Phantom, tuning: &PhantomTuning, position: Vec2) -> Self {
        Self {
            hostile: Hostile,
            sim_entity: SimEntity,
            phantom,
            immune: DamageImmune,
            health: Health::new(1),
            position: Position(position),
            velocity: Velocity::default(),
            body: Body::new(tuning.size, tuning.size),
            visual: VisualState::default(),
        }
    }
}
