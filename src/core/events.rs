//! Core domain: messages raised by the simulation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Which kind of entity an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRole {
    Player,
    Chaser,
    Phantom,
}

/// Event fired when the player touches a transition block
#[derive(Debug, Clone)]
pub struct PhaseTransitionEvent {
    pub from_level: u32,
    pub next_phase: u32,
}

impl Message for PhaseTransitionEvent {}

/// Event fired once when an entity becomes dead
#[derive(Debug, Clone)]
pub struct EntityDiedEvent {
    pub entity: Entity,
    pub role: EntityRole,
}

impl Message for EntityDiedEvent {}

#[derive(Debug, Clone)]
pub struct LevelLoadedEvent {
    pub id: u32,
    pub name: String,
}

impl Message for LevelLoadedEvent {}

#[derive(Debug, Clone)]
pub struct LevelLoadFailedEvent {
    pub reason: String,
}

impl Message for LevelLoadFailedEvent {}
