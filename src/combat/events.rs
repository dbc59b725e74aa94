//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Where a damage request came from. Decides invulnerability gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    /// Player landing on a hostile
    Stomp,
    /// Side or underside contact with a hostile
    Contact,
    Hazard,
    /// Removes all remaining health
    Lethal,
}

impl DamageKind {
    pub fn bypasses_invulnerability(self) -> bool {
        matches!(self, DamageKind::Stomp | DamageKind::Lethal)
    }
}

#[derive(Debug, Clone)]
pub struct DamageEvent {
    pub source: Option<Entity>,
    pub target: Entity,
    pub amount: u32,
    pub kind: DamageKind,
    /// Velocity given to the target if the hit lands
    pub knockback: Option<Vec2>,
}

impl Message for DamageEvent {}
