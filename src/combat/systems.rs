//! Combat domain: contact resolution, damage application, timers and cleanup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::query::Has;
use bevy::prelude::*;

use crate::combat::components::{
    Chaser, DamageFlash, DamageImmune, Dead, Health, Hostile, Invulnerable, Knockback, Phantom,
};
use crate::combat::events::{DamageEvent, DamageKind};
use crate::combat::resources::{CombatTuning, HazardPolicy, RulesConfig};
use crate::core::{EntityDiedEvent, EntityRole};
use crate::geometry::{Aabb, Face};
use crate::movement::{Body, Player, Position, TouchingHazard, Velocity};

/// How a player-hostile overlap is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player came down on top of the hostile
    Stomp,
    /// Any other overlap; the player is hurt
    Hit,
}

/// Classify an overlap with the player as the moving box. Same face
/// selection and tie-break as block resolution.
pub fn classify_contact(player: &Aabb, player_vy: f32, hostile: &Aabb) -> Option<Contact> {
    if !player.overlaps(hostile) {
        return None;
    }

    if player.overlaps_with(hostile).min_face() == Face::Top && player_vy > 0.0 {
        Some(Contact::Stomp)
    } else {
        Some(Contact::Hit)
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn resolve_player_contacts(
    tuning: Res<CombatTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut player_query: Query<
        (Entity, &Body, &Position, &mut Velocity),
        (With<Player>, Without<Dead>, Without<Hostile>),
    >,
    hostile_query: Query<
        (Entity, &Body, &Position, &Health),
        (With<Hostile>, Without<Dead>, Without<Player>),
    >,
) {
    let Some((player, player_body, player_position, mut player_velocity)) =
        player_query.iter_mut().next()
    else {
        return;
    };
    let player_aabb = player_body.aabb(player_position.0);

    for (hostile, body, position, health) in &hostile_query {
        let hostile_aabb = body.aabb(position.0);
        let Some(contact) = classify_contact(&player_aabb, player_velocity.0.y, &hostile_aabb)
        else {
            continue;
        };

        match contact {
            Contact::Stomp => {
                player_velocity.0.y = tuning.stomp_bounce;
                damage_events.write(DamageEvent {
                    source: Some(player),
                    target: hostile,
                    amount: health.current,
                    kind: DamageKind::Stomp,
                    knockback: None,
                });
                debug!("Player stomped hostile {:?}", hostile);
            }
            Contact::Hit => {
                let away = if player_aabb.center().x < hostile_aabb.center().x {
                    -1.0
                } else {
                    1.0
                };
                damage_events.write(DamageEvent {
                    source: Some(hostile),
                    target: player,
                    amount: tuning.contact_damage,
                    kind: DamageKind::Contact,
                    knockback: Some(Vec2::new(
                        away * tuning.player_knockback_x,
                        tuning.player_knockback_y,
                    )),
                });
            }
        }
    }
}

/// Hazard contact becomes damage according to the level rules.
pub(crate) fn apply_hazard_contact(
    rules: Res<RulesConfig>,
    mut damage_events: MessageWriter<DamageEvent>,
    query: Query<(Entity, &TouchingHazard), (With<Player>, Without<Dead>)>,
) {
    let (amount, kind) = match rules.hazard {
        HazardPolicy::Inert => return,
        HazardPolicy::Damage { amount } => (amount, DamageKind::Hazard),
        HazardPolicy::Lethal => (u32::MAX, DamageKind::Lethal),
    };

    for (entity, touching) in &query {
        if touching.0 {
            damage_events.write(DamageEvent {
                source: None,
                target: entity,
                amount,
                kind,
                knockback: None,
            });
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn apply_damage_events(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut damage_events: MessageReader<DamageEvent>,
    mut targets: Query<
        (
            &mut Health,
            Option<&mut Invulnerable>,
            Option<&mut DamageFlash>,
            Option<&mut Knockback>,
            Option<&mut Velocity>,
            Has<DamageImmune>,
            Has<Player>,
        ),
        Without<Dead>,
    >,
) {
    for event in damage_events.read() {
        let Ok((mut health, invuln, flash, knockback, velocity, immune, is_player)) =
            targets.get_mut(event.target)
        else {
            continue;
        };

        if immune || health.is_dead() {
            continue;
        }

        let gated = !event.kind.bypasses_invulnerability();
        if gated && invuln.as_ref().is_some_and(|i| i.is_invulnerable()) {
            continue;
        }

        let dealt = health.take_damage(event.amount);
        if dealt == 0 {
            continue;
        }

        if health.is_dead() {
            info!("{:?} killed by {:?} damage", event.target, event.kind);
            commands.entity(event.target).insert(Dead);
            continue;
        }

        debug!(
            "{:?} took {} {:?} damage, {}/{} left",
            event.target, dealt, event.kind, health.current, health.max
        );

        let (flash_frames, knockback_frames) = if is_player {
            (tuning.damage_flash_frames, tuning.player_knockback_frames)
        } else {
            (tuning.hostile_flash_frames, tuning.hostile_knockback_frames)
        };

        if let Some(mut invuln) = invuln.filter(|_| gated) {
            invuln.frames = tuning.invulnerability_frames;
        }
        if let Some(mut flash) = flash {
            flash.frames = flash_frames;
        }
        if let (Some(push), Some(mut knockback), Some(mut velocity)) =
            (event.knockback, knockback, velocity)
        {
            velocity.0 = push;
            knockback.frames = knockback_frames;
        }
    }
}

pub(crate) fn tick_combat_timers(
    mut invulnerable: Query<&mut Invulnerable, Without<Dead>>,
    mut flashes: Query<&mut DamageFlash, Without<Dead>>,
    mut knockbacks: Query<&mut Knockback, Without<Dead>>,
    mut chasers: Query<&mut Chaser, Without<Dead>>,
) {
    for mut invuln in &mut invulnerable {
        invuln.frames = invuln.frames.saturating_sub(1);
    }
    for mut flash in &mut flashes {
        flash.frames = flash.frames.saturating_sub(1);
    }
    for mut knockback in &mut knockbacks {
        knockback.frames = knockback.frames.saturating_sub(1);
    }
    for mut chaser in &mut chasers {
        chaser.jump_cooldown = chaser.jump_cooldown.saturating_sub(1);
    }
}

/// Write one death notification per dead entity, then despawn it.
pub(crate) fn report_and_prune_dead(
    mut commands: Commands,
    mut deaths: MessageWriter<EntityDiedEvent>,
    query: Query<(Entity, Has<Player>, Has<Phantom>), With<Dead>>,
) {
    for (entity, is_player, is_phantom) in &query {
        let role = if is_player {
            EntityRole::Player
        } else if is_phantom {
            EntityRole::Phantom
        } else {
            EntityRole::Chaser
        };

        info!("{:?} {:?} died", role, entity);
        deaths.write(EntityDiedEvent { entity, role });
        commands.entity(entity).despawn();
    }
}
