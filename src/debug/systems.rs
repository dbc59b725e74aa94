//! Debug domain: debug systems for runtime tweaks and diagnostics.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{
    Chaser, ChaserBundle, ChaserTuning, CombatTuning, DamageEvent, DamageKind, Dead, Health,
    Hostile, Invulnerable, Phantom, PhantomBundle, PhantomTuning,
};
use crate::core::{PhaseTransitionEvent, SimulationClock};
use crate::debug::state::{DebugAction, DebugActions, DebugState};
use crate::level::ActiveLevel;
use crate::movement::{Body, JumpCharges, Player, Position};

/// Spawn offsets relative to the player
const CHASER_SPAWN_OFFSET: Vec2 = Vec2::new(200.0, 0.0);
const PHANTOM_SPAWN_OFFSET: Vec2 = Vec2::new(300.0, -200.0);

#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_debug_actions(
    mut commands: Commands,
    mut actions: ResMut<DebugActions>,
    mut debug_state: ResMut<DebugState>,
    (chaser_tuning, phantom_tuning, combat_tuning): (
        Res<ChaserTuning>,
        Res<PhantomTuning>,
        Res<CombatTuning>,
    ),
    level: Res<ActiveLevel>,
    mut transitions: MessageWriter<PhaseTransitionEvent>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut player_query: Query<(&Position, &mut Health), (With<Player>, Without<Dead>)>,
    chaser_query: Query<(Entity, &Position, &Body), (With<Chaser>, Without<Dead>, Without<Player>)>,
) {
    for action in actions.pending.drain(..) {
        let player = player_query.iter_mut().next();

        match action {
            DebugAction::ToggleInvincible => {
                debug_state.invincible = !debug_state.invincible;
                info!("[DEBUG] Invincibility {}", on_off(debug_state.invincible));
            }
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                info!("[DEBUG] Frame diagnostics {}", on_off(debug_state.show_info));
            }
            DebugAction::SpawnChaser => {
                let Some((position, _)) = player else {
                    warn!("[DEBUG] No player to spawn a chaser near");
                    continue;
                };
                match Chaser::from_tuning(&chaser_tuning) {
                    Ok(chaser) => {
                        let at = position.0 + CHASER_SPAWN_OFFSET;
                        commands.spawn(ChaserBundle::new(chaser, &chaser_tuning, at));
                        info!("[DEBUG] Spawned chaser at {}", at);
                    }
                    Err(e) => warn!("[DEBUG] Cannot spawn chaser: {}", e),
                }
            }
            DebugAction::SpawnPhantom => {
                let Some((position, _)) = player else {
                    warn!("[DEBUG] No player to spawn a phantom near");
                    continue;
                };
                match Phantom::from_tuning(&phantom_tuning) {
                    Ok(phantom) => {
                        let at = position.0 + PHANTOM_SPAWN_OFFSET;
                        commands.spawn(PhantomBundle::new(phantom, &phantom_tuning, at));
                        info!("[DEBUG] Spawned phantom at {}", at);
                    }
                    Err(e) => warn!("[DEBUG] Cannot spawn phantom: {}", e),
                }
            }
            DebugAction::FullHeal => {
                if let Some((_, mut health)) = player {
                    health.heal_full();
                    info!("[DEBUG] Player healed to {}", health.max);
                }
            }
            DebugAction::StrikeHostiles => {
                let origin = player.map(|(position, _)| position.0);
                for (entity, position, body) in &chaser_query {
                    let center = body.aabb(position.0).center();
                    let away = match origin {
                        Some(origin) if center.x < origin.x => -1.0,
                        _ => 1.0,
                    };
                    damage_events.write(DamageEvent {
                        source: None,
                        target: entity,
                        amount: 1,
                        kind: DamageKind::Contact,
                        knockback: Some(Vec2::new(
                            away * combat_tuning.hostile_knockback_x,
                            combat_tuning.hostile_knockback_y,
                        )),
                    });
                }
            }
            DebugAction::WarpToPhase(next_phase) => {
                info!("[DEBUG] Warp to phase {}", next_phase);
                transitions.write(PhaseTransitionEvent {
                    from_level: level.id().unwrap_or_default(),
                    next_phase,
                });
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

/// Keep the player untouchable and topped up while invincible
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<(&mut Health, &mut Invulnerable), (With<Player>, Without<Dead>)>,
) {
    if !debug_state.invincible {
        return;
    }

    for (mut health, mut invuln) in &mut player_query {
        invuln.frames = invuln.frames.max(1);

        if health.current < health.max {
            health.heal_full();
        }
    }
}

/// Periodic one-line summary of the simulation
pub(crate) fn log_frame_diagnostics(
    debug_state: Res<DebugState>,
    clock: Res<SimulationClock>,
    player_query: Query<(&Position, &Health, &JumpCharges), (With<Player>, Without<Dead>)>,
    hostile_query: Query<(), (With<Hostile>, Without<Dead>)>,
) {
    if debug_state.info_interval_frames == 0 || clock.frame % debug_state.info_interval_frames != 0
    {
        return;
    }

    let hostiles = hostile_query.iter().count();
    match player_query.iter().next() {
        Some((position, health, charges)) => info!(
            "[DEBUG] frame {}: player at {} hp {}/{} jumps {}/{}, {} hostiles",
            clock.frame,
            position.0,
            health.current,
            health.max,
            charges.remaining,
            charges.max,
            hostiles
        ),
        None => info!(
            "[DEBUG] frame {}: no player, {} hostiles",
            clock.frame, hostiles
        ),
    }
}
