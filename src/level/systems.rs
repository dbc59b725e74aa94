//! Level domain: applying queued level documents.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::resources::{ActiveLevel, ActiveLevelInfo, LevelGeometry, LevelLoadQueue, TransitionLatch};
use super::spawn::{SpawnTuning, prepare_level, spawn_level_entities};
use crate::core::{LevelLoadFailedEvent, LevelLoadedEvent, PAUSE_LOADING, SimulationGate};
use crate::movement::SimEntity;

/// Apply queued level loads. Runs even while the simulation is gated.
///
/// Every document is validated before anything is despawned. When several
/// loads are queued in one frame the last valid one wins.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_queued_level_loads(
    mut commands: Commands,
    mut queue: ResMut<LevelLoadQueue>,
    mut geometry: ResMut<LevelGeometry>,
    mut active: ResMut<ActiveLevel>,
    mut latch: ResMut<TransitionLatch>,
    mut gate: ResMut<SimulationGate>,
    tuning: SpawnTuning,
    existing: Query<Entity, With<SimEntity>>,
    mut loaded: MessageWriter<LevelLoadedEvent>,
    mut failed: MessageWriter<LevelLoadFailedEvent>,
) {
    if queue.is_empty() {
        return;
    }

    let mut accepted = None;
    while let Some(pending) = queue.pop() {
        match prepare_level(&pending.json, &tuning.chaser, &tuning.phantom) {
            Ok(prepared) => {
                if let Some((source, _)) = accepted.replace((pending.source, prepared)) {
                    debug!("Level from {} superseded before it was applied", source);
                }
            }
            Err(e) => {
                warn!("Level load from {} failed: {}", pending.source, e);
                failed.write(LevelLoadFailedEvent {
                    reason: e.to_string(),
                });
            }
        }
    }

    if let Some((source, prepared)) = accepted {
        for entity in &existing {
            commands.entity(entity).despawn();
        }

        spawn_level_entities(&mut commands, &prepared, &tuning);

        let level = prepared.level;
        geometry.blocks = level.blocks;
        active.current = Some(ActiveLevelInfo {
            id: level.id,
            name: level.name.clone(),
            world_width: level.world_width,
            player_spawn: level.player_spawn,
            safe_point: level.safe_point,
        });
        latch.armed = true;

        info!(
            "Loaded level {} '{}' from {} ({} blocks)",
            level.id,
            level.name,
            source,
            geometry.blocks.len()
        );
        loaded.write(LevelLoadedEvent {
            id: level.id,
            name: level.name,
        });
    }

    if active.current.is_some() {
        gate.unpause(PAUSE_LOADING);
    }
}
