//! Level domain: turning a validated level into entities.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::data::{HostileKind, Level};
use super::loader::{LevelLoadError, parse_level};
use crate::combat::{Chaser, ChaserBundle, ChaserTuning, Phantom, PhantomBundle, PhantomTuning};
use crate::movement::{PlayerTuning, spawn_player};

/// Tuning read when a level is populated
#[derive(SystemParam)]
pub(crate) struct SpawnTuning<'w> {
    pub player: Res<'w, PlayerTuning>,
    pub chaser: Res<'w, ChaserTuning>,
    pub phantom: Res<'w, PhantomTuning>,
}

/// A parsed level plus the hostile templates it needs, built before any
/// state is touched so a bad document or bad tuning leaves the world alone.
#[derive(Debug, Clone)]
pub struct PreparedLevel {
    pub level: Level,
    pub chaser: Option<Chaser>,
    pub phantom: Option<Phantom>,
}

pub fn prepare_level(
    json: &str,
    chaser_tuning: &ChaserTuning,
    phantom_tuning: &PhantomTuning,
) -> Result<PreparedLevel, LevelLoadError> {
    let level = parse_level(json)?;
    let wants = |kind| level.hostiles.iter().any(|hostile| hostile.kind == kind);

    let chaser = if wants(HostileKind::Chaser) {
        Some(Chaser::from_tuning(chaser_tuning)?)
    } else {
        None
    };
    let phantom = if wants(HostileKind::Phantom) {
        Some(Phantom::from_tuning(phantom_tuning)?)
    } else {
        None
    };

    Ok(PreparedLevel {
        level,
        chaser,
        phantom,
    })
}

/// Spawn the player and every declared hostile. Returns the player entity.
pub(crate) fn spawn_level_entities(
    commands: &mut Commands,
    prepared: &PreparedLevel,
    tuning: &SpawnTuning,
) -> Entity {
    let level = &prepared.level;
    let player = spawn_player(commands, &tuning.player, level.player_spawn);

    for hostile in &level.hostiles {
        match (hostile.kind, &prepared.chaser, &prepared.phantom) {
            (HostileKind::Chaser, Some(template), _) => {
                commands.spawn(ChaserBundle::new(
                    template.clone(),
                    &tuning.chaser,
                    hostile.position,
                ));
            }
            (HostileKind::Phantom, _, Some(template)) => {
                commands.spawn(PhantomBundle::new(
                    template.clone(),
                    &tuning.phantom,
                    hostile.position,
                ));
            }
            (kind, _, _) => {
                warn!(
                    "No validated {:?} template for level {}, skipping spawn at {}",
                    kind, level.id, hostile.position
                );
            }
        }
    }

    debug!(
        "Spawned {} hostiles for level {}",
        level.hostiles.len(),
        level.id
    );
    player
}
