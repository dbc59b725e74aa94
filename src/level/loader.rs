//! Level domain: JSON parsing and validation.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::data::{Block, BlockDef, BlockKind, BlockKindDef, HostileSpawn, Level, LevelDef};
use crate::content::ConfigError;

/// Error type for level loading failures. The previous level stays active.
#[derive(Debug)]
pub enum LevelLoadError {
    Io { path: String, message: String },
    Parse { message: String },
    InvalidField { field: String, message: String },
    Config(ConfigError),
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelLoadError::Io { path, message } => {
                write!(f, "Failed to read level {}: {}", path, message)
            }
            LevelLoadError::Parse { message } => write!(f, "Malformed level data: {}", message),
            LevelLoadError::InvalidField { field, message } => {
                write!(f, "Invalid level field '{}': {}", field, message)
            }
            LevelLoadError::Config(err) => write!(f, "Level rejected by tuning: {}", err),
        }
    }
}

impl std::error::Error for LevelLoadError {}

impl From<ConfigError> for LevelLoadError {
    fn from(err: ConfigError) -> Self {
        LevelLoadError::Config(err)
    }
}

pub fn read_level_file(path: &Path) -> Result<String, LevelLoadError> {
    fs::read_to_string(path).map_err(|e| LevelLoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parse and validate a level document.
pub fn parse_level(json: &str) -> Result<Level, LevelLoadError> {
    let def: LevelDef = serde_json::from_str(json).map_err(|e| LevelLoadError::Parse {
        message: e.to_string(),
    })?;
    build_level(def)
}

fn check_finite(field: impl FnOnce() -> String, value: f32) -> Result<(), LevelLoadError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LevelLoadError::InvalidField {
            field: field(),
            message: format!("expected a finite number, got {}", value),
        })
    }
}

fn build_block(index: usize, def: BlockDef) -> Result<Block, LevelLoadError> {
    let field = |name: &str| format!("blocks[{}].{}", index, name);

    check_finite(|| field("x"), def.x)?;
    check_finite(|| field("y"), def.y)?;
    check_finite(|| field("width"), def.width)?;
    check_finite(|| field("height"), def.height)?;

    if def.width <= 0.0 || def.height <= 0.0 {
        return Err(LevelLoadError::InvalidField {
            field: field("width"),
            message: format!("block size must be positive, got {}x{}", def.width, def.height),
        });
    }

    let kind = match def.kind {
        BlockKindDef::Solid => BlockKind::Solid,
        BlockKindDef::Hazard => BlockKind::Hazard,
        BlockKindDef::Transition => {
            let next_phase = def.next_phase.ok_or_else(|| LevelLoadError::InvalidField {
                field: field("nextPhase"),
                message: "transition blocks must name the next phase".to_string(),
            })?;
            BlockKind::Transition { next_phase }
        }
    };

    Ok(Block {
        x: def.x,
        y: def.y,
        width: def.width,
        height: def.height,
        kind,
        color: def.color,
    })
}

fn build_level(def: LevelDef) -> Result<Level, LevelLoadError> {
    check_finite(|| "worldWidth".to_string(), def.world_width)?;
    check_finite(|| "playerSpawn.x".to_string(), def.player_spawn.x)?;
    check_finite(|| "playerSpawn.y".to_string(), def.player_spawn.y)?;
    if let Some(safe) = def.safe_point {
        check_finite(|| "safePoint.x".to_string(), safe.x)?;
        check_finite(|| "safePoint.y".to_string(), safe.y)?;
    }

    let blocks = def
        .blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| build_block(index, block))
        .collect::<Result<Vec<_>, _>>()?;

    let mut hostiles = Vec::with_capacity(def.hostiles.len());
    for (index, hostile) in def.hostiles.into_iter().enumerate() {
        check_finite(|| format!("hostiles[{}].x", index), hostile.x)?;
        check_finite(|| format!("hostiles[{}].y", index), hostile.y)?;
        hostiles.push(HostileSpawn {
            position: Vec2::new(hostile.x, hostile.y),
            kind: hostile.kind,
        });
    }

    Ok(Level {
        id: def.id,
        name: def.name,
        world_width: def.world_width,
        player_spawn: def.player_spawn.to_vec2(),
        safe_point: def.safe_point.map(|p| p.to_vec2()),
        blocks,
        hostiles,
    })
}
