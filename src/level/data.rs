//! Level domain: on-disk level schema and its validated runtime form.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl PointDef {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Level file as written by the editor
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDef {
    pub id: u32,
    pub name: String,
    pub world_width: f32,
    pub player_spawn: PointDef,
    #[serde(default)]
    pub safe_point: Option<PointDef>,
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub hostiles: Vec<HostileDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKindDef {
    Solid,
    Transition,
    Hazard,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BlockKindDef,
    #[serde(default)]
    pub color: Option<String>,
    /// Required for transition blocks
    #[serde(default)]
    pub next_phase: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostileKind {
    #[default]
    Chaser,
    Phantom,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostileDef {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub kind: HostileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Solid,
    /// Touching it as the player requests the given phase
    Transition { next_phase: u32 },
    /// Solid, and reported as hazard contact
    Hazard,
}

/// Static level geometry. Immutable while a frame runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BlockKind,
    pub color: Option<String>,
}

impl Block {
    pub fn solid(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: BlockKind::Solid,
            color: None,
        }
    }

    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_position(Vec2::new(self.x, self.y), self.width, self.height)
    }

    /// Surfaces a grounded hostile can stand on
    pub fn is_walkable(&self) -> bool {
        !matches!(self.kind, BlockKind::Transition { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileSpawn {
    pub position: Vec2,
    pub kind: HostileKind,
}

/// A level that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub world_width: f32,
    pub player_spawn: Vec2,
    pub safe_point: Option<Vec2>,
    pub blocks: Vec<Block>,
    pub hostiles: Vec<HostileSpawn>,
}
