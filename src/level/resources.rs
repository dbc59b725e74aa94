//! Level domain: world geometry, active level metadata and the load queue.

use bevy::prelude::*;
use std::collections::VecDeque;

use super::data::Block;

/// Blocks of the active level, in file order
#[derive(Resource, Debug, Default)]
pub struct LevelGeometry {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveLevelInfo {
    pub id: u32,
    pub name: String,
    pub world_width: f32,
    pub player_spawn: Vec2,
    pub safe_point: Option<Vec2>,
}

/// Metadata of the level currently applied, `None` before the first load
#[derive(Resource, Debug, Default)]
pub struct ActiveLevel {
    pub current: Option<ActiveLevelInfo>,
}

impl ActiveLevel {
    pub fn id(&self) -> Option<u32> {
        self.current.as_ref().map(|info| info.id)
    }

    /// Right world bound, 0 when unbounded
    pub fn world_width(&self) -> f32 {
        self.current.as_ref().map_or(0.0, |info| info.world_width)
    }

    /// Where a fallen player reappears
    pub fn safe_point(&self, fallback: Vec2) -> Vec2 {
        self.current
            .as_ref()
            .and_then(|info| info.safe_point)
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone)]
pub struct PendingLevelLoad {
    /// Where the document came from, for logs
    pub source: String,
    pub json: String,
}

/// Level documents waiting to be applied at the start of the next frame.
#[derive(Resource, Debug, Default)]
pub struct LevelLoadQueue {
    pending: VecDeque<PendingLevelLoad>,
}

impl LevelLoadQueue {
    pub fn request(&mut self, source: impl Into<String>, json: impl Into<String>) {
        self.pending.push_back(PendingLevelLoad {
            source: source.into(),
            json: json.into(),
        });
    }

    pub fn pop(&mut self) -> Option<PendingLevelLoad> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Edge trigger for transition blocks: one request per contact.
#[derive(Resource, Debug)]
pub struct TransitionLatch {
    pub armed: bool,
}

impl Default for TransitionLatch {
    fn default() -> Self {
        Self { armed: true }
    }
}
