//! Level domain: level documents, world geometry and level swaps.

mod data;
mod loader;
mod resources;
mod spawn;
mod systems;


pub use data::{
    Block, BlockDef, BlockKind, BlockKindDef, HostileDef, HostileKind, HostileSpawn, Level,
    LevelDef, PointDef,
};
pub use loader::{LevelLoadError, parse_level, read_level_file};
pub use resources::{
    ActiveLevel, ActiveLevelInfo, LevelGeometry, LevelLoadQueue, PendingLevelLoad,
    TransitionLatch,
};
pub use spawn::{PreparedLevel, prepare_level};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::level::systems::apply_queued_level_loads;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelGeometry>()
            .init_resource::<ActiveLevel>()
            .init_resource::<LevelLoadQueue>()
            .init_resource::<TransitionLatch>()
            .add_systems(Update, apply_queued_level_loads.in_set(FrameSet::Load));
    }
}
