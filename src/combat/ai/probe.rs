//! Combat domain: local terrain probes used by ground-bound hostiles.

use crate::combat::components::JumpEnvelope;
use crate::geometry::Aabb;
use crate::level::{Block, BlockKind};
use crate::movement::Facing;

/// Ground surfaces within this distance of foot level count as walkable
pub const LEDGE_TOLERANCE: f32 = 10.0;
/// Landing blocks closer than this to the leading edge are ignored
pub const MIN_LEAP_GAP: f32 = 20.0;
/// Landing blocks this far below the feet (or more) are ignored
pub const MAX_LEAP_DROP: f32 = 40.0;
/// A landing must be at least this fraction of the leaper's width
pub const MIN_LANDING_WIDTH_RATIO: f32 = 0.6;

/// Whether there is ground just past the leading edge in `facing`.
pub fn has_ground_ahead(aabb: &Aabb, facing: Facing, blocks: &[Block], probe_distance: f32) -> bool {
    let probe_x = match facing {
        Facing::Right => aabb.right + probe_distance,
        Facing::Left => aabb.left - probe_distance,
    };
    let foot = aabb.bottom;

    blocks.iter().filter(|block| block.is_walkable()).any(|block| {
        let surface = block.aabb();
        probe_x >= surface.left
            && probe_x <= surface.right
            && (surface.top - foot).abs() <= LEDGE_TOLERANCE
    })
}

/// First solid block (in level order) a leap in `facing` could land on.
///
/// `min_rise` filters by how far the block top sits above the feet; pass
/// `-MAX_LEAP_DROP` to accept anything the envelope allows.
pub fn find_landing_block<'a>(
    aabb: &Aabb,
    facing: Facing,
    blocks: &'a [Block],
    envelope: &JumpEnvelope,
    min_rise: f32,
) -> Option<&'a Block> {
    let min_rise = min_rise.max(-MAX_LEAP_DROP);

    blocks.iter().find(|block| {
        if block.kind != BlockKind::Solid {
            return false;
        }
        let target = block.aabb();

        let gap = match facing {
            Facing::Right => target.left - aabb.right,
            Facing::Left => aabb.left - target.right,
        };
        let rise = aabb.bottom - target.top;

        (MIN_LEAP_GAP..=envelope.max_horizontal).contains(&gap)
            && rise > min_rise
            && rise < envelope.max_vertical
            && target.width() >= aabb.width() * MIN_LANDING_WIDTH_RATIO
    })
}
