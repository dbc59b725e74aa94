//! Movement domain: axis-aligned resolution against static blocks.

use bevy::prelude::*;

use crate::geometry::Face;
use crate::level::{Block, BlockKind};
use crate::movement::Body;

/// Who is being resolved. Only the player reacts to transition blocks;
/// hostiles pass through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    Player,
    Hostile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOutcome {
    pub grounded: bool,
    /// Phase requested by the first transition block touched
    pub transition: Option<u32>,
    pub hazard_contact: bool,
}

fn moving_into(face: Face, velocity: Vec2) -> bool {
    match face {
        Face::Top => velocity.y > 0.0,
        Face::Bottom => velocity.y < 0.0,
        Face::Left => velocity.x > 0.0,
        Face::Right => velocity.x < 0.0,
    }
}

/// Push `position` out of every overlapping block, in block order.
///
/// The box is rebuilt from the current position for each block, so a
/// correction made against one block is visible to the next. Of the faces
/// with the least penetration, the first (top, bottom, left, right) that the
/// body moves into is corrected; an overlap with none is left alone.
pub fn resolve_against_blocks(
    body: &Body,
    position: &mut Vec2,
    velocity: &mut Vec2,
    blocks: &[Block],
    mode: CollisionMode,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    for block in blocks {
        let aabb = body.aabb(*position);
        let block_aabb = block.aabb();
        if !aabb.overlaps(&block_aabb) {
            continue;
        }

        match (block.kind, mode) {
            (BlockKind::Transition { next_phase }, CollisionMode::Player) => {
                outcome.transition = Some(next_phase);
                return outcome;
            }
            (BlockKind::Transition { .. }, CollisionMode::Hostile) => continue,
            (BlockKind::Hazard, _) => outcome.hazard_contact = true,
            (BlockKind::Solid, _) => {}
        }

        // Tied faces fall through until one is being moved into
        let overlaps = aabb.overlaps_with(&block_aabb);
        let face = overlaps
            .minimal_faces()
            .find(|&face| moving_into(face, *velocity));

        match face {
            Some(Face::Top) => {
                position.y = block_aabb.top - body.height;
                velocity.y = 0.0;
                outcome.grounded = true;
            }
            Some(Face::Bottom) => {
                position.y = block_aabb.bottom;
                velocity.y = 0.0;
            }
            Some(Face::Left) => {
                position.x = block_aabb.left - body.width;
                velocity.x = 0.0;
            }
            Some(Face::Right) => {
                position.x = block_aabb.right;
                velocity.x = 0.0;
            }
            None => {}
        }
    }

    outcome
}
