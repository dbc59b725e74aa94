//! Geometry domain: axis-aligned boxes and per-face overlap magnitudes.
//!
//! World space is screen-like: `+y` points down and positions are top-left
//! corners, so a box's `top` is numerically smaller than its `bottom`.


use bevy::prelude::*;

/// Axis-aligned bounding box derived from a position and a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_position(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: position.x,
            right: position.x + width,
            top: position.y,
            bottom: position.y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }

    /// Penetration depths of `self` into `other`, one per face of `other`.
    pub fn overlaps_with(&self, other: &Aabb) -> FaceOverlaps {
        FaceOverlaps {
            top: self.bottom - other.top,
            bottom: other.bottom - self.top,
            left: self.right - other.left,
            right: other.right - self.left,
        }
    }
}

/// Face of the *other* box that an overlap is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    /// Tie-break order
    pub const ORDER: [Face; 4] = [Face::Top, Face::Bottom, Face::Left, Face::Right];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOverlaps {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl FaceOverlaps {
    /// Face with the least penetration. Ties go to the first face in
    /// top, bottom, left, right order.
    pub fn min_face(&self) -> Face {
        let min = self.top.min(self.bottom).min(self.left).min(self.right);

        if self.top == min {
            Face::Top
        } else if self.bottom == min {
            Face::Bottom
        } else if self.left == min {
            Face::Left
        } else {
            Face::Right
        }
    }

    /// Every face sharing the least penetration, in top, bottom, left, right
    /// order. A resolver takes the first one it is moving into.
    pub fn minimal_faces(&self) -> impl Iterator<Item = Face> + '_ {
        let min = self.top.min(self.bottom).min(self.left).min(self.right);

        Face::ORDER
            .into_iter()
            .filter(move |&face| self.get(face) == min)
    }

    pub fn get(&self, face: Face) -> f32 {
        match face {
            Face::Top => self.top,
            Face::Bottom => self.bottom,
            Face::Left => self.left,
            Face::Right => self.right,
        }
    }
}
