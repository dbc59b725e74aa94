//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod integrate;

pub(crate) use input::apply_player_input;
pub(crate) use integrate::{integrate_hostiles, integrate_player};
