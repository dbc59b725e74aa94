//! Combat domain: AI system modules for chasers and phantoms.

pub(crate) mod chaser;
pub(crate) mod phantom;
pub(crate) mod probe;

pub(crate) use chaser::update_chasers;
pub(crate) use phantom::update_phantoms;
