//! Validation for tuning values that would break the simulation.

use super::data::SimulationConfig;
use crate::combat::{ChaserTuning, CombatTuning, PhantomTuning};
use crate::movement::{PhysicsTuning, PlayerTuning};

/// A rejected tuning value with context about where it lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field as f32;
        if !(value.is_finite() && value > 0.0) {
            $errors.push(ConfigError {
                section: $section,
                field: stringify!($field),
                message: format!("must be positive, got {}", value),
            });
        }
    };
}

/// Helper macro for checking a value is finite and strictly negative (upward)
macro_rules! check_upward {
    ($errors:expr, $section:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if !(value.is_finite() && value < 0.0) {
            $errors.push(ConfigError {
                section: $section,
                field: stringify!($field),
                message: format!("must point up (negative), got {}", value),
            });
        }
    };
}

fn check_unit_factor(
    errors: &mut Vec<ConfigError>,
    section: &'static str,
    field: &'static str,
    value: f32,
) {
    if !(value > 0.0 && value <= 1.0) {
        errors.push(ConfigError {
            section,
            field,
            message: format!("must be in (0, 1], got {}", value),
        });
    }
}

pub fn validate_physics(tuning: &PhysicsTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_positive!(errors, "physics", tuning, gravity);
    check_unit_factor(&mut errors, "physics", "damping", tuning.damping);
    check_positive!(errors, "physics", tuning, fall_out_y);
    if tuning.velocity_snap < 0.0 {
        errors.push(ConfigError {
            section: "physics",
            field: "velocity_snap",
            message: format!("must not be negative, got {}", tuning.velocity_snap),
        });
    }
    errors
}

pub fn validate_player(tuning: &PlayerTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_positive!(errors, "player", tuning, width);
    check_positive!(errors, "player", tuning, height);
    check_positive!(errors, "player", tuning, run_speed);
    check_positive!(errors, "player", tuning, max_health);
    check_upward!(errors, "player", tuning, jump_velocity);
    errors
}

pub fn validate_combat(tuning: &CombatTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_positive!(errors, "combat", tuning, contact_damage);
    if tuning.stomp_bounce > 0.0 {
        errors.push(ConfigError {
            section: "combat",
            field: "stomp_bounce",
            message: format!("must not push downward, got {}", tuning.stomp_bounce),
        });
    }
    errors
}

/// Checks applied when a chaser is built from tuning.
pub fn validate_chaser(tuning: &ChaserTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_positive!(errors, "chaser", tuning, width);
    check_positive!(errors, "chaser", tuning, height);
    check_positive!(errors, "chaser", tuning, max_health);
    check_positive!(errors, "chaser", tuning, detection_radius);
    check_positive!(errors, "chaser", tuning, move_speed);
    check_positive!(errors, "chaser", tuning, run_speed);
    check_positive!(errors, "chaser", tuning, patrol_speed);
    check_positive!(errors, "chaser", tuning, leap_speed);
    check_positive!(errors, "chaser", tuning, ledge_probe_distance);
    check_positive!(errors, "chaser", tuning, max_jump_horizontal);
    check_positive!(errors, "chaser", tuning, max_jump_vertical);
    check_upward!(errors, "chaser", tuning, jump_velocity);
    errors
}

pub fn validate_phantom(tuning: &PhantomTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    check_positive!(errors, "phantom", tuning, size);
    check_positive!(errors, "phantom", tuning, detection_radius);
    check_positive!(errors, "phantom", tuning, acceleration);
    check_positive!(errors, "phantom", tuning, max_speed);
    check_unit_factor(&mut errors, "phantom", "decay", tuning.decay);
    errors
}

/// Validate every section. Returns an empty list when the config is usable.
pub fn validate_config(config: &SimulationConfig) -> Vec<ConfigError> {
    let mut errors = validate_physics(&config.physics);
    errors.extend(validate_player(&config.player));
    errors.extend(validate_combat(&config.combat));
    errors.extend(validate_chaser(&config.chaser));
    errors.extend(validate_phantom(&config.phantom));
    errors
}
