//! Content domain: unit tests for tuning parsing and validation.

use bevy::prelude::*;

use super::{ContentPlugin, parse_simulation_config, validate_chaser, validate_config};
use crate::combat::{ChaserTuning, HazardPolicy, RulesConfig};
use crate::movement::{FallOutPolicy, PhysicsTuning, PlayerTuning};

#[test]
fn test_defaults_are_valid() {
    let config = super::SimulationConfig::default();
    assert!(validate_config(&config).is_empty());
    assert_eq!(config.physics.damping, 0.8);
    assert_eq!(config.player.max_jumps, 5);
}

#[test]
fn test_partial_document_keeps_defaults() {
    let source = r#"(
        player: (max_jumps: 3),
        rules: (transition_requires_clear: true, hazard: Damage(amount: 2)),
        physics: (player_fall_out: Kill),
    )"#;

    let config = parse_simulation_config(source, "inline").expect("config parses");
    assert_eq!(config.player.max_jumps, 3);
    assert_eq!(config.player.jump_velocity, -20.0);
    assert!(config.rules.transition_requires_clear);
    assert_eq!(config.rules.hazard, HazardPolicy::Damage { amount: 2 });
    assert_eq!(config.physics.player_fall_out, FallOutPolicy::Kill);
    assert_eq!(config.chaser.detection_radius, 400.0);
}

#[test]
fn test_malformed_document_reports_file() {
    let err = parse_simulation_config("(player: (max_jumps: \"many\"))", "tuning.ron")
        .expect_err("wrong type must fail");
    assert_eq!(err.file, "tuning.ron");
    assert!(err.to_string().contains("tuning.ron"));
}

#[test]
fn test_chaser_envelope_must_be_positive() {
    let tuning = ChaserTuning {
        max_jump_horizontal: 0.0,
        jump_velocity: 5.0,
        ..default()
    };

    let errors = validate_chaser(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"max_jump_horizontal"));
    assert!(fields.contains(&"jump_velocity"));
}

#[test]
fn test_damping_outside_unit_range_rejected() {
    let mut config = super::SimulationConfig::default();
    config.physics = PhysicsTuning {
        damping: 1.5,
        ..default()
    };

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "physics");
    assert_eq!(errors[0].field, "damping");
}

#[test]
fn test_plugin_without_file_installs_defaults() {
    let mut app = App::new();
    app.add_plugins(ContentPlugin::default());

    assert_eq!(app.world().resource::<PlayerTuning>().run_speed, 4.0);
    assert!(!app.world().resource::<RulesConfig>().transition_requires_clear);
}

#[test]
fn test_plugin_with_missing_file_falls_back() {
    let mut app = App::new();
    app.add_plugins(ContentPlugin::from_file("does/not/exist.ron"));

    assert_eq!(app.world().resource::<ChaserTuning>().max_health, 3);
}
