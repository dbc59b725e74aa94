//! Combat domain: unit tests for contacts, damage gating and hostile AI.

use bevy::prelude::*;

use super::{
    Chaser, ChaserBundle, ChaserMode, ChaserSenses, ChaserTuning, CombatPlugin, Contact,
    DamageFlash, Health, HazardPolicy, Invulnerable, JumpEnvelope, Knockback, Phantom,
    PhantomBundle, PhantomTuning, RulesConfig, classify_contact, find_landing_block,
    has_ground_ahead, steer_chaser, steer_phantom,
};
use crate::core::{CorePlugin, EntityRole, FrameInput, OutboundEvents, SimEvent, step_frame};
use crate::geometry::Aabb;
use crate::level::{Block, BlockKind, LevelGeometry};
use crate::movement::{Body, Facing, Player, Position, TouchingHazard, Velocity};
use crate::testing::{level_doc, load_level, player_entity, push_hostile, simulation_app};

// ============================================================================
// Pure helpers
// ============================================================================

fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
    Aabb::from_position(Vec2::new(x, y), w, h)
}

#[test]
fn test_falling_onto_hostile_is_stomp() {
    let player = boxed(100.0, 125.0, 80.0, 120.0);
    let hostile = boxed(110.0, 240.0, 60.0, 60.0);

    assert_eq!(classify_contact(&player, 4.0, &hostile), Some(Contact::Stomp));
    // Same overlap while rising is a hit
    assert_eq!(classify_contact(&player, -4.0, &hostile), Some(Contact::Hit));
}

#[test]
fn test_side_contact_is_hit() {
    let player = boxed(100.0, 180.0, 80.0, 120.0);
    let hostile = boxed(175.0, 240.0, 60.0, 60.0);

    assert_eq!(classify_contact(&player, 4.0, &hostile), Some(Contact::Hit));
    assert_eq!(
        classify_contact(&player, 0.0, &boxed(300.0, 240.0, 60.0, 60.0)),
        None
    );
}

fn envelope() -> JumpEnvelope {
    JumpEnvelope {
        ledge_probe_distance: 10.0,
        max_horizontal: 150.0,
        max_vertical: 100.0,
    }
}

#[test]
fn test_ground_probe_detects_ledge() {
    let platform = [Block::solid(0.0, 300.0, 200.0, 40.0)];

    let middle = boxed(100.0, 240.0, 60.0, 60.0);
    assert!(has_ground_ahead(&middle, Facing::Right, &platform, 10.0));
    assert!(has_ground_ahead(&middle, Facing::Left, &platform, 10.0));

    let at_edge = boxed(131.0, 240.0, 60.0, 60.0);
    assert!(!has_ground_ahead(&at_edge, Facing::Right, &platform, 10.0));
    assert!(has_ground_ahead(&at_edge, Facing::Left, &platform, 10.0));
}

#[test]
fn test_ground_probe_ignores_transition_blocks() {
    let portal =
        [Block::solid(0.0, 300.0, 400.0, 40.0).with_kind(BlockKind::Transition { next_phase: 2 })];
    let chaser = boxed(100.0, 240.0, 60.0, 60.0);
    assert!(!has_ground_ahead(&chaser, Facing::Right, &portal, 10.0));
}

#[test]
fn test_landing_search_respects_envelope() {
    let chaser = boxed(131.0, 240.0, 60.0, 60.0);
    let blocks = [
        Block::solid(0.0, 300.0, 200.0, 40.0),
        // Too narrow: 30 < 0.6 * 60
        Block::solid(220.0, 300.0, 30.0, 40.0),
        // Too high
        Block::solid(260.0, 150.0, 100.0, 40.0),
        Block::solid(300.0, 280.0, 200.0, 40.0),
        Block::solid(320.0, 300.0, 200.0, 40.0),
    ];

    let found = find_landing_block(&chaser, Facing::Right, &blocks, &envelope(), -40.0);
    assert_eq!(found, Some(&blocks[3]));

    // Nothing to the left within reach
    assert_eq!(
        find_landing_block(&chaser, Facing::Left, &blocks, &envelope(), -40.0),
        None
    );

    // Climbing only accepts surfaces above the feet
    let flat = [Block::solid(300.0, 300.0, 200.0, 40.0)];
    assert_eq!(
        find_landing_block(&chaser, Facing::Right, &flat, &envelope(), 0.0),
        None
    );
}

fn test_chaser() -> Chaser {
    Chaser::from_tuning(&ChaserTuning::default()).expect("default tuning is valid")
}

fn senses_at(x: f32) -> ChaserSenses {
    ChaserSenses {
        position: Vec2::new(x, 240.0),
        body: Body::new(60.0, 60.0),
        grounded: true,
        knocked_back: false,
    }
}

#[test]
fn test_chase_leaps_gap_within_reach() {
    let mut chaser = test_chaser();
    let mut velocity = Vec2::ZERO;
    let blocks = [
        Block::solid(0.0, 300.0, 200.0, 40.0),
        Block::solid(300.0, 300.0, 200.0, 40.0),
    ];

    let mode = steer_chaser(
        &mut chaser,
        senses_at(131.0),
        &mut velocity,
        Some(Vec2::new(400.0, 180.0)),
        &blocks,
    );

    assert_eq!(mode, ChaserMode::Leaping);
    assert_eq!(velocity, Vec2::new(chaser.leap_speed, chaser.jump_velocity));
    assert_eq!(chaser.leap, Some(Facing::Right));
    assert_eq!(chaser.jump_cooldown, chaser.jump_cooldown_frames);
}

#[test]
fn test_chase_stops_at_unreachable_gap() {
    let mut chaser = test_chaser();
    let mut velocity = Vec2::new(3.0, 0.0);
    let blocks = [
        Block::solid(0.0, 300.0, 200.0, 40.0),
        Block::solid(400.0, 300.0, 200.0, 40.0),
    ];

    let mode = steer_chaser(
        &mut chaser,
        senses_at(131.0),
        &mut velocity,
        Some(Vec2::new(420.0, 180.0)),
        &blocks,
    );

    assert_eq!(mode, ChaserMode::Chase);
    assert_eq!(velocity.x, 0.0);
    assert_eq!(velocity.y, 0.0, "never jumps blind");
    assert_eq!(chaser.facing, Facing::Left);
}

#[test]
fn test_chaser_holds_leap_until_touchdown() {
    let mut chaser = test_chaser();
    chaser.leap = Some(Facing::Left);
    let mut velocity = Vec2::new(0.0, -5.0);

    let airborne = ChaserSenses {
        grounded: false,
        ..senses_at(100.0)
    };
    let mode = steer_chaser(&mut chaser, airborne, &mut velocity, None, &[]);
    assert_eq!(mode, ChaserMode::Leaping);
    assert_eq!(velocity.x, -chaser.leap_speed);

    let platform = [Block::solid(0.0, 300.0, 400.0, 40.0)];
    let mode = steer_chaser(&mut chaser, senses_at(100.0), &mut velocity, None, &platform);
    assert_eq!(mode, ChaserMode::Patrol);
    assert_eq!(chaser.leap, None);
}

#[test]
fn test_chaser_dead_zone_and_speeds() {
    let platform = [Block::solid(0.0, 300.0, 1000.0, 40.0)];

    let mut chaser = test_chaser();
    let mut velocity = Vec2::ZERO;
    steer_chaser(
        &mut chaser,
        senses_at(300.0),
        &mut velocity,
        Some(Vec2::new(305.0, 180.0)),
        &platform,
    );
    assert_eq!(velocity.x, 0.0);

    steer_chaser(
        &mut chaser,
        senses_at(300.0),
        &mut velocity,
        Some(Vec2::new(200.0, 240.0)),
        &platform,
    );
    assert_eq!(velocity.x, -chaser.run_speed);

    steer_chaser(
        &mut chaser,
        senses_at(300.0),
        &mut velocity,
        Some(Vec2::new(600.0, 240.0)),
        &platform,
    );
    assert_eq!(velocity.x, chaser.move_speed);
}

#[test]
fn test_knockback_suppresses_steering() {
    let mut chaser = test_chaser();
    let mut velocity = Vec2::new(8.0, -10.0);
    let senses = ChaserSenses {
        knocked_back: true,
        ..senses_at(100.0)
    };

    let mode = steer_chaser(
        &mut chaser,
        senses,
        &mut velocity,
        Some(Vec2::new(200.0, 240.0)),
        &[],
    );
    assert_eq!(mode, ChaserMode::Staggered);
    assert_eq!(velocity, Vec2::new(8.0, -10.0));
}

#[test]
fn test_chaser_rejects_bad_envelope() {
    let tuning = ChaserTuning {
        max_jump_vertical: -1.0,
        ..default()
    };
    let err = Chaser::from_tuning(&tuning).expect_err("negative envelope rejected");
    assert_eq!(err.field, "max_jump_vertical");
}

#[test]
fn test_phantom_homes_with_capped_speed() {
    let phantom = Phantom::from_tuning(&PhantomTuning::default()).expect("valid tuning");
    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::ZERO;

    steer_phantom(&phantom, &mut position, &mut velocity, Some(Vec2::new(500.0, 0.0)));
    assert!((position.x - 0.2).abs() < 1e-6);
    assert!((velocity.x - 0.19).abs() < 1e-6);

    for _ in 0..100 {
        steer_phantom(&phantom, &mut position, &mut velocity, Some(Vec2::new(500.0, 0.0)));
        assert!(velocity.length() <= phantom.max_speed + 1e-6);
    }
    assert_eq!(position.y, 0.0);
}

#[test]
fn test_phantom_idle_without_target_or_when_close() {
    let phantom = Phantom::from_tuning(&PhantomTuning::default()).expect("valid tuning");
    let mut position = Vec2::new(10.0, 10.0);
    let mut velocity = Vec2::new(1.0, 0.0);

    steer_phantom(&phantom, &mut position, &mut velocity, None);
    assert_eq!(position, Vec2::new(10.0, 10.0));
    assert_eq!(velocity, Vec2::new(1.0, 0.0));

    // Inside the minimum distance it only drifts and decays
    steer_phantom(&phantom, &mut position, &mut velocity, Some(Vec2::new(15.0, 10.0)));
    assert_eq!(position, Vec2::new(11.0, 10.0));
    assert!((velocity.x - 0.95).abs() < 1e-6);
}

// ============================================================================
// Contact resolution (static positions, no integrator)
// ============================================================================

fn combat_app() -> App {
    let mut app = App::new();
    app.add_plugins((CorePlugin, CombatPlugin))
        .init_resource::<LevelGeometry>();
    app
}

fn spawn_test_player(app: &mut App, position: Vec2, velocity: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Position(position),
            Velocity(velocity),
            Body::new(80.0, 120.0),
            TouchingHazard::default(),
            Health::new(5),
            Invulnerable::default(),
            DamageFlash::default(),
            Knockback::default(),
        ))
        .id()
}

fn spawn_test_chaser(app: &mut App, position: Vec2) -> Entity {
    let tuning = ChaserTuning::default();
    app.world_mut()
        .spawn(ChaserBundle::new(test_chaser(), &tuning, position))
        .id()
}

fn health_of(app: &App, entity: Entity) -> u32 {
    app.world().get::<Health>(entity).expect("health").current
}

#[test]
fn test_contact_hit_gated_by_invulnerability() {
    let mut app = combat_app();
    let player = spawn_test_player(&mut app, Vec2::new(100.0, 180.0), Vec2::ZERO);
    // Overlaps the player's right side by 5 units
    spawn_test_chaser(&mut app, Vec2::new(175.0, 240.0));

    step_frame(&mut app, FrameInput::idle());
    assert_eq!(health_of(&app, player), 4);
    let velocity = app.world().get::<Velocity>(player).expect("velocity").0;
    assert_eq!(velocity, Vec2::new(-8.0, -10.0));
    assert_eq!(app.world().get::<Knockback>(player).expect("knockback").frames, 14);
    assert_eq!(app.world().get::<DamageFlash>(player).expect("flash").frames, 19);

    // Still touching ten frames later: no second decrement
    for _ in 0..10 {
        step_frame(&mut app, FrameInput::idle());
    }
    assert_eq!(health_of(&app, player), 4);

    // Window closes after 90 frames
    for _ in 0..79 {
        step_frame(&mut app, FrameInput::idle());
    }
    assert_eq!(health_of(&app, player), 4);
    step_frame(&mut app, FrameInput::idle());
    assert_eq!(health_of(&app, player), 3);
}

#[test]
fn test_stomp_kills_chaser_and_bounces_player() {
    let mut app = combat_app();
    let player = spawn_test_player(&mut app, Vec2::new(100.0, 125.0), Vec2::new(0.0, 4.0));
    let chaser = spawn_test_chaser(&mut app, Vec2::new(110.0, 240.0));

    step_frame(&mut app, FrameInput::idle());

    assert!(app.world().get_entity(chaser).is_err());
    assert_eq!(health_of(&app, player), 5);
    assert_eq!(
        app.world().get::<Velocity>(player).expect("velocity").0.y,
        -12.0
    );

    let events = app.world_mut().resource_mut::<OutboundEvents>().drain();
    assert_eq!(
        events,
        vec![SimEvent::EntityDied {
            entity: chaser,
            role: EntityRole::Chaser
        }]
    );
}

#[test]
fn test_stomp_on_phantom_bounces_without_damage() {
    let mut app = combat_app();
    let player = spawn_test_player(&mut app, Vec2::new(100.0, 125.0), Vec2::new(0.0, 4.0));
    let tuning = PhantomTuning::default();
    let phantom = Phantom::from_tuning(&tuning).expect("valid tuning");
    let boss = app
        .world_mut()
        .spawn(PhantomBundle::new(phantom, &tuning, Vec2::new(100.0, 240.0)))
        .id();

    step_frame(&mut app, FrameInput::idle());

    assert_eq!(health_of(&app, boss), 1);
    assert_eq!(
        app.world().get::<Velocity>(player).expect("velocity").0.y,
        -12.0
    );
}

#[test]
fn test_lethal_contact_reports_player_death_once() {
    let mut app = combat_app();
    let player = spawn_test_player(&mut app, Vec2::new(100.0, 180.0), Vec2::ZERO);
    app.world_mut()
        .get_mut::<Health>(player)
        .expect("health")
        .current = 1;
    spawn_test_chaser(&mut app, Vec2::new(175.0, 240.0));
    spawn_test_chaser(&mut app, Vec2::new(60.0, 240.0));

    step_frame(&mut app, FrameInput::idle());
    step_frame(&mut app, FrameInput::idle());

    assert!(app.world().get_entity(player).is_err());
    let deaths: Vec<_> = app
        .world_mut()
        .resource_mut::<OutboundEvents>()
        .drain()
        .into_iter()
        .filter(|event| matches!(event, SimEvent::EntityDied { .. }))
        .collect();
    assert_eq!(
        deaths,
        vec![SimEvent::EntityDied {
            entity: player,
            role: EntityRole::Player
        }]
    );
}

#[test]
fn test_hazard_policy_controls_damage() {
    let mut app = combat_app();
    let player = spawn_test_player(&mut app, Vec2::new(100.0, 180.0), Vec2::ZERO);
    app.world_mut()
        .get_mut::<TouchingHazard>(player)
        .expect("hazard flag")
        .0 = true;

    step_frame(&mut app, FrameInput::idle());
    assert_eq!(health_of(&app, player), 5, "inert by default");

    app.insert_resource(RulesConfig {
        hazard: HazardPolicy::Damage { amount: 2 },
        ..default()
    });
    step_frame(&mut app, FrameInput::idle());
    step_frame(&mut app, FrameInput::idle());
    assert_eq!(health_of(&app, player), 3);

    app.insert_resource(RulesConfig {
        hazard: HazardPolicy::Lethal,
        ..default()
    });
    step_frame(&mut app, FrameInput::idle());
    assert!(app.world().get_entity(player).is_err());
}

// ============================================================================
// Navigation in the full simulation
// ============================================================================

fn chaser_position(app: &mut App) -> Option<Vec2> {
    let mut query = app
        .world_mut()
        .query_filtered::<&Position, With<Chaser>>();
    query.iter(app.world()).next().map(|position| position.0)
}

#[test]
fn test_patrolling_chaser_never_walks_off_platform() {
    let mut app = simulation_app();
    // Player parked far outside detection range
    let mut doc = level_doc(
        1,
        (2000.0, 180.0),
        &[(0.0, 300.0, 200.0, 40.0), (1900.0, 300.0, 400.0, 40.0)],
    );
    push_hostile(&mut doc, 100.0, 240.0, "chaser");
    load_level(&mut app, &doc);

    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    for _ in 0..300 {
        step_frame(&mut app, FrameInput::idle());
        let position = chaser_position(&mut app).expect("chaser alive");
        assert!(position.x + 60.0 <= 200.0 + 1e-3, "walked off the right edge");
        assert!(position.x >= -1e-3, "walked off the left edge");
        assert!(position.y <= 240.0 + 1e-3, "fell");
        min_x = min_x.min(position.x);
        max_x = max_x.max(position.x);
    }

    // It turned around at both ends
    assert!(max_x > 120.0);
    assert!(min_x < 20.0);
}

#[test]
fn test_chasing_chaser_stops_at_unreachable_gap() {
    let mut app = simulation_app();
    let mut doc = level_doc(
        1,
        (400.0, 180.0),
        &[(0.0, 300.0, 200.0, 40.0), (380.0, 300.0, 200.0, 40.0)],
    );
    push_hostile(&mut doc, 100.0, 240.0, "chaser");
    load_level(&mut app, &doc);

    for _ in 0..300 {
        step_frame(&mut app, FrameInput::idle());
        let position = chaser_position(&mut app).expect("chaser alive");
        assert!(position.x + 60.0 <= 200.0 + 1e-3);
        assert!(position.y <= 240.0 + 1e-3);
    }
}

#[test]
fn test_chasing_chaser_leaps_to_next_platform() {
    let mut app = simulation_app();
    let mut doc = level_doc(
        1,
        (440.0, 180.0),
        &[(0.0, 300.0, 200.0, 40.0), (300.0, 300.0, 300.0, 40.0)],
    );
    push_hostile(&mut doc, 100.0, 240.0, "chaser");
    load_level(&mut app, &doc);

    let mut landed = false;
    for _ in 0..70 {
        step_frame(&mut app, FrameInput::idle());
        let position = chaser_position(&mut app).expect("chaser alive");
        assert!(position.y <= 240.0 + 1e-3, "fell into the gap");
        if position.x > 200.0 && (position.y - 240.0).abs() < 1e-3 {
            landed = true;
            break;
        }
    }
    assert!(landed);

    let player = player_entity(&mut app).expect("player alive");
    assert_eq!(health_of(&app, player), 5);
}

#[test]
fn test_chaser_climbs_only_toward_a_reachable_ledge() {
    let player_above = Some(Vec2::new(300.0, 100.0));
    let floor = Block::solid(0.0, 300.0, 400.0, 40.0);
    // 30 ahead of the leading edge, top 60 above the feet
    let ledge = Block::solid(190.0, 240.0, 100.0, 20.0);

    let mut chaser = test_chaser();
    let mut velocity = Vec2::ZERO;
    let mode = steer_chaser(
        &mut chaser,
        senses_at(100.0),
        &mut velocity,
        player_above,
        &[floor.clone(), ledge],
    );
    assert_eq!(mode, ChaserMode::Leaping);
    assert_eq!(velocity, Vec2::new(5.0, -15.0));
    assert_eq!(chaser.leap, Some(Facing::Right));

    // Nothing to land on: keep chasing along the floor, no blind jump
    let mut chaser = test_chaser();
    let mut velocity = Vec2::ZERO;
    let mode = steer_chaser(
        &mut chaser,
        senses_at(100.0),
        &mut velocity,
        player_above,
        &[floor],
    );
    assert_eq!(mode, ChaserMode::Chase);
    assert_eq!(velocity, Vec2::new(2.0, 0.0));
    assert_eq!(chaser.leap, None);
}

#[test]
fn test_chaser_climbs_onto_ledge_below_player() {
    let mut app = simulation_app();
    // Player waits on a raised ledge whose top is 80 above the floor
    let doc = {
        let mut doc = level_doc(
            1,
            (300.0, 100.0),
            &[(0.0, 300.0, 1000.0, 40.0), (250.0, 220.0, 200.0, 30.0)],
        );
        push_hostile(&mut doc, 120.0, 240.0, "chaser");
        doc
    };
    load_level(&mut app, &doc);

    let mut climbed = false;
    for _ in 0..40 {
        step_frame(&mut app, FrameInput::idle());
        let position = chaser_position(&mut app).expect("chaser alive");
        if position.x + 60.0 > 250.0 && (position.y - 160.0).abs() < 1e-3 {
            climbed = true;
            break;
        }
    }
    assert!(climbed, "chaser never reached the ledge");
}
