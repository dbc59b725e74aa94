//! Shared helpers for headless simulation tests.

use bevy::prelude::*;
use serde_json::{Value, json};

use crate::SimulationPlugin;
use crate::core::{PAUSE_MENU, SimulationGate};
use crate::level::LevelLoadQueue;
use crate::movement::Player;

pub(crate) fn simulation_app() -> App {
    let mut app = App::new();
    app.add_plugins(SimulationPlugin::default());
    app
}

/// Level document with the given solid blocks `(x, y, width, height)`.
pub(crate) fn level_doc(id: u32, spawn: (f32, f32), blocks: &[(f32, f32, f32, f32)]) -> Value {
    let blocks: Vec<Value> = blocks
        .iter()
        .map(|&(x, y, width, height)| {
            json!({ "x": x, "y": y, "width": width, "height": height, "kind": "solid" })
        })
        .collect();

    json!({
        "id": id,
        "name": format!("Test level {}", id),
        "worldWidth": 0,
        "playerSpawn": { "x": spawn.0, "y": spawn.1 },
        "blocks": blocks,
        "hostiles": [],
    })
}

pub(crate) fn push_block(doc: &mut Value, block: Value) {
    if let Some(blocks) = doc["blocks"].as_array_mut() {
        blocks.push(block);
    }
}

pub(crate) fn push_hostile(doc: &mut Value, x: f32, y: f32, kind: &str) {
    if let Some(hostiles) = doc["hostiles"].as_array_mut() {
        hostiles.push(json!({ "x": x, "y": y, "kind": kind }));
    }
}

/// Apply a level without running a simulation frame.
pub(crate) fn load_level(app: &mut App, doc: &Value) {
    app.world_mut()
        .resource_mut::<SimulationGate>()
        .pause(PAUSE_MENU);
    app.world_mut()
        .resource_mut::<LevelLoadQueue>()
        .request("test", doc.to_string());
    app.update();
    app.world_mut()
        .resource_mut::<SimulationGate>()
        .unpause(PAUSE_MENU);
}

pub(crate) fn player_entity(app: &mut App) -> Option<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.iter(app.world()).next()
}

pub(crate) fn entities_with<T: Component>(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, With<T>>();
    query.iter(app.world()).collect()
}
