//! Content domain: the tuning document read from `simulation.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{ChaserTuning, CombatTuning, PhantomTuning, RulesConfig};
use crate::movement::{PhysicsTuning, PlayerTuning};

/// Every tunable of the simulation. Missing sections keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsTuning,
    pub player: PlayerTuning,
    pub combat: CombatTuning,
    pub chaser: ChaserTuning,
    pub phantom: PhantomTuning,
    pub rules: RulesConfig,
}

impl SimulationConfig {
    /// Insert each section as its own resource
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.physics)
            .insert_resource(self.player)
            .insert_resource(self.combat)
            .insert_resource(self.chaser)
            .insert_resource(self.phantom)
            .insert_resource(self.rules);
    }
}
