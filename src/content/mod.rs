//! Content domain: tuning document loading, validation and installation.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::SimulationConfig;
pub use loader::{ContentLoadError, load_simulation_config, parse_simulation_config};
pub use validation::{
    ConfigError, validate_chaser, validate_combat, validate_config, validate_phantom,
    validate_physics, validate_player,
};

use bevy::prelude::*;
use std::path::PathBuf;

/// Installs the tuning resources. Without a file, or when the file fails to
/// load or validate, the built-in defaults are used.
#[derive(Default)]
pub struct ContentPlugin {
    pub config_path: Option<PathBuf>,
}

impl ContentPlugin {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    fn resolve_config(&self) -> SimulationConfig {
        let Some(path) = &self.config_path else {
            return SimulationConfig::default();
        };

        let config = match load_simulation_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default tuning", e);
                return SimulationConfig::default();
            }
        };

        let errors = validate_config(&config);
        if errors.is_empty() {
            info!("Loaded simulation tuning from {}", path.display());
            config
        } else {
            for error in &errors {
                warn!("Invalid tuning in {}: {}", path.display(), error);
            }
            SimulationConfig::default()
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        self.resolve_config().insert_into(app);
    }
}
