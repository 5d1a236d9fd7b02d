//! Duel configuration.
//!
//! One struct per section, each deriving `Serialize`/`Deserialize` and
//! carrying a reference `Default`, the way hyperion's `config.rs` and
//! `config/simulation.rs` lay out `GameConfig`/`SimulationConfig`. Loading
//! is YAML via `serde_yaml`, matching hyperion's
//! `GameConfig::load_from_directory`; validation aggregates every
//! violation instead of bailing out on the first (spec §7).

mod arena;
mod movement;
mod phaser;
mod rotation;
mod ship;
mod simulation;
mod torpedo;

pub use arena::ArenaConfig;
pub use movement::MovementConfig;
pub use phaser::{PhaserConfig, PhaserModeConfig};
pub use rotation::RotationConfig;
pub use ship::ShipConfig;
pub use simulation::SimulationConfig;
pub use torpedo::TorpedoConfig;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FieldViolation};

/// The full, immutable-for-a-match configuration document (spec §6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelConfig {
    pub simulation: SimulationConfig,
    pub ship: ShipConfig,
    pub rotation: RotationConfig,
    pub movement: MovementConfig,
    pub phaser: PhaserConfig,
    pub torpedo: TorpedoConfig,
    pub arena: ArenaConfig,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            ship: ShipConfig::default(),
            rotation: RotationConfig::default(),
            movement: MovementConfig::default(),
            phaser: PhaserConfig::default(),
            torpedo: TorpedoConfig::default(),
            arena: ArenaConfig::default(),
        }
    }
}

impl DuelConfig {
    /// Load and validate a configuration document from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: DuelConfig =
            serde_yaml::from_str(&text).map_err(|e| ConfigError::Io(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every constraint in spec §6, collecting *all* violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut violations = Vec::new();

        self.simulation.validate(&mut violations);
        self.ship.validate(&mut violations);
        self.rotation.validate(&mut violations);
        self.movement.validate(&mut violations);
        self.phaser.validate(&mut violations);
        self.torpedo.validate(&mut violations);
        self.arena.validate(&mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }

    /// `round(decision_interval / physics_tick)`, per spec §3.
    pub fn substep_count(&self) -> u64 {
        (self.simulation.decision_interval_seconds / self.simulation.physics_tick_rate_seconds)
            .round() as u64
    }
}

pub(crate) fn require_positive(path: &str, value: f64, violations: &mut Vec<FieldViolation>) {
    if !(value > 0.0) {
        violations.push(FieldViolation {
            field_path: path.to_string(),
            constraint: "> 0".to_string(),
            actual_value: value.to_string(),
        });
    }
}

pub(crate) fn require_non_negative(path: &str, value: f64, violations: &mut Vec<FieldViolation>) {
    if !(value >= 0.0) {
        violations.push(FieldViolation {
            field_path: path.to_string(),
            constraint: ">= 0".to_string(),
            actual_value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DuelConfig::default().validate().is_ok());
    }

    #[test]
    fn default_substep_count_matches_spec_example() {
        // 15s decision interval / 0.1s tick = 150 substeps.
        assert_eq!(DuelConfig::default().substep_count(), 150);
    }

    #[test]
    fn serialization_round_trips() {
        let config = DuelConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: DuelConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn invalid_config_reports_every_violation() {
        let mut config = DuelConfig::default();
        config.simulation.decision_interval_seconds = -1.0;
        config.ship.starting_shields = 0;
        let err = config.validate().unwrap_err();
        match err {
            ConfigError::Invalid(violations) => assert!(violations.len() >= 2),
            _ => panic!("expected Invalid"),
        }
    }
}
