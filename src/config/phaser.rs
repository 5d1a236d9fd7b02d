use serde::{Deserialize, Serialize};

use crate::domain::PhaserMode;
use crate::error::FieldViolation;

use super::{require_non_negative, require_positive};

/// A single phaser firing mode (spec §6 `phaser.wide` / `phaser.focused`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaserModeConfig {
    pub arc_degrees: f64,
    pub range_units: f64,
    pub damage: f64,
    pub cooldown_seconds: f64,
}

impl PhaserModeConfig {
    pub(crate) fn validate(&self, prefix: &str, violations: &mut Vec<FieldViolation>) {
        if !(self.arc_degrees > 0.0 && self.arc_degrees <= 360.0) {
            violations.push(FieldViolation {
                field_path: format!("{}.arc_degrees", prefix),
                constraint: "in (0, 360]".to_string(),
                actual_value: self.arc_degrees.to_string(),
            });
        }
        require_positive(&format!("{}.range_units", prefix), self.range_units, violations);
        require_positive(&format!("{}.damage", prefix), self.damage, violations);
        require_non_negative(
            &format!("{}.cooldown_seconds", prefix),
            self.cooldown_seconds,
            violations,
        );
    }
}

/// Both phaser modes (spec §6 `phaser`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaserConfig {
    pub wide: PhaserModeConfig,
    pub focused: PhaserModeConfig,
}

impl Default for PhaserConfig {
    fn default() -> Self {
        Self {
            wide: PhaserModeConfig {
                arc_degrees: 120.0,
                range_units: 60.0,
                damage: 8.0,
                cooldown_seconds: 3.5,
            },
            focused: PhaserModeConfig {
                arc_degrees: 20.0,
                range_units: 100.0,
                damage: 16.0,
                cooldown_seconds: 3.5,
            },
        }
    }
}

impl PhaserConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        self.wide.validate("phaser.wide", violations);
        self.focused.validate("phaser.focused", violations);
    }

    pub fn for_mode(&self, mode: PhaserMode) -> &PhaserModeConfig {
        match mode {
            PhaserMode::Wide => &self.wide,
            PhaserMode::Focused => &self.focused,
        }
    }
}
