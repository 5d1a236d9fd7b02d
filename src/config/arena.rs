use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

use super::require_positive;

/// Arena bounds and spawn layout (spec §6 `arena`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width_units: f64,
    pub height_units: f64,
    pub spawn_distance_units: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width_units: 500.0,
            height_units: 500.0,
            spawn_distance_units: 200.0,
        }
    }
}

impl ArenaConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        require_positive("arena.width_units", self.width_units, violations);
        require_positive("arena.height_units", self.height_units, violations);
        require_positive(
            "arena.spawn_distance_units",
            self.spawn_distance_units,
            violations,
        );
    }
}
