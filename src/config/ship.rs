use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

use super::{require_non_negative, require_positive};

/// Ship baseline stats (spec §6 `ship`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipConfig {
    pub starting_shields: i64,
    pub starting_ae: f64,
    pub max_ae: f64,
    pub ae_regen_per_second: f64,
    pub base_speed_units_per_second: f64,
    pub collision_damage: f64,
    /// Collision radius used by the collision pipeline; not named directly
    /// in spec §6's table but required to implement spec §4.7, so it lives
    /// alongside the other ship constants rather than as a hidden literal.
    pub collision_radius_units: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            starting_shields: 100,
            starting_ae: 100.0,
            max_ae: 100.0,
            ae_regen_per_second: 2.0,
            base_speed_units_per_second: 3.0,
            collision_damage: 10.0,
            collision_radius_units: 5.0,
        }
    }
}

impl ShipConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        if !(self.starting_shields > 0) {
            violations.push(FieldViolation {
                field_path: "ship.starting_shields".to_string(),
                constraint: "> 0".to_string(),
                actual_value: self.starting_shields.to_string(),
            });
        }
        require_positive("ship.starting_ae", self.starting_ae, violations);
        if self.max_ae < self.starting_ae {
            violations.push(FieldViolation {
                field_path: "ship.max_ae".to_string(),
                constraint: ">= ship.starting_ae".to_string(),
                actual_value: self.max_ae.to_string(),
            });
        }
        require_non_negative(
            "ship.ae_regen_per_second",
            self.ae_regen_per_second,
            violations,
        );
        require_positive(
            "ship.base_speed_units_per_second",
            self.base_speed_units_per_second,
            violations,
        );
        require_non_negative("ship.collision_damage", self.collision_damage, violations);
        require_positive(
            "ship.collision_radius_units",
            self.collision_radius_units,
            violations,
        );
    }
}
