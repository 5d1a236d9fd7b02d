use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

use super::require_positive;

/// Torpedo launch, flight, and blast parameters (spec §6 `torpedo`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorpedoConfig {
    pub launch_cost_ae: f64,
    pub max_ae_capacity: f64,
    pub speed_units_per_second: f64,
    pub max_active_per_ship: u32,
    pub blast_damage_multiplier: f64,
    pub fuel_burn_per_second: f64,
    pub expansion_duration_seconds: f64,
    pub persistence_duration_seconds: f64,
    pub dissipation_duration_seconds: f64,
    pub max_radius_units: f64,
}

impl Default for TorpedoConfig {
    fn default() -> Self {
        Self {
            launch_cost_ae: 20.0,
            max_ae_capacity: 15.0,
            speed_units_per_second: 8.0,
            max_active_per_ship: 3,
            blast_damage_multiplier: 2.0,
            fuel_burn_per_second: 1.0,
            expansion_duration_seconds: 5.0,
            persistence_duration_seconds: 2.0,
            dissipation_duration_seconds: 5.0,
            max_radius_units: 12.0,
        }
    }
}

impl TorpedoConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        require_positive("torpedo.launch_cost_ae", self.launch_cost_ae, violations);
        require_positive("torpedo.max_ae_capacity", self.max_ae_capacity, violations);
        require_positive(
            "torpedo.speed_units_per_second",
            self.speed_units_per_second,
            violations,
        );
        if !(self.max_active_per_ship > 0) {
            violations.push(FieldViolation {
                field_path: "torpedo.max_active_per_ship".to_string(),
                constraint: "> 0".to_string(),
                actual_value: self.max_active_per_ship.to_string(),
            });
        }
        require_positive(
            "torpedo.blast_damage_multiplier",
            self.blast_damage_multiplier,
            violations,
        );
        require_positive(
            "torpedo.fuel_burn_per_second",
            self.fuel_burn_per_second,
            violations,
        );
        require_positive(
            "torpedo.expansion_duration_seconds",
            self.expansion_duration_seconds,
            violations,
        );
        require_positive(
            "torpedo.persistence_duration_seconds",
            self.persistence_duration_seconds,
            violations,
        );
        require_positive(
            "torpedo.dissipation_duration_seconds",
            self.dissipation_duration_seconds,
            violations,
        );
        require_positive("torpedo.max_radius_units", self.max_radius_units, violations);
    }
}
