use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

use super::require_positive;

/// Decision-interval/physics-tick timing (spec §6 `simulation`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub decision_interval_seconds: f64,
    pub physics_tick_rate_seconds: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            decision_interval_seconds: 15.0,
            physics_tick_rate_seconds: 0.1,
        }
    }
}

impl SimulationConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        require_positive(
            "simulation.decision_interval_seconds",
            self.decision_interval_seconds,
            violations,
        );
        require_positive(
            "simulation.physics_tick_rate_seconds",
            self.physics_tick_rate_seconds,
            violations,
        );
        if self.physics_tick_rate_seconds > self.decision_interval_seconds {
            violations.push(FieldViolation {
                field_path: "simulation.physics_tick_rate_seconds".to_string(),
                constraint: "<= simulation.decision_interval_seconds".to_string(),
                actual_value: self.physics_tick_rate_seconds.to_string(),
            });
        }
    }
}
