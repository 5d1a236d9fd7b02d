use serde::{Deserialize, Serialize};

use crate::domain::Rotation;
use crate::error::FieldViolation;

use super::require_non_negative;

/// Turn rates and their AE cost (spec §6 `rotation`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub soft_turn_degrees_per_second: f64,
    pub hard_turn_degrees_per_second: f64,
    pub none_ae_per_second: f64,
    pub soft_ae_per_second: f64,
    pub hard_ae_per_second: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            // Matches spec.md §8's worked scenarios: SOFT_LEFT for a full
            // 15s decision interval turns 15°; HARD_RIGHT turns 45°.
            soft_turn_degrees_per_second: 1.0,
            hard_turn_degrees_per_second: 3.0,
            none_ae_per_second: 0.0,
            soft_ae_per_second: 0.5,
            hard_ae_per_second: 1.5,
        }
    }
}

impl RotationConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        require_non_negative(
            "rotation.soft_turn_degrees_per_second",
            self.soft_turn_degrees_per_second,
            violations,
        );
        require_non_negative(
            "rotation.hard_turn_degrees_per_second",
            self.hard_turn_degrees_per_second,
            violations,
        );
        require_non_negative("rotation.none_ae_per_second", self.none_ae_per_second, violations);
        require_non_negative("rotation.soft_ae_per_second", self.soft_ae_per_second, violations);
        require_non_negative("rotation.hard_ae_per_second", self.hard_ae_per_second, violations);
    }

    /// Rotation rate in radians/second, signed (positive = counter-clockwise).
    pub fn rate_radians_per_second(&self, rotation: Rotation) -> f64 {
        let degrees = match rotation {
            Rotation::None => 0.0,
            Rotation::SoftLeft => self.soft_turn_degrees_per_second,
            Rotation::SoftRight => -self.soft_turn_degrees_per_second,
            Rotation::HardLeft => self.hard_turn_degrees_per_second,
            Rotation::HardRight => -self.hard_turn_degrees_per_second,
        };
        degrees.to_radians()
    }

    /// AE cost per second for holding a rotation command.
    pub fn ae_cost_per_second(&self, rotation: Rotation) -> f64 {
        match rotation {
            Rotation::None => self.none_ae_per_second,
            Rotation::SoftLeft | Rotation::SoftRight => self.soft_ae_per_second,
            Rotation::HardLeft | Rotation::HardRight => self.hard_ae_per_second,
        }
    }
}
