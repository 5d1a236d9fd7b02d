use serde::{Deserialize, Serialize};

use crate::domain::Movement;
use crate::error::FieldViolation;

use super::require_non_negative;

/// AE cost per second for each of the nine movement directions (spec §6 `movement`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    pub forward_ae_per_second: f64,
    pub forward_left_ae_per_second: f64,
    pub left_ae_per_second: f64,
    pub backward_left_ae_per_second: f64,
    pub backward_ae_per_second: f64,
    pub backward_right_ae_per_second: f64,
    pub right_ae_per_second: f64,
    pub forward_right_ae_per_second: f64,
    pub stop_ae_per_second: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            forward_ae_per_second: 1.0,
            forward_left_ae_per_second: 1.2,
            left_ae_per_second: 1.5,
            backward_left_ae_per_second: 1.8,
            backward_ae_per_second: 2.0,
            backward_right_ae_per_second: 1.8,
            right_ae_per_second: 1.5,
            forward_right_ae_per_second: 1.2,
            stop_ae_per_second: 0.0,
        }
    }
}

impl MovementConfig {
    pub(crate) fn validate(&self, violations: &mut Vec<FieldViolation>) {
        require_non_negative("movement.forward_ae_per_second", self.forward_ae_per_second, violations);
        require_non_negative(
            "movement.forward_left_ae_per_second",
            self.forward_left_ae_per_second,
            violations,
        );
        require_non_negative("movement.left_ae_per_second", self.left_ae_per_second, violations);
        require_non_negative(
            "movement.backward_left_ae_per_second",
            self.backward_left_ae_per_second,
            violations,
        );
        require_non_negative("movement.backward_ae_per_second", self.backward_ae_per_second, violations);
        require_non_negative(
            "movement.backward_right_ae_per_second",
            self.backward_right_ae_per_second,
            violations,
        );
        require_non_negative("movement.right_ae_per_second", self.right_ae_per_second, violations);
        require_non_negative(
            "movement.forward_right_ae_per_second",
            self.forward_right_ae_per_second,
            violations,
        );
        require_non_negative("movement.stop_ae_per_second", self.stop_ae_per_second, violations);
    }

    /// AE cost per second for holding a movement command.
    pub fn ae_cost_per_second(&self, movement: Movement) -> f64 {
        match movement {
            Movement::Forward => self.forward_ae_per_second,
            Movement::ForwardLeft => self.forward_left_ae_per_second,
            Movement::Left => self.left_ae_per_second,
            Movement::BackwardLeft => self.backward_left_ae_per_second,
            Movement::Backward => self.backward_ae_per_second,
            Movement::BackwardRight => self.backward_right_ae_per_second,
            Movement::Right => self.right_ae_per_second,
            Movement::ForwardRight => self.forward_right_ae_per_second,
            Movement::Stop => self.stop_ae_per_second,
        }
    }
}
