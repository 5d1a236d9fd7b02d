//! Continuous energy economy (spec §4.3).
//!
//! Regeneration, movement cost, and rotation cost are all applied in one
//! clamp per substep — the rate table itself lives in `config`, never
//! hard-coded here, per spec §9's note that hard-coded cost tables are bugs.

use crate::config::DuelConfig;
use crate::domain::{Movement, Rotation};

/// Apply one substep's worth of regen/move-cost/rotation-cost to `energy`,
/// clamping to `[0, max_ae]`.
pub fn apply_substep(
    energy: f64,
    movement: Movement,
    rotation: Rotation,
    dt: f64,
    config: &DuelConfig,
) -> f64 {
    let regen = config.ship.ae_regen_per_second;
    let move_cost = config.movement.ae_cost_per_second(movement);
    let rot_cost = config.rotation.ae_cost_per_second(rotation);
    let delta = (regen - move_cost - rot_cost) * dt;
    (energy + delta).clamp(0.0, config.ship.max_ae)
}
