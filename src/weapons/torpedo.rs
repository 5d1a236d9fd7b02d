//! Torpedo launch gating and detonation (spec §4.5).

use crate::config::DuelConfig;
use crate::domain::{LaunchRejectReason, Ship, Side, Torpedo, WorldState};
use crate::math::Vec2;

/// Whether `owner` can afford to launch a torpedo right now, and why not if not.
pub fn launch_gate(ship: &Ship, owner: Side, state: &WorldState, config: &DuelConfig) -> Result<(), LaunchRejectReason> {
    if ship.energy < config.torpedo.launch_cost_ae {
        return Err(LaunchRejectReason::InsufficientEnergy);
    }
    if state.live_torpedo_count(owner) >= config.torpedo.max_active_per_ship as usize {
        return Err(LaunchRejectReason::TooManyActiveTorpedoes);
    }
    Ok(())
}

/// Spawn a new torpedo at the shooter's nose. Deducts launch cost from the
/// ship's energy; the caller is responsible for having already checked
/// `launch_gate`.
pub fn launch(ship: &mut Ship, owner: Side, id: String, config: &DuelConfig) -> Torpedo {
    ship.energy -= config.torpedo.launch_cost_ae;
    Torpedo {
        id,
        owner,
        position: ship.position,
        velocity: Vec2::from_angle(ship.heading).scale(config.torpedo.speed_units_per_second),
        heading: ship.heading,
        fuel: config.torpedo.max_ae_capacity,
        just_launched: true,
        detonation_timer: None,
        steering: None,
    }
}

/// Blast-zone base damage yielded by detonating `torpedo` right now.
pub fn detonation_base_damage(torpedo: &Torpedo, config: &DuelConfig) -> f64 {
    torpedo.fuel * config.torpedo.blast_damage_multiplier
}
