//! Ship-ship and torpedo-ship collision resolution (spec §4.7).
//!
//! The exact damage-suppression policy during continuous contact is
//! explicitly left to the implementer by spec §9; the policy chosen here
//! (documented in DESIGN.md) is: damage is applied once on first contact,
//! then suppressed until the ships separate beyond twice the collision
//! radius. Continuous contact can span a turn boundary, so the suppression
//! flag is carried on `WorldState` itself (`ship_collision_suppressed`)
//! rather than reset per `step` call — two ships left touching across a
//! decision interval must not take the damage again at substep 0 of the
//! next turn.

use crate::config::DuelConfig;
use crate::math::Vec2;

/// Check ship-ship contact this substep and update `*suppressed` in place.
/// Returns `true` exactly when new collision damage should be applied.
pub fn check_ship_contact(suppressed: &mut bool, ship_a: Vec2, ship_b: Vec2, config: &DuelConfig) -> bool {
    let distance = ship_a.distance_to(ship_b);
    let contact_radius = 2.0 * config.ship.collision_radius_units;

    if distance <= contact_radius {
        if *suppressed {
            false
        } else {
            *suppressed = true;
            true
        }
    } else {
        if distance > 2.0 * contact_radius {
            *suppressed = false;
        }
        false
    }
}

/// Whether a torpedo at `torpedo_position` has struck a ship at `ship_position`.
pub fn torpedo_hits_ship(torpedo_position: Vec2, ship_position: Vec2, config: &DuelConfig) -> bool {
    torpedo_position.distance_to(ship_position) <= config.ship.collision_radius_units
}
