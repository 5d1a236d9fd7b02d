//! Ship and torpedo motion (spec §4.2, §4.5 flight).
//!
//! Rotation is always applied before velocity is derived from the new
//! heading, every substep — this is the ordering spec §4.2 calls critical
//! for producing smooth curved trajectories when rotation and movement
//! co-occur, and it is what makes the engine deterministic under a fixed
//! evaluation order (no reassociating rotate-then-move into move-then-rotate).

use crate::config::DuelConfig;
use crate::domain::{Movement, Rotation, Ship, Torpedo};
use crate::math::{normalize_angle_unsigned, Vec2};

/// Advance one ship by one substep: rotate, then derive velocity from the
/// new heading and movement direction, then integrate position.
pub fn step_ship(ship: &mut Ship, movement: Movement, rotation: Rotation, dt: f64, config: &DuelConfig) {
    let rate = config.rotation.rate_radians_per_second(rotation);
    ship.heading = normalize_angle_unsigned(ship.heading + rate * dt);

    if movement == Movement::Stop {
        ship.velocity = Vec2::ZERO;
    } else {
        let direction = ship.heading + movement.offset_radians();
        ship.velocity = Vec2::from_angle(direction).scale(config.ship.base_speed_units_per_second);
        ship.position = ship.position.add(ship.velocity.scale(dt));
    }
}

/// Advance one torpedo by one substep: steer, integrate heading/velocity/position, burn fuel.
pub fn step_torpedo(torpedo: &mut Torpedo, dt: f64, config: &DuelConfig) {
    if let Some(steering) = torpedo.steering {
        let rate = config.rotation.rate_radians_per_second(steering);
        torpedo.heading = normalize_angle_unsigned(torpedo.heading + rate * dt);
    }
    torpedo.velocity = Vec2::from_angle(torpedo.heading).scale(config.torpedo.speed_units_per_second);
    torpedo.position = torpedo.position.add(torpedo.velocity.scale(dt));
    torpedo.fuel = (torpedo.fuel - config.torpedo.fuel_burn_per_second * dt).max(0.0);
    torpedo.just_launched = false;
}
