//! Blast-zone three-phase lifecycle: expansion, persistence, dissipation (spec §4.6).

use crate::config::DuelConfig;
use crate::domain::{BlastPhase, BlastZone};
use crate::math::within_circle;
use crate::math::Vec2;

/// Advance one blast zone by `dt`, updating its phase and radius in place.
/// Returns `true` if the zone has expired and should be removed.
pub fn advance(zone: &mut BlastZone, dt: f64, config: &DuelConfig) -> bool {
    zone.age += dt;

    let te = config.torpedo.expansion_duration_seconds;
    let tp = config.torpedo.persistence_duration_seconds;
    let tdiss = config.torpedo.dissipation_duration_seconds;
    let max_radius = config.torpedo.max_radius_units;

    if zone.age < te {
        zone.phase = BlastPhase::Expansion;
        zone.current_radius = max_radius * (zone.age / te);
    } else if zone.age < te + tp {
        zone.phase = BlastPhase::Persistence;
        zone.current_radius = max_radius;
    } else if zone.age < te + tp + tdiss {
        zone.phase = BlastPhase::Dissipation;
        zone.current_radius = max_radius * (1.0 - (zone.age - te - tp) / tdiss);
    } else {
        zone.current_radius = 0.0;
        return true;
    }
    false
}

/// Continuous damage this substep to a ship at `ship_position`, if inside
/// the zone's current radius. Damage during dissipation scales down with
/// the shrinking radius; expansion/persistence apply the flat rate.
pub fn damage_to_point(zone: &BlastZone, ship_position: Vec2, dt: f64, config: &DuelConfig) -> f64 {
    if !within_circle(ship_position, zone.center, zone.current_radius) {
        return 0.0;
    }
    let td = config.torpedo.dissipation_duration_seconds;
    let base_rate = zone.base_damage / td * dt;
    match zone.phase {
        BlastPhase::Expansion | BlastPhase::Persistence => base_rate,
        BlastPhase::Dissipation => {
            base_rate * (zone.current_radius / config.torpedo.max_radius_units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;

    fn new_zone(base_damage: f64) -> BlastZone {
        BlastZone {
            id: "z0".to_string(),
            center: Vec2::ZERO,
            base_damage,
            phase: BlastPhase::Expansion,
            age: 0.0,
            current_radius: 0.0,
            owner: Side::A,
        }
    }

    #[test]
    fn radius_is_zero_at_birth() {
        let zone = new_zone(10.0);
        assert_eq!(zone.current_radius, 0.0);
    }

    #[test]
    fn radius_monotonic_through_expansion() {
        let config = DuelConfig::default();
        let mut zone = new_zone(10.0);
        let dt = 0.1;
        let mut last = -1.0;
        let steps = (config.torpedo.expansion_duration_seconds / dt) as u64;
        for _ in 0..steps {
            advance(&mut zone, dt, &config);
            assert!(zone.current_radius >= last);
            last = zone.current_radius;
        }
    }

    #[test]
    fn phase_sequence_goes_expansion_persistence_dissipation_then_expires() {
        let config = DuelConfig::default();
        let mut zone = new_zone(10.0);
        let dt = 0.1;
        let total = config.torpedo.expansion_duration_seconds
            + config.torpedo.persistence_duration_seconds
            + config.torpedo.dissipation_duration_seconds;
        let steps = (total / dt).round() as u64;
        let mut expired = false;
        let mut saw_expansion = false;
        let mut saw_persistence = false;
        let mut saw_dissipation = false;
        for _ in 0..steps {
            expired = advance(&mut zone, dt, &config);
            match zone.phase {
                BlastPhase::Expansion => saw_expansion = true,
                BlastPhase::Persistence => saw_persistence = true,
                BlastPhase::Dissipation => saw_dissipation = true,
            }
        }
        assert!(saw_expansion && saw_persistence && saw_dissipation);
        assert!(expired);
        assert_eq!(zone.current_radius, 0.0);
    }

    #[test]
    fn zero_damage_outside_radius() {
        let config = DuelConfig::default();
        let mut zone = new_zone(10.0);
        advance(&mut zone, 1.0, &config);
        let far_point = Vec2::new(1000.0, 1000.0);
        assert_eq!(damage_to_point(&zone, far_point, 0.1, &config), 0.0);
    }

    #[test]
    fn damage_rate_matches_spec_formula_while_inside() {
        let config = DuelConfig::default();
        let mut zone = new_zone(10.0);
        advance(&mut zone, 0.1, &config);
        let dt = 0.1;
        let expected = zone.base_damage / config.torpedo.dissipation_duration_seconds * dt;
        assert!((damage_to_point(&zone, Vec2::ZERO, dt, &config) - expected).abs() < 1e-12);
    }
}
