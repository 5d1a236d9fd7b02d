//! Phaser arc/range hit testing with cooldown enforcement (spec §4.4).

use crate::config::DuelConfig;
use crate::domain::Ship;
use crate::math::within_arc;

/// Result of a phaser firing attempt this substep.
pub struct PhaserHit {
    pub damage: f64,
}

/// Attempt to fire `shooter`'s phaser at `target`. Returns `None` if the
/// shooter is still on cooldown or the target is out of arc/range; does
/// not mutate either ship — the caller applies damage and resets cooldown.
pub fn try_fire(shooter: &Ship, target: &Ship, config: &DuelConfig) -> Option<PhaserHit> {
    if shooter.phaser_cooldown_remaining > 0.0 {
        return None;
    }

    let mode_config = config.phaser.for_mode(shooter.phaser_mode);
    let bearing = target.position.sub(shooter.position).angle();
    let in_arc = within_arc(shooter.heading, bearing, mode_config.arc_degrees.to_radians());
    let in_range = shooter.position.distance_to(target.position) <= mode_config.range_units;

    if in_arc && in_range {
        Some(PhaserHit {
            damage: mode_config.damage,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhaserMode;
    use crate::math::Vec2;

    fn ship_at(x: f64, heading: f64) -> Ship {
        let mut s = Ship::new("s", Vec2::new(x, 0.0), heading, 100, 100.0);
        s.phaser_mode = PhaserMode::Wide;
        s
    }

    #[test]
    fn fires_when_aligned_and_in_range() {
        let config = DuelConfig::default();
        let shooter = ship_at(0.0, 0.0);
        let target = ship_at(50.0, std::f64::consts::PI);
        assert!(try_fire(&shooter, &target, &config).is_some());
    }

    #[test]
    fn refuses_while_on_cooldown() {
        let config = DuelConfig::default();
        let mut shooter = ship_at(0.0, 0.0);
        shooter.phaser_cooldown_remaining = 1.0;
        let target = ship_at(50.0, std::f64::consts::PI);
        assert!(try_fire(&shooter, &target, &config).is_none());
    }

    #[test]
    fn refuses_out_of_range() {
        let config = DuelConfig::default();
        let shooter = ship_at(0.0, 0.0);
        let target = ship_at(config.phaser.wide.range_units + 10.0, std::f64::consts::PI);
        assert!(try_fire(&shooter, &target, &config).is_none());
    }

    #[test]
    fn refuses_outside_arc() {
        let config = DuelConfig::default();
        // Shooter facing +x, target directly behind (bearing = pi), arc is
        // 120 degrees wide so a target at bearing pi is well outside it.
        let shooter = {
            let mut s = ship_at(0.0, 0.0);
            s.heading = 0.0;
            s
        };
        let target = Ship::new("t", Vec2::new(-50.0, 0.0), 0.0, 100, 100.0);
        assert!(try_fire(&shooter, &target, &config).is_none());
    }
}
