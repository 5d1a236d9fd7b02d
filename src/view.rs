//! Per-side observation projection (spec §6.2).
//!
//! `project` is the only function here: a pure, total mapping from the
//! authoritative `WorldState` to the plain-data view one side is allowed to
//! see. Grounded in `deterrence-core`'s `GameStateSnapshot`/`TrackView`
//! pattern — one flat, serde-derived struct per visible entity, built fresh
//! every call rather than incrementally maintained.

use serde::{Deserialize, Serialize};

use crate::domain::{BlastPhase, PhaserMode, Side, WorldState};
use crate::math::Vec2;

/// Everything one side is shown about the match after a `step` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub turn: u64,
    pub own_ship: ShipView,
    pub enemy_ship: ShipView,
    /// All visible torpedoes, either side's — distinguish by `TorpedoView::owner`.
    pub torpedoes: Vec<TorpedoView>,
    pub blast_zones: Vec<BlastZoneView>,
}

/// A ship as seen by either side — both ships are fully visible in this
/// duel (no fog of war in the base spec), so this is the same shape
/// regardless of which side it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f64,
    pub shields: i64,
    pub energy: f64,
    pub phaser_mode: PhaserMode,
    pub phaser_cooldown_remaining: f64,
    pub alive: bool,
}

/// A torpedo as seen by either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorpedoView {
    pub id: String,
    pub owner: Side,
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f64,
    pub fuel: f64,
}

/// A blast zone as seen by either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastZoneView {
    pub id: String,
    pub center: Vec2,
    pub phase: BlastPhase,
    pub current_radius: f64,
}

/// Build the observation `perspective` is entitled to see of `state`.
pub fn project(state: &WorldState, perspective: Side) -> Observation {
    let enemy = perspective.other();

    Observation {
        turn: state.turn,
        own_ship: ship_view(state, perspective),
        enemy_ship: ship_view(state, enemy),
        torpedoes: state.torpedoes.iter().map(torpedo_view).collect(),
        blast_zones: state.blast_zones.iter().map(blast_zone_view).collect(),
    }
}

fn ship_view(state: &WorldState, side: Side) -> ShipView {
    let ship = state.ship(side);
    ShipView {
        id: ship.id.clone(),
        position: ship.position,
        velocity: ship.velocity,
        heading: ship.heading,
        shields: ship.shields,
        energy: ship.energy,
        phaser_mode: ship.phaser_mode,
        phaser_cooldown_remaining: ship.phaser_cooldown_remaining,
        alive: ship.is_alive(),
    }
}

fn torpedo_view(torpedo: &crate::domain::Torpedo) -> TorpedoView {
    TorpedoView {
        id: torpedo.id.clone(),
        owner: torpedo.owner,
        position: torpedo.position,
        velocity: torpedo.velocity,
        heading: torpedo.heading,
        fuel: torpedo.fuel,
    }
}

fn blast_zone_view(zone: &crate::domain::BlastZone) -> BlastZoneView {
    BlastZoneView {
        id: zone.id.clone(),
        center: zone.center,
        phase: zone.phase,
        current_radius: zone.current_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ship;

    fn sample_state() -> WorldState {
        WorldState::new(
            Ship::new("a", Vec2::new(-10.0, 0.0), 0.0, 100, 100.0),
            Ship::new("b", Vec2::new(10.0, 0.0), std::f64::consts::PI, 100, 100.0),
        )
    }

    #[test]
    fn own_and_enemy_ship_are_swapped_by_perspective() {
        let state = sample_state();
        let from_a = project(&state, Side::A);
        let from_b = project(&state, Side::B);
        assert_eq!(from_a.own_ship.id, "a");
        assert_eq!(from_a.enemy_ship.id, "b");
        assert_eq!(from_b.own_ship.id, "b");
        assert_eq!(from_b.enemy_ship.id, "a");
    }

    #[test]
    fn torpedoes_carry_their_owner() {
        let mut state = sample_state();
        let id_a = state.next_torpedo_id(Side::A);
        state.torpedoes.push(crate::domain::Torpedo {
            id: id_a,
            owner: Side::A,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            heading: 0.0,
            fuel: 10.0,
            just_launched: false,
            detonation_timer: None,
            steering: None,
        });
        let view = project(&state, Side::A);
        assert_eq!(view.torpedoes.len(), 1);
        assert_eq!(view.torpedoes[0].owner, Side::A);
    }

    #[test]
    fn blast_zones_are_visible_to_both_sides() {
        let mut state = sample_state();
        let id = state.next_blast_zone_id();
        state.blast_zones.push(crate::domain::BlastZone {
            id,
            center: Vec2::ZERO,
            base_damage: 10.0,
            phase: BlastPhase::Expansion,
            age: 0.0,
            current_radius: 1.0,
            owner: Side::A,
        });
        assert_eq!(project(&state, Side::A).blast_zones.len(), 1);
        assert_eq!(project(&state, Side::B).blast_zones.len(), 1);
    }
}
