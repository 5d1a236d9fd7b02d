//! Core data model: ships, torpedoes, blast zones, orders, events, world state.
//!
//! Mirrors hyperion's `models/ship.rs` (plain serde-derived records) and
//! `events.rs` (`GameEvent` as a tagged enum) conventions, but scoped to
//! exactly the entities the turn-resolution engine owns.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// One of the nine movement directions, expressed as an offset from heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    Forward,
    ForwardLeft,
    Left,
    BackwardLeft,
    Backward,
    BackwardRight,
    Right,
    ForwardRight,
    Stop,
}

impl Movement {
    /// Angular offset from heading, in radians. `Stop` has no offset —
    /// callers must check for `Stop` before using this.
    pub fn offset_radians(self) -> f64 {
        use std::f64::consts::PI;
        match self {
            Movement::Forward => 0.0,
            Movement::ForwardLeft => -PI / 4.0,
            Movement::Left => -PI / 2.0,
            Movement::BackwardLeft => -3.0 * PI / 4.0,
            Movement::Backward => PI,
            Movement::BackwardRight => 3.0 * PI / 4.0,
            Movement::Right => PI / 2.0,
            Movement::ForwardRight => PI / 4.0,
            Movement::Stop => 0.0,
        }
    }
}

impl Default for Movement {
    fn default() -> Self {
        Movement::Stop
    }
}

/// One of the five rotation commands. Positive rate is counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    None,
    SoftLeft,
    SoftRight,
    HardLeft,
    HardRight,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::None
    }
}

/// Which phaser configuration a ship is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaserMode {
    Wide,
    Focused,
}

impl Default for PhaserMode {
    fn default() -> Self {
        PhaserMode::Wide
    }
}

/// One-shot weapon action evaluated once at turn intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponAction {
    MaintainConfig,
    ReconfigureWide,
    ReconfigureFocused,
    LaunchTorpedo,
}

impl Default for WeaponAction {
    fn default() -> Self {
        WeaponAction::MaintainConfig
    }
}

/// A per-torpedo command attached to an order packet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TorpedoCommand {
    Steer(Rotation),
    DetonateAfter(f64),
}

/// Identifies which side of the duel a ship occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// One ship. Logically "dead" once `shields <= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians, normalized to `[0, TAU)`.
    pub heading: f64,
    /// 0..=starting_shields.
    pub shields: i64,
    /// 0..=max_ae.
    pub energy: f64,
    pub phaser_mode: PhaserMode,
    /// >= 0, clamped to `cooldown_seconds`.
    pub phaser_cooldown_remaining: f64,
}

impl Ship {
    pub fn is_alive(&self) -> bool {
        self.shields > 0
    }

    pub fn new(id: impl Into<String>, position: Vec2, heading: f64, starting_shields: i64, starting_ae: f64) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Vec2::ZERO,
            heading,
            shields: starting_shields,
            energy: starting_ae,
            phaser_mode: PhaserMode::Wide,
            phaser_cooldown_remaining: 0.0,
        }
    }
}

/// A flying torpedo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Torpedo {
    pub id: String,
    pub owner: Side,
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f64,
    /// Available-energy remaining, fuels both flight and blast yield.
    pub fuel: f64,
    pub just_launched: bool,
    pub detonation_timer: Option<f64>,
    /// Steering command in effect for the remainder of the decision interval.
    pub steering: Option<Rotation>,
}

/// Phase of a blast zone's three-stage lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastPhase {
    Expansion,
    Persistence,
    Dissipation,
}

/// An area-damage zone spawned by a torpedo detonation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastZone {
    pub id: String,
    pub center: Vec2,
    pub base_damage: f64,
    pub phase: BlastPhase,
    pub age: f64,
    pub current_radius: f64,
    pub owner: Side,
}

/// Orders for one ship for one decision interval.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Orders {
    pub movement: Movement,
    pub rotation: Rotation,
    pub weapon_action: WeaponAction,
    pub torpedo_commands: std::collections::BTreeMap<String, TorpedoCommand>,
}

/// Reason a torpedo launch was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchRejectReason {
    InsufficientEnergy,
    TooManyActiveTorpedoes,
}

/// Something that happened during a `step` call, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    InvalidOrder { side: Side, reason: String },
    LaunchRejected { side: Side, reason: LaunchRejectReason },
    TorpedoLaunched { side: Side, torpedo_id: String },
    TorpedoDetonated { torpedo_id: String, blast_zone_id: String, position: Vec2 },
    BlastZoneExpired { blast_zone_id: String },
    PhaserFired {
        shooter: Side,
        mode: PhaserMode,
        damage: f64,
        target_shields_after: i64,
    },
    ShipCollision { damage: f64 },
    ShipDestroyed { side: Side },
    MatchOver { winner: Option<Side> },
}

/// The full mutable state of one match, owned solely by the step driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub turn: u64,
    pub ship_a: Ship,
    pub ship_b: Ship,
    pub torpedoes: Vec<Torpedo>,
    pub blast_zones: Vec<BlastZone>,
    next_torpedo_id: u64,
    next_blast_zone_id: u64,
    /// Whether the ships are currently in a suppressed (already-damaged)
    /// collision, carried across `step` calls so continuous contact spanning
    /// a decision-interval boundary isn't re-damaged at the next turn's
    /// first substep.
    pub(crate) ship_collision_suppressed: bool,
}

impl WorldState {
    pub fn new(ship_a: Ship, ship_b: Ship) -> Self {
        Self {
            turn: 0,
            ship_a,
            ship_b,
            torpedoes: Vec::new(),
            blast_zones: Vec::new(),
            next_torpedo_id: 0,
            next_blast_zone_id: 0,
            ship_collision_suppressed: false,
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::A => &self.ship_a,
            Side::B => &self.ship_b,
        }
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::A => &mut self.ship_a,
            Side::B => &mut self.ship_b,
        }
    }

    /// Deterministic, never-reused id for a new torpedo.
    pub fn next_torpedo_id(&mut self, owner: Side) -> String {
        let id = format!("torp-{:?}-{}", owner, self.next_torpedo_id);
        self.next_torpedo_id += 1;
        id
    }

    /// Deterministic, never-reused id for a new blast zone.
    pub fn next_blast_zone_id(&mut self) -> String {
        let id = format!("blast-{}", self.next_blast_zone_id);
        self.next_blast_zone_id += 1;
        id
    }

    pub fn live_torpedo_count(&self, owner: Side) -> usize {
        self.torpedoes.iter().filter(|t| t.owner == owner).count()
    }

    /// Returns the winner if exactly one ship is alive, `Some(None)` for a
    /// simultaneous draw, or `None` if the match continues.
    pub fn outcome(&self) -> Option<Option<Side>> {
        match (self.ship_a.is_alive(), self.ship_b.is_alive()) {
            (true, true) => None,
            (true, false) => Some(Some(Side::A)),
            (false, true) => Some(Some(Side::B)),
            (false, false) => Some(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_state_ids_never_repeat() {
        let mut state = WorldState::new(
            Ship::new("a", Vec2::ZERO, 0.0, 100, 100.0),
            Ship::new("b", Vec2::ZERO, 0.0, 100, 100.0),
        );
        let first = state.next_torpedo_id(Side::A);
        let second = state.next_torpedo_id(Side::A);
        assert_ne!(first, second);
    }

    #[test]
    fn outcome_detects_single_survivor() {
        let mut state = WorldState::new(
            Ship::new("a", Vec2::ZERO, 0.0, 100, 100.0),
            Ship::new("b", Vec2::ZERO, 0.0, 100, 100.0),
        );
        state.ship_b.shields = 0;
        assert_eq!(state.outcome(), Some(Some(Side::A)));
    }

    #[test]
    fn outcome_detects_draw() {
        let mut state = WorldState::new(
            Ship::new("a", Vec2::ZERO, 0.0, 100, 100.0),
            Ship::new("b", Vec2::ZERO, 0.0, 100, 100.0),
        );
        state.ship_a.shields = 0;
        state.ship_b.shields = 0;
        assert_eq!(state.outcome(), Some(None));
    }

    #[test]
    fn outcome_none_while_both_alive() {
        let state = WorldState::new(
            Ship::new("a", Vec2::ZERO, 0.0, 100, 100.0),
            Ship::new("b", Vec2::ZERO, 0.0, 100, 100.0),
        );
        assert_eq!(state.outcome(), None);
    }
}
