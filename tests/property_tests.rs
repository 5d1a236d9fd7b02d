//! Property-based tests for the invariants spec.md §8 names explicitly:
//! determinism, energy bounds, heading range, cooldown bounds, and shield
//! monotonicity. Grounded in hyperion's `proptest` dev-dependency (declared
//! but never exercised there) plus the scenario style of
//! `tests/integration_tests.rs`.

use proptest::prelude::*;

use duelcore::config::DuelConfig;
use duelcore::domain::{Movement, Orders, Rotation, Ship, Side, WeaponAction, WorldState};
use duelcore::math::Vec2;

fn movement_strategy() -> impl Strategy<Value = Movement> {
    prop_oneof![
        Just(Movement::Forward),
        Just(Movement::ForwardLeft),
        Just(Movement::Left),
        Just(Movement::BackwardLeft),
        Just(Movement::Backward),
        Just(Movement::BackwardRight),
        Just(Movement::Right),
        Just(Movement::ForwardRight),
        Just(Movement::Stop),
    ]
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::None),
        Just(Rotation::SoftLeft),
        Just(Rotation::SoftRight),
        Just(Rotation::HardLeft),
        Just(Rotation::HardRight),
    ]
}

fn weapon_action_strategy() -> impl Strategy<Value = WeaponAction> {
    prop_oneof![
        Just(WeaponAction::MaintainConfig),
        Just(WeaponAction::ReconfigureWide),
        Just(WeaponAction::ReconfigureFocused),
        Just(WeaponAction::LaunchTorpedo),
    ]
}

fn orders_strategy() -> impl Strategy<Value = Orders> {
    (movement_strategy(), rotation_strategy(), weapon_action_strategy()).prop_map(
        |(movement, rotation, weapon_action)| Orders {
            movement,
            rotation,
            weapon_action,
            torpedo_commands: Default::default(),
        },
    )
}

fn facing_state() -> WorldState {
    WorldState::new(
        Ship::new("a", Vec2::new(-200.0, 0.0), 0.0, 100, 100.0),
        Ship::new("b", Vec2::new(200.0, 0.0), std::f64::consts::PI, 100, 100.0),
    )
}

proptest! {
    /// spec.md §8: two independent `step` calls on identical inputs produce
    /// struct-equal (hence byte-identical once serialized) output, for any
    /// combination of order fields, not just the default.
    #[test]
    fn determinism_holds_for_arbitrary_orders(
        orders_a in orders_strategy(),
        orders_b in orders_strategy(),
    ) {
        let config = DuelConfig::default();
        let state = facing_state();

        let (state1, events1) = duelcore::step(&state, &orders_a, &orders_b, &config);
        let (state2, events2) = duelcore::step(&state, &orders_a, &orders_b, &config);

        prop_assert_eq!(state1, state2);
        prop_assert_eq!(events1, events2);
    }

    /// spec.md §4.3: energy never leaves `[0, max_ae]` regardless of which
    /// movement/rotation combination is held for a full decision interval.
    #[test]
    fn energy_stays_within_bounds(
        movement in movement_strategy(),
        rotation in rotation_strategy(),
    ) {
        let config = DuelConfig::default();
        let state = facing_state();
        let orders_a = Orders { movement, rotation, ..Orders::default() };
        let orders_b = Orders::default();

        let (new_state, _events) = duelcore::step(&state, &orders_a, &orders_b, &config);

        prop_assert!(new_state.ship_a.energy >= 0.0 && new_state.ship_a.energy <= config.ship.max_ae);
        prop_assert!(new_state.ship_b.energy >= 0.0 && new_state.ship_b.energy <= config.ship.max_ae);
    }

    /// spec.md §3: heading is always normalized to `[0, 2*PI)`, never
    /// drifting out of range no matter how many turns accumulate.
    #[test]
    fn heading_always_normalized(
        rotation in rotation_strategy(),
        turns in 1usize..6,
    ) {
        let config = DuelConfig::default();
        let mut state = facing_state();
        let orders_a = Orders { rotation, ..Orders::default() };
        let orders_b = Orders::default();

        for _ in 0..turns {
            let (new_state, _events) = duelcore::step(&state, &orders_a, &orders_b, &config);
            state = new_state;
        }

        prop_assert!(state.ship_a.heading >= 0.0 && state.ship_a.heading < std::f64::consts::TAU);
        prop_assert!(state.ship_b.heading >= 0.0 && state.ship_b.heading < std::f64::consts::TAU);
    }

    /// spec.md §4.4: phaser cooldown never goes negative and never exceeds
    /// the configured cooldown for the ship's current mode.
    #[test]
    fn phaser_cooldown_stays_in_bounds(
        orders_a in orders_strategy(),
        orders_b in orders_strategy(),
        turns in 1usize..4,
    ) {
        let config = DuelConfig::default();
        let mut state = facing_state();

        for _ in 0..turns {
            let (new_state, _events) = duelcore::step(&state, &orders_a, &orders_b, &config);
            state = new_state;
        }

        let max_cooldown_a = config.phaser.for_mode(state.ship_a.phaser_mode).cooldown_seconds;
        let max_cooldown_b = config.phaser.for_mode(state.ship_b.phaser_mode).cooldown_seconds;
        prop_assert!(state.ship_a.phaser_cooldown_remaining >= 0.0);
        prop_assert!(state.ship_a.phaser_cooldown_remaining <= max_cooldown_a);
        prop_assert!(state.ship_b.phaser_cooldown_remaining >= 0.0);
        prop_assert!(state.ship_b.phaser_cooldown_remaining <= max_cooldown_b);
    }

    /// spec.md: shields never increase (no regen exists anywhere in the
    /// engine) and never drop below zero.
    #[test]
    fn shields_are_monotonically_non_increasing_and_non_negative(
        orders_a in orders_strategy(),
        orders_b in orders_strategy(),
        turns in 1usize..4,
    ) {
        let config = DuelConfig::default();
        let mut state = facing_state();

        let mut last_a = state.ship_a.shields;
        let mut last_b = state.ship_b.shields;
        for _ in 0..turns {
            let (new_state, _events) = duelcore::step(&state, &orders_a, &orders_b, &config);
            prop_assert!(new_state.ship_a.shields <= last_a);
            prop_assert!(new_state.ship_b.shields <= last_b);
            prop_assert!(new_state.ship_a.shields >= 0);
            prop_assert!(new_state.ship_b.shields >= 0);
            last_a = new_state.ship_a.shields;
            last_b = new_state.ship_b.shields;
            state = new_state;
            if state.outcome().is_some() {
                break;
            }
        }
    }
}
