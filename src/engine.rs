//! The turn-resolution step driver (spec §4.1).
//!
//! `step` is the sole entry point: pure with respect to its inputs, no
//! hidden state, no I/O. It takes a full decision interval's worth of
//! orders for both ships and advances the world by exactly
//! `config.substep_count()` fixed-size physics ticks, in the fixed phase
//! order spec §4.1 documents, emitting events in the order their phase
//! produced them. Grounded in hyperion's `simulation/loop.rs`
//! `run_simulation_tick` phase-ordering style, with the ECS scheduler
//! dropped (see DESIGN.md) in favor of a plain function over a `WorldState`
//! value.

use crate::blast;
use crate::collision;
use crate::config::DuelConfig;
use crate::domain::{BlastPhase, BlastZone, Event, Orders, Side, Torpedo, WeaponAction, WorldState};
use crate::energy;
use crate::error::EngineError;
use crate::motion;
use crate::weapons::{phaser, torpedo as torpedo_weapon};

/// Advance `state` by one full decision interval under `orders_a`/`orders_b`,
/// returning the new state and the events that occurred, in emission order.
pub fn step(
    state: &WorldState,
    orders_a: &Orders,
    orders_b: &Orders,
    config: &DuelConfig,
) -> (WorldState, Vec<Event>) {
    let mut working = state.clone();
    let mut events = Vec::new();

    let orders_a = sanitize_orders(orders_a.clone(), config, Side::A, &mut events);
    let orders_b = sanitize_orders(orders_b.clone(), config, Side::B, &mut events);

    apply_torpedo_commands(&mut working, Side::A, &orders_a);
    apply_torpedo_commands(&mut working, Side::B, &orders_b);

    apply_weapon_pre_action(&mut working, Side::A, &orders_a, config, &mut events);
    apply_weapon_pre_action(&mut working, Side::B, &orders_b, config, &mut events);

    let dt = config.simulation.physics_tick_rate_seconds;
    let substeps = config.substep_count();
    let mut blast_damage = BlastDamageAccumulator::default();

    // The full decision interval always runs to completion — outcome is
    // only ever checked after the loop, never as an early exit, so a ship
    // that dies mid-interval doesn't freeze the rest of the world (the
    // other ship's motion, in-flight torpedoes, ticking blast zones) and
    // so a second death later in the same interval is still observed,
    // possibly turning an apparent win into a draw.
    for _ in 0..substeps {
        run_substep(&mut working, &orders_a, &orders_b, dt, config, &mut blast_damage, &mut events);
    }

    if let Some(winner) = working.outcome() {
        events.push(Event::MatchOver { winner });
    }

    working.turn += 1;
    assert_invariants(&working, config);
    (working, events)
}

/// Core invariants that must hold for any `WorldState` this driver returns.
/// A violation here means a bug in the engine itself, not bad input — it
/// panics with a diagnostic dump rather than propagating a `Result`, per
/// spec.md §7's "programmer errors are panics" rule.
fn assert_invariants(state: &WorldState, config: &DuelConfig) {
    let mut violations = Vec::new();
    for (label, ship) in [("ship_a", &state.ship_a), ("ship_b", &state.ship_b)] {
        if ship.position.x.is_nan() || ship.position.y.is_nan() {
            violations.push(format!("{label}.position is NaN ({:?})", ship.position));
        }
        if ship.heading.is_nan() || !(0.0..crate::math::TAU).contains(&ship.heading) {
            violations.push(format!("{label}.heading {} out of [0, TAU)", ship.heading));
        }
        if ship.energy.is_nan() || !(0.0..=config.ship.max_ae).contains(&ship.energy) {
            violations.push(format!("{label}.energy {} out of [0, max_ae]", ship.energy));
        }
        if ship.shields < 0 || ship.shields > config.ship.starting_shields {
            violations.push(format!(
                "{label}.shields {} out of [0, starting_shields={}]",
                ship.shields, config.ship.starting_shields
            ));
        }
    }
    for torpedo in &state.torpedoes {
        if torpedo.position.x.is_nan() || torpedo.position.y.is_nan() {
            violations.push(format!("torpedo {} position is NaN", torpedo.id));
        }
        if torpedo.fuel.is_nan() || torpedo.fuel < 0.0 {
            violations.push(format!("torpedo {} fuel {} is negative", torpedo.id, torpedo.fuel));
        }
    }

    if !violations.is_empty() {
        let err = EngineError::Invariant(violations.join("; "));
        panic!("{err}\n{state:#?}");
    }
}

/// Substitute the no-op order for any out-of-range enum and emit `InvalidOrder`.
///
/// Rust's enums are closed, so `orders.movement`/`rotation`/`weapon_action`
/// can never actually hold an out-of-range tag once deserialized — the
/// defense spec §4.1/§7 ask for here is only meaningful at a
/// deserialization boundary outside this crate. The hook is kept so that
/// boundary can route through it, and so `detonate_after` values (which
/// *can* be out of range even as a plain `f64`) are validated here.
fn sanitize_orders(mut orders: Orders, config: &DuelConfig, side: Side, events: &mut Vec<Event>) -> Orders {
    let interval = config.simulation.decision_interval_seconds;
    for command in orders.torpedo_commands.values_mut() {
        if let crate::domain::TorpedoCommand::DetonateAfter(t) = command {
            if !(*t >= 0.0 && *t <= interval) {
                events.push(Event::InvalidOrder {
                    side,
                    reason: format!("detonate_after {} out of range [0, {}]", t, interval),
                });
                *t = t.clamp(0.0, interval);
            }
        }
    }
    orders
}

fn apply_torpedo_commands(state: &mut WorldState, side: Side, orders: &Orders) {
    for torpedo in state.torpedoes.iter_mut().filter(|t| t.owner == side) {
        if let Some(command) = orders.torpedo_commands.get(&torpedo.id) {
            match command {
                crate::domain::TorpedoCommand::Steer(rotation) => {
                    torpedo.steering = Some(*rotation);
                }
                crate::domain::TorpedoCommand::DetonateAfter(t) => {
                    torpedo.detonation_timer = Some(*t);
                }
            }
        }
    }
}

fn apply_weapon_pre_action(
    state: &mut WorldState,
    side: Side,
    orders: &Orders,
    config: &DuelConfig,
    events: &mut Vec<Event>,
) {
    match orders.weapon_action {
        WeaponAction::MaintainConfig => {}
        WeaponAction::ReconfigureWide => {
            state.ship_mut(side).phaser_mode = crate::domain::PhaserMode::Wide;
        }
        WeaponAction::ReconfigureFocused => {
            state.ship_mut(side).phaser_mode = crate::domain::PhaserMode::Focused;
        }
        WeaponAction::LaunchTorpedo => {
            let ship = state.ship(side).clone();
            match torpedo_weapon::launch_gate(&ship, side, state, config) {
                Ok(()) => {
                    let id = state.next_torpedo_id(side);
                    let new_torpedo = torpedo_weapon::launch(state.ship_mut(side), side, id.clone(), config);
                    state.torpedoes.push(new_torpedo);
                    events.push(Event::TorpedoLaunched { side, torpedo_id: id });
                }
                Err(reason) => {
                    events.push(Event::LaunchRejected { side, reason });
                }
            }
        }
    }
}

/// Fractional blast damage owed to each ship, carried across substeps within
/// one `step` call so that per-substep rates (typically well under one
/// shield point) don't get rounded away to zero or, worse, rounded *up*
/// every substep and wildly over-apply. Shields only ever move in whole
/// points; this is where the remainder between substeps lives.
#[derive(Debug, Default)]
struct BlastDamageAccumulator {
    a: f64,
    b: f64,
}

fn run_substep(
    state: &mut WorldState,
    orders_a: &Orders,
    orders_b: &Orders,
    dt: f64,
    config: &DuelConfig,
    blast_damage: &mut BlastDamageAccumulator,
    events: &mut Vec<Event>,
) {
    let was_alive_a = state.ship_a.is_alive();
    let was_alive_b = state.ship_b.is_alive();

    // (a) Rotation, then velocity, then position — Ship A before Ship B.
    if state.ship_a.is_alive() {
        motion::step_ship(&mut state.ship_a, orders_a.movement, orders_a.rotation, dt, config);
    }
    if state.ship_b.is_alive() {
        motion::step_ship(&mut state.ship_b, orders_b.movement, orders_b.rotation, dt, config);
    }

    // (b) Energy economy and cooldown decrement, Ship A then Ship B.
    for (ship, orders) in [(&mut state.ship_a, orders_a), (&mut state.ship_b, orders_b)] {
        if !ship.is_alive() {
            continue;
        }
        ship.energy = energy::apply_substep(ship.energy, orders.movement, orders.rotation, dt, config);
        ship.phaser_cooldown_remaining = (ship.phaser_cooldown_remaining - dt).max(0.0);
    }

    // (c) Torpedo flight and fuel burn, insertion order.
    for torpedo in state.torpedoes.iter_mut() {
        motion::step_torpedo(torpedo, dt, config);
    }

    // (d) Detonation timers.
    for torpedo in state.torpedoes.iter_mut() {
        if let Some(timer) = torpedo.detonation_timer.as_mut() {
            *timer -= dt;
        }
    }

    // (e) Self-detonate anything whose timer elapsed or fuel ran out this
    // substep, insertion order. Proximity detonation against a ship is
    // handled separately, after blast zones have advanced (phase (g)).
    detonate_marked(state, config, events, |torpedo| {
        let timer_elapsed = torpedo.detonation_timer.map(|t| t <= 0.0).unwrap_or(false);
        let fuel_depleted = torpedo.detonation_timer.is_none() && torpedo.fuel <= 0.0;
        timer_elapsed || fuel_depleted
    });

    // (f) Advance blast zones and apply continuous area damage accrued so far.
    let mut expired: Vec<usize> = Vec::new();
    for (i, zone) in state.blast_zones.iter_mut().enumerate() {
        if blast::advance(zone, dt, config) {
            expired.push(i);
        }
    }
    for zone in state.blast_zones.iter() {
        if state.ship_a.is_alive() {
            blast_damage.a += blast::damage_to_point(zone, state.ship_a.position, dt, config);
        }
        if state.ship_b.is_alive() {
            blast_damage.b += blast::damage_to_point(zone, state.ship_b.position, dt, config);
        }
    }
    apply_accumulated_whole_points(&mut state.ship_a.shields, &mut blast_damage.a);
    apply_accumulated_whole_points(&mut state.ship_b.shields, &mut blast_damage.b);
    for &i in expired.iter().rev() {
        let zone = state.blast_zones.remove(i);
        events.push(Event::BlastZoneExpired { blast_zone_id: zone.id });
    }

    // (g) Torpedo-ship proximity collision: detonate any torpedo that has
    // reached its target's hull this substep. Spec §4.7 requires the struck
    // ship to take blast damage starting on the *next* blast-zone tick, not
    // this one, so this runs after (f)'s advance/damage pass — a zone
    // spawned here has age 0 until the following substep.
    resolve_torpedo_ship_collisions(state, config, events);

    // (h) Phaser firing, Ship A before Ship B.
    resolve_phaser(state, Side::A, config, events);
    resolve_phaser(state, Side::B, config, events);

    // (i) Ship-ship collision.
    if state.ship_a.is_alive() && state.ship_b.is_alive() {
        if collision::check_ship_contact(
            &mut state.ship_collision_suppressed,
            state.ship_a.position,
            state.ship_b.position,
            config,
        ) {
            state.ship_a.shields = (state.ship_a.shields - config.ship.collision_damage.round() as i64).max(0);
            state.ship_b.shields = (state.ship_b.shields - config.ship.collision_damage.round() as i64).max(0);
            events.push(Event::ShipCollision {
                damage: config.ship.collision_damage,
            });
        }
    }

    // (j) Destruction detection — fires exactly once, on the substep a ship
    // transitions from alive to dead.
    if was_alive_a && !state.ship_a.is_alive() {
        events.push(Event::ShipDestroyed { side: Side::A });
    }
    if was_alive_b && !state.ship_b.is_alive() {
        events.push(Event::ShipDestroyed { side: Side::B });
    }
}

/// Detonate every torpedo for which `should_detonate` holds, in insertion
/// order, then remove them from `state.torpedoes`. `should_detonate` sees
/// only the torpedo itself — for conditions that also need ship state, see
/// `resolve_torpedo_ship_collisions`.
fn detonate_marked(
    state: &mut WorldState,
    config: &DuelConfig,
    events: &mut Vec<Event>,
    should_detonate: impl Fn(&Torpedo) -> bool,
) {
    let mut to_detonate: Vec<usize> = Vec::new();
    for (i, torpedo) in state.torpedoes.iter().enumerate() {
        if should_detonate(torpedo) {
            to_detonate.push(i);
        }
    }
    for &i in &to_detonate {
        let torpedo = state.torpedoes[i].clone();
        detonate(state, &torpedo, config, events);
    }
    // Remove detonated torpedoes, highest index first to keep indices valid.
    for &i in to_detonate.iter().rev() {
        state.torpedoes.remove(i);
    }
}

/// Detonate any torpedo that has reached the hull of the ship it's targeting
/// (the owner's own ship is never a target, per DESIGN.md).
fn resolve_torpedo_ship_collisions(state: &mut WorldState, config: &DuelConfig, events: &mut Vec<Event>) {
    let mut to_detonate: Vec<usize> = Vec::new();
    for (i, torpedo) in state.torpedoes.iter().enumerate() {
        let target = state.ship(torpedo.owner.other());
        if target.is_alive() && collision::torpedo_hits_ship(torpedo.position, target.position, config) {
            to_detonate.push(i);
        }
    }
    for &i in &to_detonate {
        let torpedo = state.torpedoes[i].clone();
        detonate(state, &torpedo, config, events);
    }
    for &i in to_detonate.iter().rev() {
        state.torpedoes.remove(i);
    }
}

/// Deduct whatever whole shield points have accumulated in `remainder`,
/// leaving the fractional part for the next substep.
fn apply_accumulated_whole_points(shields: &mut i64, remainder: &mut f64) {
    let whole = remainder.floor();
    if whole >= 1.0 {
        *shields = (*shields - whole as i64).max(0);
        *remainder -= whole;
    }
}

fn detonate(state: &mut WorldState, torpedo: &Torpedo, config: &DuelConfig, events: &mut Vec<Event>) {
    let base_damage = torpedo_weapon::detonation_base_damage(torpedo, config);
    let blast_zone_id = state.next_blast_zone_id();
    let zone = BlastZone {
        id: blast_zone_id.clone(),
        center: torpedo.position,
        base_damage,
        phase: BlastPhase::Expansion,
        age: 0.0,
        current_radius: 0.0,
        owner: torpedo.owner,
    };
    state.blast_zones.push(zone);
    events.push(Event::TorpedoDetonated {
        torpedo_id: torpedo.id.clone(),
        blast_zone_id,
        position: torpedo.position,
    });
}

fn resolve_phaser(state: &mut WorldState, side: Side, config: &DuelConfig, events: &mut Vec<Event>) {
    let shooter_alive = state.ship(side).is_alive();
    let target_alive = state.ship(side.other()).is_alive();
    if !shooter_alive || !target_alive {
        return;
    }

    let shooter = state.ship(side).clone();
    let target = state.ship(side.other()).clone();

    if let Some(hit) = phaser::try_fire(&shooter, &target, config) {
        let mode = shooter.phaser_mode;
        let cooldown = config.phaser.for_mode(mode).cooldown_seconds;
        state.ship_mut(side).phaser_cooldown_remaining = cooldown;

        let target_mut = state.ship_mut(side.other());
        target_mut.shields = (target_mut.shields - hit.damage.round() as i64).max(0);
        let target_shields_after = target_mut.shields;

        events.push(Event::PhaserFired {
            shooter: side,
            mode,
            damage: hit.damage,
            target_shields_after,
        });
    }
}
