//! Deterministic turn-resolution engine for a 1v1 tactical space duel.
//!
//! `engine::step` is the single entry point the rest of this crate builds
//! toward: given a `WorldState` and one `Orders` packet per side, it
//! deterministically advances the match by one full decision interval and
//! returns the new state plus the events that occurred. Everything else —
//! vector math, the data model, the energy economy, motion, weapons,
//! blast zones, collisions, observation projection, and replay recording —
//! exists to make that one function correct and auditable.

pub mod blast;
pub mod collision;
pub mod config;
pub mod domain;
pub mod energy;
pub mod engine;
pub mod error;
pub mod math;
pub mod motion;
pub mod replay;
pub mod view;
pub mod weapons;

pub use config::DuelConfig;
pub use domain::{Event, Orders, Side, WorldState};
pub use engine::step;
pub use replay::{ReplayLog, TurnSnapshot};
pub use view::{project, Observation};
