//! Weapon subsystems: phaser arc/range hit-testing and torpedo launch/detonation.
//!
//! Split the way hyperion splits `weapons/tags.rs` (damage calculation) from
//! `config/weapon.rs` (static weapon data) — here `phaser` and `torpedo` each
//! own their slice of spec §4.4/§4.5.

pub mod phaser;
pub mod torpedo;
