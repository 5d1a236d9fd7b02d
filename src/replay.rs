//! Per-turn replay recording (spec.md §6.3, §9).
//!
//! The recorder is a collaborator, not part of the core contract: the step
//! driver never touches it. A caller appends one `TurnSnapshot` per `step`
//! call and, at the end of a match, writes the accumulated `ReplayLog` to
//! disk as JSON lines — grounded in hyperion's `serde_json` event-payload
//! convention and in `other_examples`' `murk-replay` record/replay/compare
//! determinism-test pattern.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BlastZone, Orders, Ship, Torpedo};

/// Full recorded state of one turn, per spec.md §6.3's field list. Every
/// mutable field of every entity round-trips, including `detonation_timer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: u64,
    pub ship_a: Ship,
    pub ship_b: Ship,
    pub torpedoes: Vec<Torpedo>,
    pub blast_zones: Vec<BlastZone>,
    pub orders_a: Orders,
    pub orders_b: Orders,
    /// Opaque per-ship reasoning text passed through from the agent that
    /// produced `orders_a`/`orders_b`; the core never reads it.
    pub thinking_tokens_a: Option<String>,
    pub thinking_tokens_b: Option<String>,
}

/// An ordered log of turn snapshots for one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub snapshots: Vec<TurnSnapshot>,
}

impl ReplayLog {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn push(&mut self, snapshot: TurnSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Serialize as JSON lines, one `TurnSnapshot` per line.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for snapshot in &self.snapshots {
            serde_json::to_writer(&mut writer, snapshot)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Parse a previously-written JSON-lines replay back into a log.
    pub fn read_from(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut snapshots = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let snapshot: TurnSnapshot = serde_json::from_str(line)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            snapshots.push(snapshot);
        }
        Ok(Self { snapshots })
    }
}
