//! `duelcore` demo CLI.
//!
//! Not the match driver and not a decision agent — there is no opponent
//! intelligence here, only a smoke-test harness that runs a duel under
//! no-op orders and writes the resulting replay to disk, so the engine can
//! be exercised end-to-end without any of the out-of-scope collaborators.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duelcore::config::DuelConfig;
use duelcore::domain::{Orders, Ship, WorldState};
use duelcore::replay::{ReplayLog, TurnSnapshot};
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "duelcore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a no-op duel and record the replay.
    Run {
        /// Path to a YAML `DuelConfig` document. Defaults to `DuelConfig::default()`.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of decision intervals to simulate.
        #[arg(short, long, default_value_t = 20)]
        turns: u64,

        /// Where to write the JSON-lines replay.
        #[arg(short, long, default_value = "replay.jsonl")]
        output: PathBuf,

        /// Log level (error, warn, info, debug, trace).
        #[arg(short, long, default_value = "info")]
        log_level: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            turns,
            output,
            log_level,
        } => run(config, turns, output, log_level),
    }
}

fn run(
    config_path: Option<PathBuf>,
    turns: u64,
    output: PathBuf,
    log_level: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let level_filter = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            LevelFilter::Info
        }
    };
    env_logger::Builder::new().filter_level(level_filter).init();

    let config = match config_path {
        Some(path) => match DuelConfig::load_from_file(&path) {
            Ok(cfg) => {
                info!("Loaded duel configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                error!("Failed to load duel configuration: {}", e);
                return Err(e.into());
            }
        },
        None => DuelConfig::default(),
    };

    let mut state = initial_state(&config);
    let mut log = ReplayLog::new();
    let orders = Orders::default();

    for _ in 0..turns {
        let (next_state, events) = duelcore::step(&state, &orders, &orders, &config);
        for event in &events {
            info!("{:?}", event);
        }

        log.push(TurnSnapshot {
            turn: next_state.turn,
            ship_a: next_state.ship_a.clone(),
            ship_b: next_state.ship_b.clone(),
            torpedoes: next_state.torpedoes.clone(),
            blast_zones: next_state.blast_zones.clone(),
            orders_a: orders.clone(),
            orders_b: orders.clone(),
            thinking_tokens_a: None,
            thinking_tokens_b: None,
        });

        let over = next_state.outcome().is_some();
        state = next_state;
        if over {
            info!("Match concluded at turn {}", state.turn);
            break;
        }
    }

    log.write_to(&output)?;
    info!("Wrote {} turn(s) of replay to {}", log.snapshots.len(), output.display());
    Ok(())
}

fn initial_state(config: &DuelConfig) -> WorldState {
    let half_separation = config.arena.spawn_distance_units / 2.0;
    let ship_a = Ship::new(
        "ship-a",
        duelcore::math::Vec2::new(-half_separation, 0.0),
        0.0,
        config.ship.starting_shields,
        config.ship.starting_ae,
    );
    let ship_b = Ship::new(
        "ship-b",
        duelcore::math::Vec2::new(half_separation, 0.0),
        std::f64::consts::PI,
        config.ship.starting_shields,
        config.ship.starting_ae,
    );
    WorldState::new(ship_a, ship_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_with_defaults() {
        let cli = Cli::parse_from(["duelcore", "run"]);
        match cli.command {
            Commands::Run { turns, output, .. } => {
                assert_eq!(turns, 20);
                assert_eq!(output, PathBuf::from("replay.jsonl"));
            }
        }
    }

    #[test]
    fn cli_parses_run_with_overrides() {
        let cli = Cli::parse_from([
            "duelcore", "run", "--turns", "5", "--output", "/tmp/out.jsonl", "--log-level", "debug",
        ]);
        match cli.command {
            Commands::Run { turns, output, log_level, .. } => {
                assert_eq!(turns, 5);
                assert_eq!(output, PathBuf::from("/tmp/out.jsonl"));
                assert_eq!(log_level, "debug");
            }
        }
    }

    #[test]
    fn initial_state_places_ships_symmetrically() {
        let config = DuelConfig::default();
        let state = initial_state(&config);
        assert_eq!(state.ship_a.position.x, -state.ship_b.position.x);
        assert_eq!(state.ship_a.position.y, 0.0);
    }
}
