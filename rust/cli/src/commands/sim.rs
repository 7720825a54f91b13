//! Simulation command handler: bots-only sessions with optional JSONL hand history.
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::commands::sim::handle_sim_command;
//! use holdem_cli::config::Config;
//! use std::io;
//!
//! let config = Config { players: 6, seed: Some(42), ..Config::default() };
//! let mut out = io::stdout();
//! handle_sim_command(&config, 1000, Some("data/sim.jsonl".to_string()), &mut out).unwrap();
//! ```

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_stacks;
use holdem_ai::{create_ai, BotTable};
use holdem_engine::engine::Engine;
use holdem_engine::logger::HandLogger;
use std::io::Write;
use tracing::info;

/// Handle the sim command.
///
/// Plays up to `hands` hands (stopping early once a single seat holds every chip), writes each
/// hand to `output` when given, and checks that no chip was created or lost.
///
/// # Errors
///
/// - `CliError::InvalidInput` when `hands` is zero
/// - `CliError::Config` when the table cannot be seated
/// - `CliError::Engine` when a hand fails or chips are not conserved
/// - `CliError::Io` when the history file or output stream cannot be written
pub fn handle_sim_command(
    config: &Config,
    hands: u32,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut table = config.table_config(false);
    table.seed = Some(seed);
    let mut eng = Engine::new(table)?;
    let ai = create_ai("equity", Some(seed.wrapping_add(1)), config.equity_samples)
        .map_err(CliError::Engine)?;
    let mut bots = BotTable::new(ai);

    let mut logger = output.as_ref().map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "sim: players={} hands={} seed={}",
        config.players, hands, seed
    )?;

    let total = eng.total_chips();
    for _ in 0..hands {
        if eng.funded_players() < 2 {
            writeln!(out, "One player holds every chip; stopping early")?;
            break;
        }
        let record = eng.play_hand(&mut bots)?;
        if let Some(logger) = logger.as_mut() {
            logger.write(&record)?;
        }
        if eng.total_chips() != total {
            return Err(CliError::Engine(format!(
                "chip conservation violated after {}: {} != {}",
                record.hand_id,
                eng.total_chips(),
                total
            )));
        }
    }
    info!(hands = eng.hands_played(), "simulation finished");

    writeln!(out, "Hands played: {}", eng.hands_played())?;
    writeln!(out, "Final stacks:")?;
    for line in format_stacks(eng.players(), eng.dealer()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Total chips: {} (conserved)", total)?;
    if let Some(path) = output {
        writeln!(out, "Saved {} hands to {}", eng.hands_played(), path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hands_is_invalid_input() {
        let mut out = Vec::new();
        let err = handle_sim_command(&Config::default(), 0, None, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn seeded_sim_is_reproducible() {
        let config = Config {
            players: 3,
            seed: Some(8),
            equity_samples: 16,
            ..Config::default()
        };
        let run = || {
            let mut out = Vec::new();
            handle_sim_command(&config, 5, None, &mut out).unwrap();
            String::from_utf8(out).unwrap()
        };
        let first = run();
        assert!(first.contains("seed=8"));
        assert!(first.contains("Total chips: 3000 (conserved)"));
        assert_eq!(first, run());
    }
}
