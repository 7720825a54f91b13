//! # Hold'em CLI Library
//!
//! Command-line front end for the holdem engine: interactive play against bots, bots-only
//! simulation with JSONL hand histories, and configuration inspection.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments,
//! resolves configuration and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "sim", "--players", "6", "--hands", "100", "--seed", "7"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands from seat 0 against bots
//! - `sim`: Run a bots-only session, optionally writing hand histories
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};
use config::{ConfigResolved, Overrides};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors (including invalid configuration such as a
/// player count outside 2..=12)
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holdem", "sim", "--players", "3", "--hands", "2", "--seed", "42"];
/// let mut out = Vec::new();
/// let code = holdem_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: holdem <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in Commands::NAMES {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: holdem --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => resolve_config(Overrides::default())
            .and_then(|resolved| handle_cfg_command(&resolved, out)),
        Commands::Play {
            bots,
            hands,
            seed,
            stack,
        } => {
            let overrides = Overrides {
                players: bots.map(|b| b.saturating_add(1)),
                starting_stack: stack,
                seed,
            };
            resolve_config(overrides).and_then(|resolved| {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(&resolved.config, hands, out, err, &mut stdin_lock)
            })
        }
        Commands::Sim {
            players,
            hands,
            seed,
            output,
        } => {
            let overrides = Overrides {
                players,
                seed,
                ..Overrides::default()
            };
            resolve_config(overrides)
                .and_then(|resolved| handle_sim_command(&resolved.config, hands, output, out))
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn resolve_config(overrides: Overrides) -> Result<ConfigResolved, CliError> {
    Ok(config::load_with_sources()?.with_overrides(overrides)?)
}
