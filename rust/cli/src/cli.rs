//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table simulator: play against bots or run bots-only sessions"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play from seat 0 against bot opponents
    Play {
        /// Number of bot opponents (1-11)
        #[arg(long)]
        bots: Option<usize>,
        /// Hands to play before the session ends
        #[arg(long, default_value_t = 10)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack for every seat
        #[arg(long)]
        stack: Option<u32>,
    },
    /// Run a bots-only session
    Sim {
        /// Seats at the table (2-12)
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Write every hand as one JSON line to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: &'static [&'static str] = &["play", "sim", "cfg"];
}
