//! # holdem-ai: Computer opponents for Texas Hold'em
//!
//! Provides equity estimation and the betting policy that drives bot seats.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`equity`] - Win-probability estimation behind the [`equity::EquityEstimator`] trait
//! - [`policy`] - Band-based decision function
//! - [`bot`] - The equity-driven bot
//! - [`create_ai`] - Factory function for creating AI opponents
//! - [`BotTable`] - Lets a single opponent act for every seat of a bots-only table
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, BotTable};
//! use holdem_engine::engine::Engine;
//! use holdem_engine::game::TableConfig;
//!
//! let ai = create_ai("equity", Some(42), 32).expect("known AI type");
//! let mut table = BotTable::new(ai);
//!
//! let config = TableConfig { players: 4, seed: Some(42), ..TableConfig::default() };
//! let mut engine = Engine::new(config).expect("valid table");
//! let record = engine.play_hand(&mut table).expect("hand completes");
//! assert_eq!(record.paid_out(), record.pot);
//! ```
//!
//! ## AI Types
//!
//! - `"equity"` - Monte Carlo equity plus personality, banded raise/call/fold policy

use holdem_engine::betting::ActionContext;
use holdem_engine::engine::{ActionSource, TableView};
use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction;
use tracing::warn;

pub mod bot;
pub mod equity;
pub mod policy;

/// Trait defining the interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::betting::ActionContext;
/// use holdem_engine::engine::TableView;
/// use holdem_engine::player::PlayerAction;
///
/// struct CallingStation;
///
/// impl AIOpponent for CallingStation {
///     fn get_action(&mut self, _table: &TableView<'_>, _ctx: &ActionContext) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Determine the next action for the seat in `ctx`, seeing only what the table shows.
    fn get_action(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// `samples` is the Monte Carlo sample count per equity estimate.
///
/// # Errors
///
/// Returns a message naming the type when `ai_type` is unknown.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("equity", Some(1), 100).unwrap();
/// assert_eq!(ai.name(), "EquityBot");
/// assert!(create_ai("oracle", None, 100).is_err());
/// ```
pub fn create_ai(
    ai_type: &str,
    seed: Option<u64>,
    samples: u32,
) -> Result<Box<dyn AIOpponent>, String> {
    match ai_type {
        "equity" => Ok(Box::new(bot::EquityBot::new(seed, samples))),
        other => Err(format!("Unknown AI type: {}", other)),
    }
}

/// Adapts one [`AIOpponent`] into an [`ActionSource`] acting for every seat.
pub struct BotTable {
    opponent: Box<dyn AIOpponent>,
}

impl BotTable {
    pub fn new(opponent: Box<dyn AIOpponent>) -> Self {
        Self { opponent }
    }
}

impl ActionSource for BotTable {
    fn decide(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction {
        self.opponent.get_action(table, ctx)
    }

    fn rejected(&mut self, ctx: &ActionContext, error: &GameError) {
        // the policy only emits legal raises, so this points at a sizing bug
        warn!(seat = ctx.seat, bot = self.opponent.name(), %error, "bot action rejected");
    }
}
