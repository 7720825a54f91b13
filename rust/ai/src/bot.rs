//! The equity-driven bot used for every computer seat.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use holdem_engine::betting::ActionContext;
use holdem_engine::engine::TableView;
use holdem_engine::player::PlayerAction;

use crate::AIOpponent;
use crate::equity::{EquityEstimator, MonteCarloEquity};
use crate::policy::{self, Rolls};

/// Estimates equity for the acting seat, adds that seat's personality and hands the result to
/// [`policy::decide`]. One instance serves any number of seats; personalities live on the
/// players themselves.
pub struct EquityBot {
    estimator: Box<dyn EquityEstimator>,
    rng: ChaCha8Rng,
}

impl EquityBot {
    /// Seeded bots make identical decisions for identical tables.
    pub fn new(seed: Option<u64>, samples: u32) -> Self {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        let estimator = MonteCarloEquity::new(samples, Some(rng.random()));
        Self::with_estimator(Box::new(estimator), rng)
    }

    pub fn with_estimator(estimator: Box<dyn EquityEstimator>, rng: ChaCha8Rng) -> Self {
        Self { estimator, rng }
    }
}

impl AIOpponent for EquityBot {
    fn get_action(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction {
        let player = &table.players[ctx.seat];
        let Some(hole) = player.hole_cards() else {
            return PlayerAction::Call;
        };
        let equity = self.estimator.estimate(hole, table.board);
        let rolls = Rolls::draw(&mut self.rng);
        let action = policy::decide(equity, player.personality(), ctx, rolls);
        debug!(
            seat = ctx.seat,
            street = ctx.street.as_str(),
            equity,
            personality = player.personality(),
            ?action,
            "bot decision"
        );
        action
    }

    fn name(&self) -> &str {
        "EquityBot"
    }
}
