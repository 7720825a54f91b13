//! Win-probability estimation for a holding against one unknown opponent.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use holdem_engine::cards::{Card, full_deck};
use holdem_engine::hand::evaluate_hand;

/// Default number of Monte Carlo run-outs per estimate.
pub const DEFAULT_SAMPLES: u32 = 200;

/// Estimates the probability of winning with `hole` given the known `board` (0 to 5 cards; undealt
/// cards are simply absent). Implementations must return a value in `[0, 1]` and must not touch
/// any game state beyond the cards they are handed.
pub trait EquityEstimator: Send {
    fn estimate(&mut self, hole: [Card; 2], board: &[Card]) -> f64;
}

/// Samples an opponent holding and the rest of the board from the unseen cards. Wins count 1,
/// ties count one half.
#[derive(Debug, Clone)]
pub struct MonteCarloEquity {
    samples: u32,
    rng: ChaCha8Rng,
}

impl MonteCarloEquity {
    pub fn new(samples: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            samples: samples.max(1),
            rng,
        }
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl EquityEstimator for MonteCarloEquity {
    fn estimate(&mut self, hole: [Card; 2], board: &[Card]) -> f64 {
        let board = &board[..board.len().min(5)];
        let mut unseen: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !hole.contains(c) && !board.contains(c))
            .collect();
        let missing = 5 - board.len();

        let mut mine = Vec::with_capacity(7);
        let mut theirs = Vec::with_capacity(7);
        let mut score = 0.0;
        for _ in 0..self.samples {
            let (drawn, _) = unseen.partial_shuffle(&mut self.rng, 2 + missing);
            let (opponent, runout) = drawn.split_at(2);

            mine.clear();
            mine.extend_from_slice(&hole);
            mine.extend_from_slice(board);
            mine.extend_from_slice(runout);
            theirs.clear();
            theirs.extend_from_slice(opponent);
            theirs.extend_from_slice(board);
            theirs.extend_from_slice(runout);

            score += match evaluate_hand(&mine).cmp(&evaluate_hand(&theirs)) {
                std::cmp::Ordering::Greater => 1.0,
                std::cmp::Ordering::Equal => 0.5,
                std::cmp::Ordering::Less => 0.0,
            };
        }
        (score / f64::from(self.samples)).clamp(0.0, 1.0)
    }
}
