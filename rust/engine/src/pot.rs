//! Single-pot accounting for one hand.
//!
//! Every committed chip lands in one [`Pot`]. Unequal all-in stacks are not split into side
//! pots: a short stack that wins takes the whole pot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: u32) {
        self.total = self.total.saturating_add(amount);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Empties the pot, returning what it held.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.total)
    }
}

/// Divides `amount` equally among `winners`, which must be listed clockwise starting from the
/// dealer's left. Odd chips go one each to the earliest winners in that order, so the payouts
/// always sum to `amount`.
///
/// ```
/// use holdem_engine::pot::split_pot;
///
/// assert_eq!(split_pot(101, &[3, 1]), vec![(3, 51), (1, 50)]);
/// ```
pub fn split_pot(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = amount / n;
    let remainder = amount % n;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, share + u32::from((i as u32) < remainder)))
        .collect()
}
