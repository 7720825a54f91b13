use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Unseeded deck drawing its shuffle entropy from the operating system.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// A stacked deck that deals `cards` in the given order. Used for replays and fixed scenarios.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self.cards.get(self.position).ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        Ok(c)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.remaining() {
            return Err(GameError::EmptyDeck);
        }
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet drawn, top first.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position.min(self.cards.len())..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
