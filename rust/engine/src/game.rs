use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{Player, PERSONALITY_RANGE, STARTING_STACK};
use crate::rules::{table_chips_fit, validate_player_count, Blinds};

/// Everything needed to seat a table. Validated before any hand can start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Total seats, human included
    pub players: usize,
    pub starting_stack: u32,
    pub blinds: Blinds,
    /// Master seed; every deck and personality derives from it
    pub seed: Option<u64>,
    /// Seat 0 is controlled by a human
    pub human_seat: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: 6,
            starting_stack: STARTING_STACK,
            blinds: Blinds::default(),
            seed: None,
            human_seat: false,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        validate_player_count(self.players)?;
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be >0".to_string(),
            ));
        }
        if !table_chips_fit(self.players, self.starting_stack) {
            return Err(GameError::InvalidConfig(format!(
                "{} seats of {} chips exceed the {} chips a pot can hold",
                self.players,
                self.starting_stack,
                u32::MAX
            )));
        }
        Blinds::new(self.blinds.small, self.blinds.big)?;
        Ok(())
    }
}

/// Seats the table: seat 0 is human when configured, every other seat is a bot whose
/// personality is drawn once here and never changes.
pub fn seat_players<R: Rng + ?Sized>(config: &TableConfig, rng: &mut R) -> Vec<Player> {
    (0..config.players)
        .map(|id| {
            if id == 0 && config.human_seat {
                Player::new_human(id, config.starting_stack)
            } else {
                let personality = rng.random_range(-PERSONALITY_RANGE..=PERSONALITY_RANGE);
                Player::new_bot(id, config.starting_stack, personality)
            }
        })
        .collect()
}

/// First seat clockwise after `from` (exclusive, wrapping back to `from` last) matching `pred`.
pub fn next_seat<F>(players: &[Player], from: usize, pred: F) -> Option<usize>
where
    F: Fn(&Player) -> bool,
{
    let n = players.len();
    (1..=n).map(|i| (from + i) % n).find(|&s| pred(&players[s]))
}

/// Seats in clockwise order starting at the dealer's left.
pub fn clockwise_from_dealer(player_count: usize, dealer: usize) -> impl Iterator<Item = usize> {
    (1..=player_count).map(move |i| (dealer + i) % player_count)
}
