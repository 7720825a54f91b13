use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::logger::Street;
use crate::player::PlayerAction as A;

/// Fewest seats a table may start with.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a table may start with: 12 hands plus a board use 29 of the 52 cards.
pub const MAX_PLAYERS: usize = 12;

/// Every chip at the table has to fit in a single `u32` pot.
pub fn table_chips_fit(players: usize, starting_stack: u32) -> bool {
    (players as u64).saturating_mul(u64::from(starting_stack)) <= u64::from(u32::MAX)
}

pub fn validate_player_count(count: usize) -> Result<(), GameError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(GameError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Forced bets posted before the pre-flop deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        if small == 0 || big < small {
            return Err(GameError::InvalidConfig(format!(
                "blinds must satisfy 0 < small ({small}) <= big ({big})"
            )));
        }
        Ok(Self { small, big })
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 5, big: 10 }
    }
}

/// How many times the current bet a single raise may reach on each street.
pub fn raise_cap_multiplier(street: Street) -> u32 {
    match street {
        Street::Preflop => 4,
        Street::Flop | Street::Turn | Street::River => 3,
    }
}

/// Largest legal raise target: the smaller of the street multiple of the current bet and
/// twice the pot, never below one big blind.
pub fn max_raise_to(street: Street, current_bet: u32, pot: u32, big_blind: u32) -> u32 {
    let by_bet = current_bet.saturating_mul(raise_cap_multiplier(street));
    let by_pot = pot.saturating_mul(2);
    by_bet.min(by_pot).max(big_blind)
}

/// Smallest legal raise target.
pub fn min_raise_to(current_bet: u32) -> u32 {
    current_bet.saturating_add(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips actually paid; less than the amount owed means the caller is all-in.
    Call(u32),
    Raise { to: u32, paid: u32 },
}

/// Validates a player action according to betting rules and stack size.
///
/// `committed` is what the player already put in this street and `current_bet` the street's
/// bet level. Calls are capped at the stack (an implicit all-in); raises must strictly exceed the
/// bet level and stay within both the player's chips and `max_raise`.
///
/// # Errors
///
/// - [`GameError::RaiseTooSmall`] - raise target at or below the current bet
/// - [`GameError::RaiseExceedsStack`] - raise target beyond stack plus committed chips
/// - [`GameError::RaiseAboveMaximum`] - raise target beyond the street cap
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // Short call is an all-in for the remaining stack
/// let result = validate_action(60, 0, 100, 400, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(60)));
///
/// // Raising to the current bet is never legal
/// assert!(validate_action(1000, 0, 100, 400, PlayerAction::Raise(100)).is_err());
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    current_bet: u32,
    max_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            let owed = current_bet.saturating_sub(committed);
            if owed == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Ok(ValidatedAction::Call(owed.min(stack)))
            }
        }
        A::Raise(to) => {
            if to <= current_bet {
                return Err(GameError::RaiseTooSmall {
                    amount: to,
                    current_bet,
                });
            }
            let available = stack.saturating_add(committed);
            if to > available {
                return Err(GameError::RaiseExceedsStack {
                    amount: to,
                    available,
                });
            }
            if to > max_raise {
                return Err(GameError::RaiseAboveMaximum {
                    amount: to,
                    maximum: max_raise,
                });
            }
            Ok(ValidatedAction::Raise {
                to,
                paid: to - committed,
            })
        }
    }
}
