use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player count {count} is outside the supported range {min}..={max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid card notation: {0}")]
    InvalidCard(String),
    #[error("Deck exhausted")]
    EmptyDeck,
    #[error("Raise to {amount} must exceed the current bet of {current_bet}")]
    RaiseTooSmall { amount: u32, current_bet: u32 },
    #[error("Raise to {amount} exceeds available chips ({available})")]
    RaiseExceedsStack { amount: u32, available: u32 },
    #[error("Raise to {amount} exceeds the maximum of {maximum}")]
    RaiseAboveMaximum { amount: u32, maximum: u32 },
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Not enough players with chips to start a hand")]
    NotEnoughPlayers,
    #[error("Betting round already complete")]
    RoundComplete,
    #[error("Player {0} already folded")]
    PlayerAlreadyFolded(usize),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Player {0} has no hole cards")]
    MissingHoleCards(usize),
}

impl GameError {
    /// Errors after which the acting seat may simply choose again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::RaiseTooSmall { .. }
                | GameError::RaiseExceedsStack { .. }
                | GameError::RaiseAboveMaximum { .. }
        )
    }
}
