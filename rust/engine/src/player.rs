use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// The set is closed: anything a seat can do is one of these three moves.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the current bet, or check when nothing is owed
    Call,
    /// Raise so the player's total commitment this street becomes the given amount
    Raise(u32),
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// Bot personalities are drawn from `[-PERSONALITY_RANGE, PERSONALITY_RANGE]`.
pub const PERSONALITY_RANGE: f64 = 0.1;

/// Who decides for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    /// `personality` shifts the bot's perceived hand strength; fixed for the player's lifetime.
    Bot { personality: f64 },
}

/// Represents a poker player with their chip stack, controller and hole cards.
/// Manages chip operations (betting, adding chips) and card management.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index; 0 is the human when one is seated
    id: usize,
    /// Current chip stack
    stack: u32,
    controller: Controller,
    /// Hole cards, dealt once per hand
    hole: Option<[Card; 2]>,
    /// Still contesting the current hand
    in_hand: bool,
}

impl Player {
    pub fn new_human(id: usize, stack: u32) -> Self {
        Self::new(id, stack, Controller::Human)
    }

    pub fn new_bot(id: usize, stack: u32, personality: f64) -> Self {
        let personality = personality.clamp(-PERSONALITY_RANGE, PERSONALITY_RANGE);
        Self::new(id, stack, Controller::Bot { personality })
    }

    fn new(id: usize, stack: u32, controller: Controller) -> Self {
        Self {
            id,
            stack,
            controller,
            hole: None,
            in_hand: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn controller(&self) -> Controller {
        self.controller
    }
    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    /// Personality bias; zero for the human seat.
    pub fn personality(&self) -> f64 {
        match self.controller {
            Controller::Bot { personality } => personality,
            Controller::Human => 0.0,
        }
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }

    pub fn set_hole_cards(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    /// Starts a new hand: cards cleared, and only seats holding chips are dealt in.
    pub fn reset_for_hand(&mut self) {
        self.hole = None;
        self.in_hand = self.stack > 0;
    }

    pub fn is_active(&self) -> bool {
        self.in_hand
    }

    /// Active and still holding chips to bet with.
    pub fn can_act(&self) -> bool {
        self.in_hand && self.stack > 0
    }

    pub fn fold(&mut self) {
        self.in_hand = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_never_drives_stack_negative() {
        let mut p = Player::new_human(0, 50);
        assert_eq!(
            p.bet(60),
            Err(GameError::InsufficientChips {
                needed: 60,
                available: 50
            })
        );
        assert_eq!(p.stack(), 50);
        p.bet(50).unwrap();
        assert_eq!(p.stack(), 0);
    }

    #[test]
    fn personality_is_clamped_to_range() {
        assert_eq!(Player::new_bot(1, 100, 0.5).personality(), PERSONALITY_RANGE);
        assert_eq!(Player::new_bot(1, 100, -0.5).personality(), -PERSONALITY_RANGE);
        assert_eq!(Player::new_human(0, 100).personality(), 0.0);
    }

    #[test]
    fn busted_player_is_not_dealt_in() {
        let mut p = Player::new_bot(2, 0, 0.0);
        p.reset_for_hand();
        assert!(!p.is_active());
        p.add_chips(10);
        p.reset_for_hand();
        assert!(p.is_active() && p.can_act());
    }
}
