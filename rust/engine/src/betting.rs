//! Per-street betting state machine.
//!
//! A [`BettingRound`] lives for one street. It owns what each seat committed on that street,
//! who has acted since the last raise and whose turn it is; chip stacks and the pot are passed
//! in by the orchestrator so that no state outlives the hand.

use tracing::debug;

use crate::errors::GameError;
use crate::game::next_seat;
use crate::logger::Street;
use crate::player::{Player, PlayerAction};
use crate::pot::Pot;
use crate::rules::{max_raise_to, min_raise_to, validate_action, Blinds, ValidatedAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting on the given seat
    AwaitingAction(usize),
    /// Every remaining player acted and matched the bet, or is all-in
    RoundComplete,
    /// All other players folded; the given seat takes the pot
    HandFoldedToOne(usize),
}

/// Snapshot handed to whoever decides for the acting seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub seat: usize,
    pub street: Street,
    /// Highest total commitment on this street
    pub current_bet: u32,
    /// What the seat already committed on this street
    pub committed: u32,
    /// Chips needed to match the current bet (may exceed the stack)
    pub to_call: u32,
    pub stack: u32,
    pub pot: u32,
    pub min_raise_to: u32,
    pub max_raise_to: u32,
    pub big_blind: u32,
}

impl ActionContext {
    /// Largest amount this seat could commit in total this street.
    pub fn available(&self) -> u32 {
        self.stack.saturating_add(self.committed)
    }

    pub fn can_raise(&self) -> bool {
        self.available().min(self.max_raise_to) >= self.min_raise_to
    }

    /// to_call / (pot + to_call); zero when nothing is owed.
    pub fn pot_odds(&self) -> f64 {
        let to_call = self.to_call.min(self.stack);
        if to_call == 0 {
            return 0.0;
        }
        f64::from(to_call) / (f64::from(self.pot) + f64::from(to_call))
    }
}

#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    big_blind: u32,
    current_bet: u32,
    committed: Vec<u32>,
    acted: Vec<bool>,
    status: RoundStatus,
}

impl BettingRound {
    /// Opens a street. Pre-flop, the two funded seats after the dealer post the blinds (short
    /// stacks post what they have) and action starts after the big blind; later streets start
    /// after the dealer with the bet level at zero.
    pub fn start(
        street: Street,
        players: &mut [Player],
        pot: &mut Pot,
        dealer: usize,
        blinds: Blinds,
    ) -> Result<Self, GameError> {
        let n = players.len();
        let mut round = Self {
            street,
            big_blind: blinds.big,
            current_bet: 0,
            committed: vec![0; n],
            acted: vec![false; n],
            status: RoundStatus::RoundComplete,
        };

        let first_from = if street == Street::Preflop {
            let sb = next_seat(players, dealer, Player::can_act).ok_or(GameError::NotEnoughPlayers)?;
            let bb = next_seat(players, sb, Player::can_act).ok_or(GameError::NotEnoughPlayers)?;
            if sb == bb {
                return Err(GameError::NotEnoughPlayers);
            }
            round.post(players, pot, sb, blinds.small)?;
            round.post(players, pot, bb, blinds.big)?;
            round.current_bet = blinds.big;
            debug!(sb, bb, small = blinds.small, big = blinds.big, "blinds posted");
            bb
        } else {
            dealer
        };

        round.status = round.next_status(players, first_from);
        Ok(round)
    }

    fn post(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        seat: usize,
        amount: u32,
    ) -> Result<(), GameError> {
        let paid = amount.min(players[seat].stack());
        players[seat].bet(paid)?;
        self.committed[seat] += paid;
        pot.add(paid);
        Ok(())
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn status(&self) -> RoundStatus {
        self.status
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn committed(&self, seat: usize) -> u32 {
        self.committed[seat]
    }
    pub fn has_acted(&self, seat: usize) -> bool {
        self.acted[seat]
    }

    pub fn context(&self, players: &[Player], pot: &Pot, seat: usize) -> ActionContext {
        let committed = self.committed[seat];
        ActionContext {
            seat,
            street: self.street,
            current_bet: self.current_bet,
            committed,
            to_call: self.current_bet.saturating_sub(committed),
            stack: players[seat].stack(),
            pot: pot.total(),
            min_raise_to: min_raise_to(self.current_bet),
            max_raise_to: max_raise_to(self.street, self.current_bet, pot.total(), self.big_blind),
            big_blind: self.big_blind,
        }
    }

    /// Applies one action for the seat whose turn it is. Rejected actions leave every piece of
    /// state untouched.
    pub fn apply(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        seat: usize,
        action: PlayerAction,
    ) -> Result<RoundStatus, GameError> {
        match self.status {
            RoundStatus::AwaitingAction(expected) if expected == seat => {}
            RoundStatus::AwaitingAction(expected) => {
                return Err(GameError::NotPlayersTurn {
                    expected,
                    actual: seat,
                })
            }
            _ => return Err(GameError::RoundComplete),
        }
        if !players[seat].is_active() {
            return Err(GameError::PlayerAlreadyFolded(seat));
        }

        let max_raise = max_raise_to(self.street, self.current_bet, pot.total(), self.big_blind);
        let validated = validate_action(
            players[seat].stack(),
            self.committed[seat],
            self.current_bet,
            max_raise,
            action,
        )?;

        match validated {
            ValidatedAction::Fold => players[seat].fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(paid) => {
                players[seat].bet(paid)?;
                self.committed[seat] += paid;
                pot.add(paid);
            }
            ValidatedAction::Raise { to, paid } => {
                players[seat].bet(paid)?;
                self.committed[seat] = to;
                self.current_bet = to;
                pot.add(paid);
                // reopen the betting for everyone else
                self.acted.iter_mut().for_each(|a| *a = false);
            }
        }
        self.acted[seat] = true;
        self.status = self.next_status(players, seat);
        Ok(self.status)
    }

    fn needs_action(&self, seat: usize, player: &Player) -> bool {
        player.can_act() && (!self.acted[seat] || self.committed[seat] < self.current_bet)
    }

    /// Resolves the state after an action by `from` (or at street open, with `from` being the
    /// seat the action starts after).
    fn next_status(&self, players: &[Player], from: usize) -> RoundStatus {
        let mut active = players.iter().enumerate().filter(|(_, p)| p.is_active());
        if let (Some((only, _)), None) = (active.next(), active.next()) {
            return RoundStatus::HandFoldedToOne(only);
        }

        // A lone player with chips left who already matches the bet has nobody to bet against.
        let actors: Vec<usize> = (0..players.len())
            .filter(|&s| players[s].can_act())
            .collect();
        if actors.len() <= 1 && actors.iter().all(|&s| self.committed[s] >= self.current_bet) {
            return RoundStatus::RoundComplete;
        }

        match next_seat(players, from, |p| self.needs_action(p.id(), p)) {
            Some(seat) => RoundStatus::AwaitingAction(seat),
            None => RoundStatus::RoundComplete,
        }
    }
}
