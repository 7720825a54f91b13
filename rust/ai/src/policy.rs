//! Equity-driven betting policy shared by every bot seat.
//!
//! The policy is a pure function of the bot's equity, its personality, the pot odds it is
//! offered and the street. The two random draws it needs are taken as [`Rolls`] so that the
//! caller owns the RNG and decisions can be replayed.

use rand::Rng;

use holdem_engine::betting::ActionContext;
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction;

/// Lower strength bound of each decision band.
pub const STRONG: f64 = 0.35;
pub const MEDIUM: f64 = 0.25;
pub const MARGINAL: f64 = 0.15;

/// Base probabilities, scaled by [`street_multiplier`].
const STRONG_RAISE_P: f64 = 0.4;
const MEDIUM_RAISE_P: f64 = 0.3;
const BLUFF_P: f64 = 0.05;
/// Marginal hands demand this much margin over the pot odds, scaled by street.
const MARGINAL_EDGE: f64 = 0.05;
/// Weak hands only consider bluff-calling below these pot odds.
const BLUFF_MAX_POT_ODDS: f64 = 0.1;

/// Early streets play looser; the river uses the unscaled thresholds.
pub fn street_multiplier(street: Street) -> f64 {
    match street {
        Street::Preflop => 0.7,
        Street::Flop => 0.8,
        Street::Turn => 0.9,
        Street::River => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Medium,
    Marginal,
    Weak,
}

pub fn band(strength: f64) -> Band {
    if strength >= STRONG {
        Band::Strong
    } else if strength >= MEDIUM {
        Band::Medium
    } else if strength >= MARGINAL {
        Band::Marginal
    } else {
        Band::Weak
    }
}

/// Independent uniform draws in `[0, 1)` taken once per decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rolls {
    pub raise: f64,
    pub bluff: f64,
}

impl Rolls {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            raise: rng.random(),
            bluff: rng.random(),
        }
    }
}

/// Picks an action for the seat described by `ctx`.
///
/// # Examples
///
/// ```
/// use holdem_ai::policy::{decide, Rolls};
/// use holdem_engine::betting::ActionContext;
/// use holdem_engine::logger::Street;
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = ActionContext {
///     seat: 1,
///     street: Street::River,
///     current_bet: 0,
///     committed: 0,
///     to_call: 0,
///     stack: 500,
///     pot: 100,
///     min_raise_to: 1,
///     max_raise_to: 10,
///     big_blind: 10,
/// };
/// // a hopeless hand facing no bet checks instead of folding
/// let rolls = Rolls { raise: 0.9, bluff: 0.9 };
/// assert_eq!(decide(0.02, 0.0, &ctx, rolls), PlayerAction::Call);
/// ```
pub fn decide(equity: f64, personality: f64, ctx: &ActionContext, rolls: Rolls) -> PlayerAction {
    let m = street_multiplier(ctx.street);
    let strength = equity + personality;
    let pot_odds = ctx.pot_odds();

    let action = match band(strength) {
        Band::Strong if rolls.raise < STRONG_RAISE_P * m => raise_or_call(ctx, 2.5, 2.0),
        Band::Medium if rolls.raise < MEDIUM_RAISE_P * m => raise_or_call(ctx, 2.0, 1.5),
        Band::Strong | Band::Medium => PlayerAction::Call,
        Band::Marginal if pot_odds <= strength - MARGINAL_EDGE * m => PlayerAction::Call,
        Band::Weak if pot_odds < BLUFF_MAX_POT_ODDS && rolls.bluff < BLUFF_P * m => {
            PlayerAction::Call
        }
        Band::Marginal | Band::Weak => PlayerAction::Fold,
    };

    if action == PlayerAction::Fold && ctx.to_call == 0 {
        PlayerAction::Call
    } else {
        action
    }
}

/// Raise target: the smaller of `bet_mult` x current bet and `pot_mult` x pot, lifted to the
/// smallest legal raise (a big blind when opening) and clamped to the street cap and the chips
/// the seat holds. `None` when no legal raise is left.
pub fn raise_target(ctx: &ActionContext, bet_mult: f64, pot_mult: f64) -> Option<u32> {
    let by_bet = f64::from(ctx.current_bet) * bet_mult;
    let by_pot = f64::from(ctx.pot) * pot_mult;
    let sized = by_bet.min(by_pot).min(f64::from(ctx.available())) as u32;

    let floor = if ctx.current_bet == 0 {
        ctx.min_raise_to.max(ctx.big_blind)
    } else {
        ctx.min_raise_to
    };
    let target = sized
        .max(floor)
        .min(ctx.max_raise_to)
        .min(ctx.available());
    (target >= ctx.min_raise_to).then_some(target)
}

fn raise_or_call(ctx: &ActionContext, bet_mult: f64, pot_mult: f64) -> PlayerAction {
    raise_target(ctx, bet_mult, pot_mult).map_or(PlayerAction::Call, PlayerAction::Raise)
}
