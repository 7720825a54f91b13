use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::betting::{ActionContext, BettingRound, RoundStatus};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{clockwise_from_dealer, next_seat, seat_players, TableConfig};
use crate::hand::evaluate_hand;
use crate::logger::{
    format_hand_id, today, ActionRecord, HandRecord, Payout, ShowdownInfo, ShownHand, Street,
};
use crate::player::{Player, PlayerAction};
use crate::pot::{split_pot, Pot};

/// Read-only view of the table offered to decision makers and displays.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub players: &'a [Player],
    pub board: &'a [Card],
    pub pot: u32,
    pub dealer: usize,
    pub street: Street,
}

/// Anything that chooses actions for seats: an interactive prompt, a bot, or a mix.
///
/// `decide` blocks until an action is available. When the engine rejects the action (an
/// illegal raise) it reports the error through `rejected` and asks the same seat again.
pub trait ActionSource {
    fn decide(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction;

    fn rejected(&mut self, _ctx: &ActionContext, _error: &GameError) {}
}

/// State that lives for exactly one hand.
#[derive(Debug)]
struct HandState {
    deck: Deck,
    seed: Option<u64>,
    board: Vec<Card>,
    pot: Pot,
    actions: Vec<ActionRecord>,
}

/// Core game engine that orchestrates hands for a table of 2 to 12 players.
/// Between hands only chip stacks, bot personalities and the dealer seat persist.
///
/// # Examples
///
/// ```
/// use holdem_engine::betting::ActionContext;
/// use holdem_engine::engine::{ActionSource, Engine, TableView};
/// use holdem_engine::game::TableConfig;
/// use holdem_engine::player::PlayerAction;
///
/// struct Caller;
/// impl ActionSource for Caller {
///     fn decide(&mut self, _: &TableView<'_>, _: &ActionContext) -> PlayerAction {
///         PlayerAction::Call
///     }
/// }
///
/// let config = TableConfig { players: 3, seed: Some(7), ..TableConfig::default() };
/// let mut engine = Engine::new(config).unwrap();
/// let before = engine.total_chips();
/// let record = engine.play_hand(&mut Caller).unwrap();
/// assert_eq!(record.board.len(), 5);
/// assert_eq!(engine.total_chips(), before);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    rng: ChaCha20Rng,
    players: Vec<Player>,
    dealer: usize,
    hands_played: u32,
    date: String,
}

impl Engine {
    /// Validates the configuration and seats the table.
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        let players = seat_players(&config, &mut rng);
        Ok(Self {
            config,
            rng,
            players,
            dealer: 0,
            hands_played: 0,
            date: today(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.stack())).sum()
    }

    /// Seats that still hold chips.
    pub fn funded_players(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    /// Plays one hand with a freshly shuffled deck derived from the table seed.
    pub fn play_hand(&mut self, source: &mut dyn ActionSource) -> Result<HandRecord, GameError> {
        let seed: u64 = self.rng.random();
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        self.run_hand(deck, Some(seed), source)
    }

    /// Plays one hand dealing from `deck` as given: hole cards first (two per funded seat in
    /// seat order), then flop, turn and river.
    pub fn play_hand_with_deck(
        &mut self,
        deck: Deck,
        source: &mut dyn ActionSource,
    ) -> Result<HandRecord, GameError> {
        self.run_hand(deck, None, source)
    }

    fn run_hand(
        &mut self,
        deck: Deck,
        seed: Option<u64>,
        source: &mut dyn ActionSource,
    ) -> Result<HandRecord, GameError> {
        if self.funded_players() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        self.players.iter_mut().for_each(Player::reset_for_hand);
        if !self.players[self.dealer].is_active() {
            self.dealer = next_seat(&self.players, self.dealer, Player::is_active)
                .ok_or(GameError::NotEnoughPlayers)?;
        }

        let mut hand = HandState {
            deck,
            seed,
            board: Vec::with_capacity(5),
            pot: Pot::new(),
            actions: Vec::new(),
        };

        for player in self.players.iter_mut().filter(|p| p.is_active()) {
            let hole = [hand.deck.draw()?, hand.deck.draw()?];
            player.set_hole_cards(hole);
        }

        let mut uncontested = None;
        for street in Street::ALL {
            for _ in 0..street.cards_dealt() {
                let card = hand.deck.draw()?;
                hand.board.push(card);
            }
            if let Some(winner) = self.run_betting_round(street, &mut hand, source)? {
                uncontested = Some(winner);
                break;
            }
        }

        let record = match uncontested {
            Some(winner) => self.award_uncontested(hand, winner),
            None => self.showdown(hand)?,
        };
        info!(
            hand_id = %record.hand_id,
            pot = record.pot,
            result = record.result.as_deref().unwrap_or(""),
            "hand complete"
        );

        self.hands_played += 1;
        self.rotate_dealer();
        Ok(record)
    }

    /// Runs one street. Returns the winner when everyone else folded.
    fn run_betting_round(
        &mut self,
        street: Street,
        hand: &mut HandState,
        source: &mut dyn ActionSource,
    ) -> Result<Option<usize>, GameError> {
        let mut round = BettingRound::start(
            street,
            &mut self.players,
            &mut hand.pot,
            self.dealer,
            self.config.blinds,
        )?;

        loop {
            let seat = match round.status() {
                RoundStatus::RoundComplete => return Ok(None),
                RoundStatus::HandFoldedToOne(winner) => return Ok(Some(winner)),
                RoundStatus::AwaitingAction(seat) => seat,
            };
            let ctx = round.context(&self.players, &hand.pot, seat);
            let action = {
                let view = TableView {
                    players: &self.players,
                    board: &hand.board,
                    pot: hand.pot.total(),
                    dealer: self.dealer,
                    street,
                };
                source.decide(&view, &ctx)
            };

            let before = self.players[seat].stack();
            match round.apply(&mut self.players, &mut hand.pot, seat, action) {
                Ok(_) => {
                    let paid = before - self.players[seat].stack();
                    debug!(seat, street = street.as_str(), ?action, paid, "action applied");
                    hand.actions.push(ActionRecord {
                        player_id: seat,
                        street,
                        action,
                        paid,
                    });
                }
                Err(e) if e.is_recoverable() => {
                    warn!(seat, ?action, error = %e, "action rejected");
                    source.rejected(&ctx, &e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn award_uncontested(&mut self, mut hand: HandState, winner: usize) -> HandRecord {
        let pot = hand.pot.take();
        self.players[winner].add_chips(pot);
        let result = format!("Player {} wins {} uncontested", winner, pot);
        self.build_record(
            hand,
            pot,
            vec![Payout {
                player_id: winner,
                amount: pot,
            }],
            result,
            None,
        )
    }

    fn showdown(&mut self, mut hand: HandState) -> Result<HandRecord, GameError> {
        let mut shown = Vec::new();
        for seat in clockwise_from_dealer(self.players.len(), self.dealer) {
            let player = &self.players[seat];
            if !player.is_active() {
                continue;
            }
            let hole = player
                .hole_cards()
                .ok_or(GameError::MissingHoleCards(seat))?;
            let mut cards = hole.to_vec();
            cards.extend_from_slice(&hand.board);
            shown.push(ShownHand {
                player_id: seat,
                hole,
                strength: evaluate_hand(&cards),
            });
        }

        let best = shown
            .iter()
            .map(|h| &h.strength)
            .max()
            .cloned()
            .ok_or(GameError::NotEnoughPlayers)?;
        // already clockwise from the dealer's left, which is the odd-chip order
        let winners: Vec<usize> = shown
            .iter()
            .filter(|h| h.strength == best)
            .map(|h| h.player_id)
            .collect();

        let pot = hand.pot.take();
        let payouts: Vec<Payout> = split_pot(pot, &winners)
            .into_iter()
            .map(|(player_id, amount)| {
                self.players[player_id].add_chips(amount);
                Payout { player_id, amount }
            })
            .collect();

        let names: Vec<String> = winners.iter().map(|w| format!("Player {}", w)).collect();
        let result = if winners.len() > 1 {
            format!("{} split {} with {}", names.join(", "), pot, best.category)
        } else {
            format!("{} wins {} with {}", names.join(", "), pot, best.category)
        };
        let notes = (winners.len() > 1).then(|| "split pot".to_string());
        let showdown = ShowdownInfo {
            hands: shown,
            winners,
            notes,
        };
        Ok(self.build_record(hand, pot, payouts, result, Some(showdown)))
    }

    fn build_record(
        &self,
        hand: HandState,
        pot: u32,
        payouts: Vec<Payout>,
        result: String,
        showdown: Option<ShowdownInfo>,
    ) -> HandRecord {
        HandRecord {
            hand_id: format_hand_id(&self.date, self.hands_played + 1),
            seed: hand.seed,
            dealer: self.dealer,
            blinds: self.config.blinds,
            actions: hand.actions,
            board: hand.board,
            pot,
            payouts,
            result: Some(result),
            ts: None,
            showdown,
        }
    }

    /// Moves the button to the next seat that still holds chips.
    fn rotate_dealer(&mut self) {
        if let Some(next) = next_seat(&self.players, self.dealer, |p| p.stack() > 0) {
            self.dealer = next;
        }
    }
}
