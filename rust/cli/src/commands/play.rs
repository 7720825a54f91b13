//! # Play Command
//!
//! Interactive play from seat 0 against equity-driven bots.
//!
//! The human seat reads one line per decision. Unparsable input is re-prompted locally; illegal
//! raises are rejected by the engine, which leaves the betting state untouched and asks again.
//! `quit` or end of input folds the pending decision and ends the session once the hand is over.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    format_action, format_board, format_card, format_equity, format_stacks, seat_name,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::equity::{EquityEstimator, MonteCarloEquity};
use holdem_ai::{AIOpponent, create_ai};
use holdem_engine::betting::ActionContext;
use holdem_engine::engine::{ActionSource, Engine, TableView};
use holdem_engine::errors::GameError;
use holdem_engine::logger::HandRecord;
use holdem_engine::player::PlayerAction;
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// `config.players` counts the human. The session ends after `hands` hands, when the human
/// quits or runs out of input, when the human is busted, or when the bots have no chips left.
///
/// # Examples
///
/// ```
/// use holdem_cli::commands::play::handle_play_command;
/// use holdem_cli::config::Config;
/// use std::io::Cursor;
///
/// let config = Config { players: 2, seed: Some(3), equity_samples: 16, ..Config::default() };
/// let mut input = Cursor::new("fold\nq\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_play_command(&config, 5, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hand 1"));
/// ```
pub fn handle_play_command(
    config: &Config,
    hands: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut table = config.table_config(true);
    table.seed = Some(seed);
    let mut eng = Engine::new(table)?;

    writeln!(
        out,
        "play: bots={} hands={} seed={}",
        config.players - 1,
        hands,
        seed
    )?;
    writeln!(
        out,
        "Blinds: SB={} BB={}  Starting stack: {}",
        config.small_blind, config.big_blind, config.starting_stack
    )?;

    let bots = create_ai("equity", Some(seed.wrapping_add(1)), config.equity_samples)
        .map_err(CliError::Engine)?;
    let equity = MonteCarloEquity::new(config.equity_samples, Some(seed.wrapping_add(2)));
    let mut seat = HumanSeat {
        bots,
        equity,
        out,
        err,
        input: stdin,
        quit: false,
        io_error: None,
    };

    for i in 1..=hands {
        if seat.quit {
            break;
        }
        if eng.players()[0].stack() == 0 {
            writeln!(seat.out, "You are out of chips.")?;
            break;
        }
        if eng.funded_players() < 2 {
            writeln!(seat.out, "You hold every chip at the table.")?;
            break;
        }

        writeln!(seat.out)?;
        writeln!(
            seat.out,
            "Hand {}  (dealer: {})",
            i,
            seat_name(&eng.players()[eng.dealer()])
        )?;
        let record = eng.play_hand(&mut seat)?;
        if let Some(e) = seat.io_error.take() {
            return Err(CliError::Io(e));
        }
        report_hand(seat.out, &eng, &record)?;
    }

    writeln!(seat.out)?;
    writeln!(seat.out, "Session completed. Hands played: {}", eng.hands_played())?;
    for line in format_stacks(eng.players(), eng.dealer()) {
        writeln!(seat.out, "{}", line)?;
    }
    Ok(())
}

fn report_hand(out: &mut dyn Write, eng: &Engine, record: &HandRecord) -> Result<(), CliError> {
    writeln!(out, "Board: {}", format_board(&record.board))?;
    if let Some(showdown) = &record.showdown {
        for shown in &showdown.hands {
            let name = seat_name(&eng.players()[shown.player_id]);
            writeln!(
                out,
                "  {}: {} {}  {}",
                name,
                format_card(&shown.hole[0]),
                format_card(&shown.hole[1]),
                shown.strength.category
            )?;
        }
    }
    for payout in &record.payouts {
        writeln!(
            out,
            "{} wins {}",
            seat_name(&eng.players()[payout.player_id]),
            payout.amount
        )?;
    }
    if let Some(notes) = record.showdown.as_ref().and_then(|s| s.notes.as_deref()) {
        writeln!(out, "({})", notes)?;
    }
    for line in format_stacks(eng.players(), eng.dealer()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Decides for every seat: prompts for the human, delegates to the bot for everyone else.
struct HumanSeat<'a> {
    bots: Box<dyn AIOpponent>,
    equity: MonteCarloEquity,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
    quit: bool,
    /// First write failure; the hand is finished with folds and the error surfaces afterwards.
    io_error: Option<std::io::Error>,
}

impl HumanSeat<'_> {
    fn show_spot(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> std::io::Result<()> {
        let me = &table.players[ctx.seat];
        writeln!(self.out, "-- {} --", ctx.street.as_str())?;
        writeln!(self.out, "Board: {}  Pot: {}", format_board(table.board), table.pot)?;
        if let Some(hole) = me.hole_cards() {
            let eq = self.equity.estimate(hole, table.board);
            writeln!(
                self.out,
                "Your cards: {} {}  Stack: {}  Equity: {}",
                format_card(&hole[0]),
                format_card(&hole[1]),
                me.stack(),
                format_equity(eq)
            )?;
        }
        let call = if ctx.to_call == 0 {
            "check".to_string()
        } else {
            format!("call {}", ctx.to_call.min(ctx.stack))
        };
        if ctx.can_raise() {
            writeln!(
                self.out,
                "To call: {}  Options: fold, {}, raise <{}-{}>",
                ctx.to_call,
                call,
                ctx.min_raise_to,
                ctx.max_raise_to.min(ctx.available())
            )
        } else {
            writeln!(self.out, "To call: {}  Options: fold, {}", ctx.to_call, call)
        }
    }

    fn ask_human(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> std::io::Result<PlayerAction> {
        self.show_spot(table, ctx)?;
        loop {
            ui::prompt(self.out, "Enter action (fold/call/check/raise <to>/q): ")?;
            let Some(line) = read_stdin_line(self.input) else {
                writeln!(self.out)?;
                self.quit = true;
                return Ok(PlayerAction::Fold);
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return Ok(action),
                ParseResult::Quit => {
                    self.quit = true;
                    return Ok(PlayerAction::Fold);
                }
                ParseResult::Invalid(msg) => ui::write_error(self.err, &msg)?,
            }
        }
    }

    fn record_io(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            self.io_error.get_or_insert(e);
        }
    }
}

impl ActionSource for HumanSeat<'_> {
    fn decide(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction {
        let player = &table.players[ctx.seat];
        if !player.is_human() {
            let action = self.bots.get_action(table, ctx);
            let line = format!("{}: {}", seat_name(player), format_action(&action, ctx.to_call));
            let result = writeln!(self.out, "{}", line);
            self.record_io(result);
            return action;
        }

        if self.quit || self.io_error.is_some() {
            return PlayerAction::Fold;
        }
        match self.ask_human(table, ctx) {
            Ok(action) => action,
            Err(e) => {
                self.io_error = Some(e);
                PlayerAction::Fold
            }
        }
    }

    fn rejected(&mut self, _ctx: &ActionContext, error: &GameError) {
        let result = ui::write_error(self.err, &format!("Invalid action: {}", error));
        self.record_io(result);
    }
}
