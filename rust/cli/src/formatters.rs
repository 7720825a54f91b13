//! Card, board, and action formatters for terminal display.
//!
//! Suits render as Unicode symbols with an ASCII fallback for terminals that cannot show them.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::player::{Player, PlayerAction};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_char().to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.to_char(), format_suit(&card.suit))
}

/// Formatted board string like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// `to_call` decides whether a `Call` reads as a check.
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold, 10), "fold");
/// assert_eq!(format_action(&PlayerAction::Call, 0), "check");
/// assert_eq!(format_action(&PlayerAction::Raise(60), 10), "raise to 60");
/// ```
pub fn format_action(action: &PlayerAction, to_call: u32) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Call if to_call == 0 => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(to) => format!("raise to {}", to),
    }
}

pub fn format_equity(equity: f64) -> String {
    format!("{:.1}%", equity * 100.0)
}

/// Display name: "You" for the human seat, "Bot N" otherwise.
pub fn seat_name(player: &Player) -> String {
    if player.is_human() {
        "You".to_string()
    } else {
        format!("Bot {}", player.id())
    }
}

/// One line per seat: name, stack, and a marker for the dealer and folded or busted seats.
pub fn format_stacks(players: &[Player], dealer: usize) -> Vec<String> {
    players
        .iter()
        .map(|p| {
            let mut line = format!("{:>7}: {:>6}", seat_name(p), p.stack());
            if p.id() == dealer {
                line.push_str(" (D)");
            }
            if p.stack() == 0 && !p.is_active() {
                line.push_str(" [out]");
            }
            line
        })
        .collect()
}
