//! Input parsing for the interactive seat.
//!
//! Parsing only recognises the shape of a command. Whether a raise is legal is decided by the
//! engine, which rejects it without changing any state so the seat can be prompted again.

use holdem_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c", "call", or "check" → Call (a check when nothing is owed)
/// - "r X" or "raise X" → raise so the total bet this street is X
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 100"),
///     ParseResult::Action(PlayerAction::Raise(100))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match command {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires a total amount (e.g., 'raise 50')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid raise amount '{}'", amount)),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, q",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms_parse_alike() {
        assert_eq!(parse_player_action("F"), parse_player_action("fold"));
        assert_eq!(parse_player_action("c"), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("check"), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("r 40"), ParseResult::Action(PlayerAction::Raise(40)));
        assert_eq!(parse_player_action(" QUIT "), ParseResult::Quit);
    }

    #[test]
    fn non_numeric_raise_is_invalid() {
        for input in ["raise", "raise lots", "r -5", "raise 0", ""] {
            assert!(
                matches!(parse_player_action(input), ParseResult::Invalid(_)),
                "{input:?} should be invalid"
            );
        }
    }
}
