//! Exit codes: 0 for success, 2 for every usage, validation or file error. Errors go to stderr.

use holdem_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn sim_success_returns_zero() {
    let (code, out, err) = run_args(&["holdem", "sim", "--players", "4", "--hands", "3", "--seed", "5"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("sim: players=4 hands=3 seed=5"));
    assert!(out.contains("Total chips: 4000 (conserved)"));
}

#[test]
fn too_few_players_is_rejected() {
    let (code, out, err) = run_args(&["holdem", "sim", "--players", "1", "--hands", "1"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("players"), "stderr: {}", err);
}

#[test]
fn too_many_players_is_rejected() {
    let (code, _, err) = run_args(&["holdem", "sim", "--players", "13", "--hands", "1"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error:"), "stderr: {}", err);
}

#[test]
fn play_with_too_many_bots_is_rejected_before_reading_input() {
    let (code, _, err) = run_args(&["holdem", "play", "--bots", "12", "--hands", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));
}

#[test]
fn zero_hands_is_invalid_input() {
    let (code, _, err) = run_args(&["holdem", "sim", "--players", "2", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn zero_stack_is_rejected() {
    let (code, _, err) = run_args(&["holdem", "play", "--stack", "0", "--hands", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("starting_stack"), "stderr: {}", err);
}

#[test]
fn unknown_command_prints_usage() {
    let (code, out, err) = run_args(&["holdem", "deal"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: holdem <command> [options]"));
    for name in ["play", "sim", "cfg"] {
        assert!(err.contains(name));
    }
}

#[test]
fn missing_required_flag_is_usage_error() {
    let (code, _, err) = run_args(&["holdem", "sim"]);
    assert_eq!(code, 2);
    assert!(err.contains("--hands"));
}

#[test]
fn help_goes_to_stdout_with_zero() {
    let (code, out, err) = run_args(&["holdem", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("sim"));
    assert!(err.is_empty());
}
