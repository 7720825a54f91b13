use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::game::TableConfig;
use holdem_engine::player::{Controller, PERSONALITY_RANGE};
use holdem_engine::rules::{Blinds, MAX_PLAYERS, MIN_PLAYERS};

fn table(players: usize) -> TableConfig {
    TableConfig {
        players,
        seed: Some(17),
        ..TableConfig::default()
    }
}

#[test]
fn player_count_outside_bounds_is_rejected() {
    for count in [0, 1, 13, 40] {
        let err = Engine::new(table(count)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS
            }
        );
    }
}

#[test]
fn full_table_of_twelve_plays_a_hand() {
    struct Caller;
    impl holdem_engine::engine::ActionSource for Caller {
        fn decide(
            &mut self,
            _: &holdem_engine::engine::TableView<'_>,
            _: &holdem_engine::betting::ActionContext,
        ) -> holdem_engine::player::PlayerAction {
            holdem_engine::player::PlayerAction::Call
        }
    }
    let mut eng = Engine::new(table(12)).unwrap();
    let record = eng.play_hand(&mut Caller).unwrap();
    assert_eq!(record.board.len(), 5);
}

#[test]
fn every_seat_starts_with_the_configured_stack() {
    let config = TableConfig {
        starting_stack: 250,
        ..table(5)
    };
    let eng = Engine::new(config).unwrap();
    assert_eq!(eng.players().len(), 5);
    assert!(eng.players().iter().all(|p| p.stack() == 250));
    assert_eq!(eng.total_chips(), 1_250);
}

#[test]
fn bot_personalities_are_bounded_and_seeded() {
    let a = Engine::new(table(12)).unwrap();
    let b = Engine::new(table(12)).unwrap();
    for (pa, pb) in a.players().iter().zip(b.players()) {
        assert!(pa.personality().abs() <= PERSONALITY_RANGE);
        assert_eq!(pa.personality(), pb.personality());
    }
}

#[test]
fn human_takes_seat_zero_when_requested() {
    let config = TableConfig {
        human_seat: true,
        ..table(4)
    };
    let eng = Engine::new(config).unwrap();
    assert_eq!(eng.players()[0].controller(), Controller::Human);
    assert!(eng.players()[1..].iter().all(|p| !p.is_human()));
}

#[test]
fn invalid_stack_or_blinds_are_rejected() {
    let zero_stack = TableConfig {
        starting_stack: 0,
        ..table(3)
    };
    assert!(matches!(
        Engine::new(zero_stack),
        Err(GameError::InvalidConfig(_))
    ));
    assert!(Blinds::new(10, 5).is_err());
    assert!(Blinds::new(0, 10).is_err());
    let inverted = TableConfig {
        blinds: Blinds { small: 20, big: 10 },
        ..table(3)
    };
    assert!(Engine::new(inverted).is_err());
}

#[test]
fn table_holding_more_chips_than_a_pot_can_is_rejected() {
    let oversized = TableConfig {
        starting_stack: 3_000_000_000,
        ..table(2)
    };
    assert!(matches!(
        Engine::new(oversized),
        Err(GameError::InvalidConfig(_))
    ));

    let at_limit = TableConfig {
        starting_stack: u32::MAX / 12,
        ..table(12)
    };
    let eng = Engine::new(at_limit).unwrap();
    assert!(eng.total_chips() <= u64::from(u32::MAX));
}
