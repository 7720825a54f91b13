use holdem_ai::{create_ai, AIOpponent, BotTable};
use holdem_engine::betting::ActionContext;
use holdem_engine::engine::{Engine, TableView};
use holdem_engine::errors::GameError;
use holdem_engine::game::TableConfig;
use holdem_engine::player::PlayerAction;

fn engine(players: usize, seed: u64) -> Engine {
    Engine::new(TableConfig {
        players,
        seed: Some(seed),
        ..TableConfig::default()
    })
    .expect("valid table")
}

#[test]
fn bot_session_conserves_chips() {
    let mut eng = engine(6, 5);
    let mut bots = BotTable::new(create_ai("equity", Some(5), 48).unwrap());
    let total = eng.total_chips();
    for _ in 0..60 {
        if eng.funded_players() < 2 {
            break;
        }
        let record = eng.play_hand(&mut bots).expect("hand completes");
        assert_eq!(record.paid_out(), record.pot);
        assert_eq!(eng.total_chips(), total);
    }
}

#[test]
fn bots_never_submit_illegal_raises() {
    struct Checked {
        inner: Box<dyn AIOpponent>,
    }
    impl AIOpponent for Checked {
        fn get_action(&mut self, table: &TableView<'_>, ctx: &ActionContext) -> PlayerAction {
            let action = self.inner.get_action(table, ctx);
            if let PlayerAction::Raise(to) = action {
                assert!(to >= ctx.min_raise_to, "{to} below {}", ctx.min_raise_to);
                assert!(to <= ctx.max_raise_to, "{to} above {}", ctx.max_raise_to);
                assert!(to <= ctx.available(), "{to} beyond chips");
            }
            action
        }
        fn name(&self) -> &str {
            "Checked"
        }
    }

    let mut eng = engine(9, 12);
    let inner = create_ai("equity", Some(12), 32).unwrap();
    let mut bots = BotTable::new(Box::new(Checked { inner }));
    for _ in 0..40 {
        match eng.play_hand(&mut bots) {
            Ok(_) => {}
            Err(GameError::NotEnoughPlayers) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}

#[test]
fn seeded_sessions_replay_identically() {
    let run = || {
        let mut eng = engine(4, 77);
        let mut bots = BotTable::new(create_ai("equity", Some(77), 32).unwrap());
        (0..10)
            .map_while(|_| eng.play_hand(&mut bots).ok())
            .map(|r| (r.board, r.actions, r.payouts))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
