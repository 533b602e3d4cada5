//! Integration tests for the game, directly and through a Store.

use proptest::prelude::*;
use statecraft_runtime::Store;
use statecraft_testing::{init_test_tracing, properties, ListenerProbe};
use tictactoe::{
    apply_move, jump_to, winner, Game, GameAction, GameConfig, GameError, GameReducer, GameStatus, Mark,
    MoveError, PostWinMoves, Snapshot,
};

#[test]
fn time_travel_truncates_on_branch() {
    let mut history = vec![Snapshot::empty(Mark::O)];
    let mut cursor = 0;
    for position in [0, 1, 2] {
        (history, cursor) = apply_move(history, cursor, position);
    }
    assert_eq!((history.len(), cursor), (4, 3));

    let cursor = jump_to(history.len(), 1).unwrap();
    let (history, cursor) = apply_move(history, cursor, 5);

    assert_eq!(history.len(), 3);
    assert_eq!(cursor, 2);
    assert_eq!(history[2].squares[5], Some(Mark::X));
    assert_eq!(history[2].squares[1], None);
}

#[test]
fn illegal_move_returns_same_history() {
    let mut history = vec![Snapshot::empty(Mark::X)];
    let mut cursor = 0;
    (history, cursor) = apply_move(history, cursor, 4);
    assert_eq!(history[cursor].squares[4], Some(Mark::X));

    let before = history.clone();
    let (after, after_cursor) = apply_move(history, cursor, 4);

    assert_eq!(after, before);
    assert_eq!(after_cursor, cursor);
}

#[test]
fn jump_out_of_range_is_an_error() {
    let mut game = Game::new();
    game.apply_move(0);

    assert_eq!(game.jump_to(2), Err(GameError::JumpOutOfRange { target: 2, len: 2 }));
    assert_eq!(game.cursor(), 1);
}

#[test]
fn post_win_policies() {
    let winning = [0, 3, 1, 4, 2];

    let mut strict = Game::new();
    let mut relaxed = Game::with_config(GameConfig::default().with_post_win_moves(PostWinMoves::Allow));
    for position in winning {
        assert!(strict.apply_move(position));
        assert!(relaxed.apply_move(position));
    }

    assert_eq!(strict.try_apply_move(8), Err(MoveError::GameOver(Mark::O)));
    assert_eq!(relaxed.try_apply_move(8), Ok(()));
    assert_eq!(relaxed.status(), GameStatus::Won(Mark::O));
}

#[test]
fn game_in_store_notifies_and_navigates() {
    init_test_tracing();
    let store = Store::new(GameReducer::default());
    let probe = ListenerProbe::new();
    let _view = probe.attach(&store, "board");

    for action in [
        GameAction::Play(0),
        GameAction::Play(3),
        GameAction::Play(1),
        GameAction::Play(4),
        GameAction::Play(2),
    ] {
        store.dispatch(action);
    }
    assert_eq!(store.state(|game| game.status_line()), "Winner: O");

    let won = store.get_state();
    store.dispatch(GameAction::Play(8));
    assert!(std::sync::Arc::ptr_eq(&won, &store.get_state()));

    store.dispatch(GameAction::JumpTo(0));
    assert_eq!(store.state(|game| game.status_line()), "Next move: O");
    assert_eq!(probe.count("board"), 7);
}

fn game_action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        3 => (0usize..10).prop_map(GameAction::Play),
        1 => (0usize..12).prop_map(GameAction::JumpTo),
    ]
}

proptest! {
    #[test]
    fn history_invariants_hold(
        actions in properties::action_sequence(game_action(), 60),
        allow in any::<bool>(),
    ) {
        let policy = if allow { PostWinMoves::Allow } else { PostWinMoves::Reject };
        let mut game = Game::with_config(GameConfig::default().with_post_win_moves(policy));

        for action in actions {
            match action {
                GameAction::Play(position) => {
                    game.apply_move(position);
                },
                GameAction::JumpTo(target) => {
                    let _ = game.jump_to(target);
                },
            }

            prop_assert!(game.cursor() < game.history().len());
            prop_assert_eq!(&game.history()[0], &Snapshot::empty(Mark::O));
            for snapshot in game.history() {
                prop_assert_eq!(snapshot.winner, winner(&snapshot.squares));
            }
        }
    }

    #[test]
    fn consecutive_snapshots_differ_by_one_mark(positions in proptest::collection::vec(0usize..9, 0..20)) {
        let mut game = Game::new();
        for position in positions {
            game.apply_move(position);
        }

        for pair in game.history().windows(2) {
            let changed = pair[0]
                .squares
                .iter()
                .zip(pair[1].squares.iter())
                .filter(|(before, after)| before != after)
                .count();
            prop_assert_eq!(changed, 1);
            prop_assert_eq!(pair[1].next_mark, pair[0].next_mark.opponent());
        }
    }
}
