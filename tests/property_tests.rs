//! Property-based tests over random action sequences.
//!
//! Actions are drawn from slightly beyond the action space so that
//! off-board, occupied and non-capturing actions are all exercised.

use proptest::prelude::*;
use reversi_env::core::{Board, Coord, EnvConfig, Player};
use reversi_env::env::ReversiEnv;
use reversi_env::replay::{replay, ActionLog};
use reversi_env::rules::{self, GameResult};

// =============================================================================
// Strategies
// =============================================================================

/// Even board sizes small enough to finish games quickly.
fn arb_size() -> impl Strategy<Value = usize> {
    prop_oneof![Just(4usize), Just(6usize), Just(8usize)]
}

/// A board size with a raw action sequence for it.
fn arb_episode() -> impl Strategy<Value = (usize, Vec<usize>)> {
    arb_size().prop_flat_map(|size| {
        let n = size * size;
        (Just(size), proptest::collection::vec(0..n + 4, 0..160))
    })
}

/// Position reached by legal play, with moves chosen by index.
fn arb_reachable_board() -> impl Strategy<Value = Board> {
    (arb_size(), proptest::collection::vec(0usize..64, 0..60)).prop_map(|(size, picks)| {
        let mut board = Board::new(size).unwrap();
        for pick in picks {
            let moves = rules::legal_moves(&board);
            if moves.is_empty() {
                break;
            }
            rules::apply_move(&mut board, moves[pick % moves.len()]).unwrap();
        }
        board
    })
}

fn new_env(size: usize) -> ReversiEnv {
    let mut env = ReversiEnv::new(EnvConfig::default().with_board_size(size)).unwrap();
    env.reset(Some(0));
    env
}

// =============================================================================
// Step Invariants
// =============================================================================

proptest! {
    #[test]
    fn prop_step_conserves_pieces((size, actions) in arb_episode()) {
        let mut env = new_env(size);

        for action in actions {
            let before = env.board().clone();
            let mover = before.current_player();
            let result = env.step(action);

            if result.info.error.is_some() {
                prop_assert_eq!(result.reward, 0.0);
                prop_assert_eq!(env.board(), &before);
                continue;
            }

            let after = env.board();
            let flipped = result.info.flipped;
            prop_assert!(flipped >= 1);
            prop_assert_eq!(after.occupied_count(), before.occupied_count() + 1);
            prop_assert_eq!(after.count(mover), before.count(mover) + flipped + 1);
            prop_assert_eq!(after.count(mover.opponent()), before.count(mover.opponent()) - flipped);

            let base = f64::from(mover.sign()) * flipped as f64;
            let bonus = match result.info.winner {
                Some(GameResult::Winner(Player::A)) => 100.0,
                Some(GameResult::Winner(Player::B)) => -100.0,
                _ => 0.0,
            };
            prop_assert_eq!(result.reward, base + bonus);
        }
    }

    #[test]
    fn prop_termination_matches_legal_moves((size, actions) in arb_episode()) {
        let mut env = new_env(size);

        for action in actions {
            let result = env.step(action);
            let board = env.board();
            let anyone_can_move = Player::ALL.iter().any(|&p| rules::has_legal_move(board, p));

            prop_assert_eq!(result.terminated, !anyone_can_move);
            if !result.terminated {
                prop_assert!(rules::has_legal_move(board, board.current_player()));
                prop_assert_eq!(env.winner(), None);
            }
        }
    }

    #[test]
    fn prop_illegal_step_is_idempotent((size, actions) in arb_episode()) {
        let mut env = new_env(size);
        for action in actions {
            env.step(action);
        }

        let before = env.board().clone();
        let illegal = (0..size * size + 1)
            .find(|&a| !env.legal_actions().contains(&a))
            .unwrap();

        let first = env.step(illegal);
        let second = env.step(illegal);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(env.board(), &before);
    }

    #[test]
    fn prop_replay_reproduces_episode((size, actions) in arb_episode()) {
        let mut env = new_env(size);
        for action in actions {
            env.step(action);
        }

        let replayed = replay(&ActionLog::from_env(&env)).unwrap();
        prop_assert_eq!(replayed.board(), env.board());
        prop_assert_eq!(replayed.history(), env.history());
    }
}

// =============================================================================
// Board Invariants
// =============================================================================

proptest! {
    #[test]
    fn prop_mask_matches_legality(board in arb_reachable_board()) {
        let size = board.size();
        let mask = rules::legal_action_mask(&board);
        prop_assert_eq!(mask.len(), size * size);

        for (action, &legal) in mask.iter().enumerate() {
            let coord = Coord::from_action(action, size);
            prop_assert_eq!(legal, rules::is_legal(&board, coord));
            if legal {
                prop_assert!(board.cell(coord).is_some_and(|c| c.is_empty()));
            }
        }
    }

    #[test]
    fn prop_signed_round_trip(board in arb_reachable_board()) {
        let rebuilt = Board::from_signed(board.size(), &board.to_signed(), board.current_player()).unwrap();
        prop_assert_eq!(rebuilt, board);
    }

    #[test]
    fn prop_winner_follows_piece_count(board in arb_reachable_board()) {
        let (a, b) = rules::score(&board);
        prop_assert_eq!(a + b, board.occupied_count());

        match rules::winner(&board) {
            None => prop_assert!(!board.is_terminal()),
            Some(GameResult::Draw) => prop_assert_eq!(a, b),
            Some(GameResult::Winner(Player::A)) => prop_assert!(a > b),
            Some(GameResult::Winner(Player::B)) => prop_assert!(b > a),
        }
    }
}
