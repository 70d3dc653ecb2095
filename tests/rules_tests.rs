//! Rules engine scenario tests.
//!
//! Positions here were reached by legal play on a 4x4 board, which is small
//! enough to hit passes, early endings, draws and B wins in a dozen moves.

use reversi_env::core::{Board, Coord, InvalidMoveReason, Player, ReversiError};
use reversi_env::rules::{self, GameResult, TurnTransition};

/// Play flat actions in order, returning each move's (mover, flipped, transition).
fn play_all(board: &mut Board, actions: &[usize]) -> Vec<(Player, usize, TurnTransition)> {
    actions
        .iter()
        .map(|&a| {
            let coord = Coord::from_action(a, board.size());
            let outcome = rules::apply_move(board, coord).unwrap();
            (outcome.mover, outcome.flipped_count(), outcome.transition)
        })
        .collect()
}

// =============================================================================
// Opening Tests
// =============================================================================

#[test]
fn test_opening_legal_moves_all_sizes() {
    for size in [4, 6, 8, 10, 26] {
        let board = Board::new(size).unwrap();
        let c = size / 2;

        let moves = rules::legal_moves(&board);
        let expected = vec![
            Coord::new(c - 2, c),
            Coord::new(c - 1, c + 1),
            Coord::new(c, c - 2),
            Coord::new(c + 1, c - 1),
        ];
        assert_eq!(moves, expected, "size {}", size);
        assert_eq!(board.count(Player::A), 2);
        assert_eq!(board.count(Player::B), 2);
    }
}

#[test]
fn test_rejected_moves_leave_board_untouched() {
    let mut board = Board::standard();
    let before = board.clone();

    for (coord, reason) in [
        (Coord::new(3, 3), InvalidMoveReason::Occupied),
        (Coord::new(0, 0), InvalidMoveReason::NoCapture),
        (Coord::new(2, 3), InvalidMoveReason::NoCapture),
        (Coord::new(8, 0), InvalidMoveReason::OutOfBounds),
    ] {
        match rules::apply_move(&mut board, coord) {
            Err(ReversiError::InvalidMove { reason: r, .. }) => assert_eq!(r, reason),
            other => panic!("expected rejection at {}, got {:?}", coord, other),
        }
        assert_eq!(board, before);
    }
}

// =============================================================================
// Pass Tests
// =============================================================================

#[test]
fn test_forced_pass_keeps_mover() {
    let mut board = Board::new(4).unwrap();
    let log = play_all(&mut board, &[2, 1, 8, 3]);

    assert_eq!(
        log,
        vec![
            (Player::A, 1, TurnTransition::Alternate),
            (Player::B, 1, TurnTransition::Alternate),
            (Player::A, 2, TurnTransition::Alternate),
            (Player::B, 1, TurnTransition::Pass),
        ]
    );

    assert_eq!(board.current_player(), Player::B);
    assert!(!board.is_terminal());
    assert!(!rules::has_legal_move(&board, Player::A));
    assert_eq!(
        rules::legal_moves(&board),
        vec![
            Coord::new(2, 3),
            Coord::new(3, 0),
            Coord::new(3, 1),
            Coord::new(3, 2),
        ]
    );
    assert_eq!(
        board.to_signed(),
        vec![0, -1, -1, -1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_from_signed_skips_stuck_player() {
    let values = [0, -1, -1, -1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0];
    let board = Board::from_signed(4, &values, Player::A).unwrap();

    assert_eq!(board.current_player(), Player::B);
    assert!(!board.is_terminal());
}

// =============================================================================
// Terminal Tests
// =============================================================================

#[test]
fn test_game_ends_before_board_is_full() {
    let mut board = Board::new(4).unwrap();
    let log = play_all(&mut board, &[2, 1, 0, 3, 11, 12]);

    assert_eq!(log[4], (Player::A, 1, TurnTransition::Pass));
    assert_eq!(log[5], (Player::A, 1, TurnTransition::Terminal));

    assert!(board.is_terminal());
    assert!(!board.is_full());
    assert_eq!(board.occupied_count(), 10);
    assert_eq!(board.current_player(), Player::A);
    assert_eq!(rules::score(&board), (9, 1));
    assert_eq!(rules::winner(&board), Some(GameResult::Winner(Player::A)));
    assert!(rules::legal_moves(&board).is_empty());
    assert!(rules::legal_action_mask(&board).iter().all(|&m| !m));
}

#[test]
fn test_from_signed_terminal_keeps_to_move() {
    let values = [1, 1, 1, -1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0];
    let board = Board::from_signed(4, &values, Player::B).unwrap();

    assert!(board.is_terminal());
    assert_eq!(board.current_player(), Player::B);
}

#[test]
fn test_b_wins_on_full_board() {
    let mut board = Board::new(4).unwrap();
    let log = play_all(&mut board, &[2, 1, 0, 3, 7, 11, 12, 4, 15, 8, 13, 14]);

    let flips: Vec<usize> = log.iter().map(|&(_, f, _)| f).collect();
    assert_eq!(flips, vec![1, 1, 2, 1, 1, 2, 1, 2, 2, 2, 1, 1]);
    assert_eq!(log[11], (Player::B, 1, TurnTransition::Terminal));

    assert!(board.is_full());
    assert_eq!(board.current_player(), Player::B);
    assert_eq!(rules::score(&board), (7, 9));
    assert_eq!(rules::winner(&board), Some(GameResult::Winner(Player::B)));
}

#[test]
fn test_draw_on_full_board() {
    let mut board = Board::new(4).unwrap();
    play_all(&mut board, &[2, 1, 0, 3, 7, 11, 12, 4, 14, 8, 15, 13]);

    assert!(board.is_terminal());
    assert_eq!(board.signed_sum(), 0);
    assert_eq!(rules::winner(&board), Some(GameResult::Draw));
    assert!(rules::winner(&board).unwrap().winner().is_none());
}

#[test]
fn test_no_winner_while_running() {
    let mut board = Board::new(4).unwrap();
    play_all(&mut board, &[2, 1]);
    assert_eq!(rules::winner(&board), None);
}
