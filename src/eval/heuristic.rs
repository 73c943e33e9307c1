//! Heuristic evaluation function for board positions
//!
//! The score of a position is built from the windows through every stone on
//! the board plus a center bonus for the evaluating side's own stones.
//! Overlapping windows are counted once per stone they contain, so clustered
//! stones weigh more than scattered ones.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::rules::DIRECTIONS;

use super::patterns::{center_bonus, evaluate_window};

/// Sum of window scores for `player` over every in-bounds run of `length`
/// cells that contains `pos`, along all four axes.
///
/// Windows that would leave the board are skipped entirely.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, player: Stone, length: usize) -> i32 {
    let length = length as i32;
    let mut window = Vec::with_capacity(length as usize);
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        for start in (1 - length)..=0 {
            window.clear();
            for i in 0..length {
                let r = pos.row as i32 + (start + i) * dr;
                let c = pos.col as i32 + (start + i) * dc;
                match board.get_at(r, c) {
                    Some(stone) => window.push(stone),
                    None => break,
                }
            }
            if window.len() == length as usize {
                score += evaluate_window(&window, player);
            }
        }
    }

    score
}

/// Evaluate the board from the perspective of `color`.
///
/// Positive values favor `color`. Each stone contributes the window score of
/// its owner, added for `color` and subtracted for the opponent. Only
/// `color`'s stones collect the center bonus.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i32 {
    let mut score = 0;

    for pos in board.occupied() {
        let owner = board.get(pos);
        let position_score = evaluate_position(board, pos, owner, WIN_LENGTH);
        if owner == color {
            score += position_score + center_bonus(pos.center_distance());
        } else {
            score -= position_score;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_board(&board, Stone::Black), 0);
        assert_eq!(evaluate_board(&board, Stone::White), 0);
    }

    #[test]
    fn test_single_center_stone() {
        let mut board = Board::new();
        board.place(Pos::new(10, 10), Stone::Black);
        // 4 directions * 4 windows, each holding the lone stone
        let position = evaluate_position(&board, Pos::new(10, 10), Stone::Black, 4);
        assert_eq!(position, 16);
        assert_eq!(evaluate_board(&board, Stone::Black), 16 + 10);
        // Opponent's view: subtract windows, no bonus
        assert_eq!(evaluate_board(&board, Stone::White), -16);
    }

    #[test]
    fn test_corner_stone_skips_off_board_windows() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Stone::White);
        // Horizontal, vertical and SE each keep only the window starting at
        // the corner; SW has no in-bounds window.
        assert_eq!(evaluate_position(&board, Pos::new(0, 0), Stone::White, 4), 3);
    }

    #[test]
    fn test_blocked_window_worth_nothing() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Stone::White);
        board.place(Pos::new(0, 1), Stone::Black);
        board.place(Pos::new(1, 0), Stone::Black);
        board.place(Pos::new(1, 1), Stone::Black);
        assert_eq!(evaluate_position(&board, Pos::new(0, 0), Stone::White, 4), 0);
    }

    #[test]
    fn test_center_bonus_is_one_sided() {
        // Mirror positions: each side has one stone the same distance from center
        let mut board = Board::new();
        board.place(Pos::new(10, 8), Stone::Black);
        board.place(Pos::new(10, 12), Stone::White);

        let black_view = evaluate_board(&board, Stone::Black);
        let white_view = evaluate_board(&board, Stone::White);
        // Window terms cancel, only the evaluator's own bonus (10 - 2) remains
        assert_eq!(black_view, 8);
        assert_eq!(white_view, 8);
    }

    #[test]
    fn test_three_outscores_scattered() {
        let mut line = Board::new();
        for c in 8..11 {
            line.place(Pos::new(10, c), Stone::Black);
        }
        let mut scattered = Board::new();
        for (r, c) in [(2, 2), (10, 9), (17, 17)] {
            scattered.place(Pos::new(r, c), Stone::Black);
        }
        assert!(evaluate_board(&line, Stone::Black) > evaluate_board(&scattered, Stone::Black));
    }
}
