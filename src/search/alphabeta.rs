//! Minimax search with alpha-beta pruning
//!
//! The searcher plays a fixed side: maximizing nodes place `player`'s stones,
//! minimizing nodes place `opponent`'s. The board passed to [`Searcher::minimax`]
//! is mutated in place and restored before every return.
//!
//! # Example
//!
//! ```
//! use fourmok::board::{Board, Stone};
//! use fourmok::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! board.place_stone(10, 10, Stone::Black);
//!
//! let mut searcher = Searcher::new(Stone::White);
//! let score = searcher.minimax(&mut board, 1, -INF, INF, true);
//! assert!(searcher.nodes() > 0);
//! # let _ = score;
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_board, WIN_SCORE};
use crate::rules::find_winner;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Maximum candidate moves tried at each interior node
pub const MAX_SEARCH_MOVES: usize = 20;

/// Empty cells ordered by Manhattan distance to the center, ties kept in
/// row-major order, truncated to `limit`.
pub fn center_ordered_moves(board: &Board, limit: usize) -> Vec<Pos> {
    let mut moves = board.get_empty_positions();
    moves.sort_by_key(|pos| pos.center_distance());
    moves.truncate(limit);
    moves
}

/// Depth-limited minimax searcher for one side.
#[derive(Debug, Clone)]
pub struct Searcher {
    player: Stone,
    opponent: Stone,
    nodes: u64,
}

impl Searcher {
    pub fn new(player: Stone) -> Self {
        Self {
            player,
            opponent: player.opponent(),
            nodes: 0,
        }
    }

    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Nodes visited since construction
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` from `player`'s point of view.
    ///
    /// Terminal checks run in order: horizon (`depth == 0`) returns the static
    /// evaluation, a completed line returns `±(WIN_SCORE + depth)` so quicker
    /// wins score higher, and a full board is a draw.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_board(board, self.player);
        }

        if let Some(winner) = find_winner(board) {
            return if winner == self.player {
                WIN_SCORE + depth as i32
            } else {
                -WIN_SCORE - depth as i32
            };
        }

        if board.is_board_full() {
            return 0;
        }

        let moves = center_ordered_moves(board, MAX_SEARCH_MOVES);

        if maximizing {
            let mut max_eval = -INF;
            for pos in moves {
                board.place(pos, self.player);
                let eval = self.minimax(board, depth - 1, alpha, beta, false);
                board.retract(pos);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            max_eval
        } else {
            let mut min_eval = INF;
            for pos in moves {
                board.place(pos, self.opponent);
                let eval = self.minimax(board, depth - 1, alpha, beta, true);
                board.retract(pos);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            min_eval
        }
    }
}
