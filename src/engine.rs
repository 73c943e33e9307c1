//! AI player integrating evaluation and search
//!
//! The player chooses a move with this priority:
//!
//! 1. **Immediate win**: a cell that completes four for the player
//! 2. **Block**: a cell that would complete four for the opponent
//! 3. **Opening**: the center on an empty board
//! 4. **Alpha-Beta**: minimax over the center-nearest candidates
//!
//! # Example
//!
//! ```
//! use fourmok::{AIPlayer, Board, Stone};
//!
//! let ai = AIPlayer::new(Stone::White, 2);
//! let mut board = Board::new();
//! board.place_stone(10, 10, Stone::Black);
//!
//! let result = ai.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone, CENTER, TOTAL_CELLS};
use crate::eval::{self, evaluate_window};
use crate::search::{center_ordered_moves, Searcher, INF};

/// Default search depth
pub const DEFAULT_DEPTH: u8 = 3;

/// Maximum candidate moves tried at the root
pub const MAX_ROOT_MOVES: usize = 15;

/// Which step of the decision produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes four in a row for the player
    ImmediateWin,
    /// Takes the cell the opponent needs for four in a row
    Block,
    /// Center move on an empty board
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No candidate improved on the initial bound; chosen at random
    RandomFallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move (0 for the shortcut paths)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Pos, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: 0,
        }
    }
}

/// Computer opponent.
///
/// Holds only its color and search depth; every call works on its own copy
/// of the board, so the caller's board is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIPlayer {
    player: Stone,
    opponent: Stone,
    max_depth: u8,
}

impl AIPlayer {
    /// Create a player for `player` searching `max_depth` plies.
    ///
    /// A depth of 0 is raised to 1.
    #[must_use]
    pub fn new(player: Stone, max_depth: u8) -> Self {
        debug_assert!(player != Stone::Empty);
        Self {
            player,
            opponent: player.opponent(),
            max_depth: max_depth.max(1),
        }
    }

    #[must_use]
    pub fn player(&self) -> Stone {
        self.player
    }

    #[must_use]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Score a window of cells for `player`.
    #[must_use]
    pub fn evaluate_window(&self, window: &[Stone], player: Stone) -> i32 {
        evaluate_window(window, player)
    }

    /// Window score of every run of `length` cells that contains `pos`.
    #[must_use]
    pub fn evaluate_position(&self, board: &Board, pos: Pos, player: Stone, length: usize) -> i32 {
        eval::evaluate_position(board, pos, player, length)
    }

    /// Static evaluation of `board` from this player's point of view.
    #[must_use]
    pub fn evaluate_board(&self, board: &Board) -> i32 {
        eval::evaluate_board(board, self.player)
    }

    /// Minimax with alpha-beta pruning. `board` is restored before returning.
    pub fn minimax(
        &self,
        board: &mut Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        Searcher::new(self.player).minimax(board, depth, alpha, beta, maximizing)
    }

    /// Look for a cell that wins on the spot for this player, otherwise one
    /// the opponent would win with. Both scans go in row-major order and
    /// restore every trial stone.
    pub fn find_immediate_win_or_block(&self, board: &mut Board) -> Option<Pos> {
        self.find_immediate_tactic(board).map(|(pos, _)| pos)
    }

    fn find_immediate_tactic(&self, board: &mut Board) -> Option<(Pos, SearchType)> {
        let empty = board.get_empty_positions();

        for (color, kind) in [
            (self.player, SearchType::ImmediateWin),
            (self.opponent, SearchType::Block),
        ] {
            for &pos in &empty {
                board.place(pos, color);
                let wins = board.check_winner(pos.row as i32, pos.col as i32, color);
                board.retract(pos);
                if wins {
                    return Some((pos, kind));
                }
            }
        }
        None
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when the board has no empty cell.
    ///
    /// # Example
    ///
    /// ```
    /// use fourmok::{AIPlayer, Board, Pos, Stone};
    ///
    /// let ai = AIPlayer::new(Stone::Black, 3);
    /// assert_eq!(ai.get_best_move(&Board::new()), Some(Pos::new(10, 10)));
    /// ```
    #[must_use]
    pub fn get_best_move(&self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move along with how it was found.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = |start: Instant| start.elapsed().as_millis() as u64;

        // 1. Forced tactical move
        let mut scratch = board.clone();
        if let Some((pos, kind)) = self.find_immediate_tactic(&mut scratch) {
            debug!(player = ?self.player, %pos, search_type = ?kind, "tactical move");
            return MoveResult::shortcut(pos, kind, elapsed_ms(start));
        }

        // 2. Nothing left to play
        let empty_count = TOTAL_CELLS - board.stone_count() as usize;
        if empty_count == 0 {
            debug!(player = ?self.player, "board full, no move");
            return MoveResult::no_move(elapsed_ms(start));
        }

        // 3. First move of the game
        if empty_count == TOTAL_CELLS {
            let center = Pos::new(CENTER, CENTER);
            debug!(player = ?self.player, %center, "opening at center");
            return MoveResult::shortcut(center, SearchType::Opening, elapsed_ms(start));
        }

        // 4. Alpha-beta over the center-nearest candidates
        let candidates = center_ordered_moves(board, MAX_ROOT_MOVES);
        let mut searcher = Searcher::new(self.player);
        let mut best_move = None;
        let mut best_score = -INF;

        for &pos in &candidates {
            let mut test_board = board.clone();
            test_board.place(pos, self.player);

            let score = searcher.minimax(&mut test_board, self.max_depth - 1, -INF, INF, false);
            trace!(%pos, score, "root candidate");

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        let (best_move, search_type) = match best_move {
            Some(pos) => (Some(pos), SearchType::AlphaBeta),
            None => (
                candidates.choose(&mut rand::thread_rng()).copied(),
                SearchType::RandomFallback,
            ),
        };

        let result = MoveResult {
            best_move,
            score: best_score,
            search_type,
            time_ms: elapsed_ms(start),
            nodes: searcher.nodes(),
        };
        debug!(
            player = ?self.player,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }
}

impl Default for AIPlayer {
    /// White at the default depth, the computer's seat in player-vs-computer
    fn default() -> Self {
        Self::new(Stone::White, DEFAULT_DEPTH)
    }
}
