//! Four-in-a-row engine on a 20x20 board
//!
//! Two players alternately drop Black and White stones on the intersections
//! of a 20x20 grid. The first to line up four of their own stones
//! horizontally, vertically or diagonally wins; a full board with no line is
//! a draw.
//!
//! # Architecture
//!
//! - [`board`]: bitboard-backed board and coordinates
//! - [`rules`]: four-in-a-row detection
//! - [`eval`]: window scoring and the center bonus
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: the computer player tying everything together
//! - [`config`] and [`error`]: TOML configuration and typed errors
//! - [`ui`]: the egui front-end
//!
//! # Quick Start
//!
//! ```
//! use fourmok::{AIPlayer, Board, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(10, 10, Stone::Black);
//!
//! let ai = AIPlayer::new(Stone::White, 2);
//! if let Some(pos) = ai.get_best_move(&board) {
//!     assert!(board.place_stone(pos.row as i32, pos.col as i32, Stone::White));
//! }
//! ```
//!
//! # Move priority
//!
//! 1. Complete our own four
//! 2. Block the opponent's four
//! 3. Take the center on an empty board
//! 4. Alpha-beta search over the center-most candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use engine::{AIPlayer, MoveResult, SearchType};
