//! Evaluation module for board positions
//!
//! This module provides window scoring and the static evaluation used at the
//! search horizon:
//! - Window patterns (ones, twos, threes, fours)
//! - Per-stone line potential
//! - Center bonus for the evaluating side

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_position};
pub use patterns::{center_bonus, evaluate_window, WindowScore, WIN_SCORE};
