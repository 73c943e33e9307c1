//! Search module for the four-in-a-row AI
//!
//! Contains the depth-limited minimax searcher with alpha-beta pruning and
//! the center-first candidate ordering shared by the root and interior nodes.

pub mod alphabeta;

pub use alphabeta::{center_ordered_moves, Searcher, INF, MAX_SEARCH_MOVES};
