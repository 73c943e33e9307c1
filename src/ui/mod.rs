//! GUI front-end for the four-in-a-row game
//!
//! A native window built on egui/eframe: a 20x20 board, a side panel with
//! turn, timer and AI debug info, and a computer opponent searching on a
//! background thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FourmokApp;
pub use game_state::{GameMode, GameResult, GameState};
