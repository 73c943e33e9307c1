//! Game rules for four-in-a-row
//!
//! The only rule beyond "place on an empty intersection" is the win
//! condition: four or more stones of one color in a row, in any of the four
//! axis directions.

pub mod win;

pub use win::{find_winner, has_four_at_pos, line_length, winning_line, DIRECTIONS};
