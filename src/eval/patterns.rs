//! Window scores for four-in-a-row evaluation
//!
//! A window is a run of consecutive cells along one axis. Only windows the
//! opponent has not entered are worth anything.

use crate::board::Stone;

/// Scores for a live window by number of own stones
pub struct WindowScore;

impl WindowScore {
    /// Four own stones - a completed line
    pub const FOUR: i32 = 1000;
    /// Three own stones and one empty
    pub const THREE: i32 = 100;
    /// Two own stones and two empty
    pub const TWO: i32 = 10;
    /// One own stone and three empty
    pub const ONE: i32 = 1;
}

/// Score of a decided game at the search horizon, before depth adjustment
pub const WIN_SCORE: i32 = 1000;

/// Stones within this Manhattan distance of the center earn a positional bonus
pub const CENTER_BONUS_RADIUS: i32 = 10;

/// Score a window of cells for `player`.
///
/// Any opponent stone makes the window dead (0). Otherwise the score is
/// decided by the own-stone count against the empty count.
#[must_use]
pub fn evaluate_window(window: &[Stone], player: Stone) -> i32 {
    let opponent = player.opponent();
    let mut own = 0;
    let mut empty = 0;
    for &cell in window {
        if cell == opponent {
            return 0;
        }
        if cell == player {
            own += 1;
        } else if cell == Stone::Empty {
            empty += 1;
        }
    }

    match (own, empty) {
        (4, _) => WindowScore::FOUR,
        (3, 1) => WindowScore::THREE,
        (2, 2) => WindowScore::TWO,
        (1, 3) => WindowScore::ONE,
        _ => 0,
    }
}

/// Center bonus for one stone at `distance` from the center
#[inline]
pub fn center_bonus(distance: i32) -> i32 {
    (CENTER_BONUS_RADIUS - distance).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Stone::{Black as B, Empty as E, White as W};

    #[test]
    fn test_window_score_hierarchy() {
        assert!(WindowScore::FOUR > WindowScore::THREE);
        assert!(WindowScore::THREE > WindowScore::TWO);
        assert!(WindowScore::TWO > WindowScore::ONE);
    }

    #[test]
    fn test_window_counts() {
        assert_eq!(evaluate_window(&[B, B, B, B], B), 1000);
        assert_eq!(evaluate_window(&[B, E, B, B], B), 100);
        assert_eq!(evaluate_window(&[E, B, B, E], B), 10);
        assert_eq!(evaluate_window(&[E, E, E, B], B), 1);
        assert_eq!(evaluate_window(&[E, E, E, E], B), 0);
    }

    #[test]
    fn test_window_with_opponent_is_dead() {
        assert_eq!(evaluate_window(&[B, B, B, W], B), 0);
        assert_eq!(evaluate_window(&[W, E, E, E], B), 0);
        assert_eq!(evaluate_window(&[W, W, W, B], W), 0);
    }

    #[test]
    fn test_window_scored_from_either_side() {
        assert_eq!(evaluate_window(&[W, W, E, W], W), 100);
        assert_eq!(evaluate_window(&[W, W, E, W], B), 0);
    }

    #[test]
    fn test_center_bonus() {
        assert_eq!(center_bonus(0), 10);
        assert_eq!(center_bonus(7), 3);
        assert_eq!(center_bonus(10), 0);
        assert_eq!(center_bonus(18), 0);
    }
}
