//! Win condition checking: four or more stones in a row
//!
//! Lines are scanned outward from an anchor stone in both senses of each of
//! the four axis directions. Overlines (five or more) also win.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count contiguous `color` stones from `pos` (exclusive) stepping by `(dr, dc)`
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while let Some(next) = Pos::checked(r, c) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the `color` run through `pos` along one axis, anchor included
#[inline]
pub fn line_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    1 + count_direction(board, pos, dr, dc, color) + count_direction(board, pos, -dr, -dc, color)
}

/// Fast four-in-a-row check at a specific position.
///
/// Only checks the 4 axes through the anchor. No allocation.
#[inline]
pub fn has_four_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length(board, pos, dr, dc, color) >= WIN_LENGTH)
}

/// Find the winning run through `pos`, returning its first four stones
/// ordered along the axis.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; WIN_LENGTH]> {
    for &(dr, dc) in &DIRECTIONS {
        if line_length(board, pos, dr, dc, color) < WIN_LENGTH {
            continue;
        }
        let back = count_direction(board, pos, -dr, -dc, color) as i32;
        let start_r = pos.row as i32 - dr * back;
        let start_c = pos.col as i32 - dc * back;

        let mut line = [pos; WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            let i = i as i32;
            *slot = Pos::new((start_r + dr * i) as u8, (start_c + dc * i) as u8);
        }
        return Some(line);
    }
    None
}

/// Scan every occupied cell in row-major order and report the owner of the
/// first one that sits on a completed line.
pub fn find_winner(board: &Board) -> Option<Stone> {
    board.occupied().find_map(|pos| {
        let stone = board.get(pos);
        has_four_at_pos(board, pos, stone).then_some(stone)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            assert!(board.place(Pos::new(r, c), s));
        }
        board
    }

    #[test]
    fn test_four_in_row_horizontal() {
        let board = board_with(&[
            (9, 0, Stone::Black),
            (9, 1, Stone::Black),
            (9, 2, Stone::Black),
            (9, 3, Stone::Black),
        ]);
        assert!(has_four_at_pos(&board, Pos::new(9, 0), Stone::Black));
        assert!(has_four_at_pos(&board, Pos::new(9, 3), Stone::Black));
        assert_eq!(find_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(i, 9), Stone::White);
        }
        assert!(has_four_at_pos(&board, Pos::new(2, 9), Stone::White));
    }

    #[test]
    fn test_four_at_corner() {
        let mut board = Board::new();
        for i in 16..20 {
            board.place(Pos::new(i, i), Stone::White);
        }
        assert!(has_four_at_pos(&board, Pos::new(19, 19), Stone::White));
        assert_eq!(find_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_no_winner() {
        let board = board_with(&[
            (0, 0, Stone::Black),
            (0, 1, Stone::Black),
            (0, 2, Stone::Black),
            (1, 0, Stone::White),
        ]);
        assert_eq!(find_winner(&board), None);
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_line_length_counts_both_sides() {
        let board = board_with(&[
            (4, 3, Stone::Black),
            (4, 4, Stone::Black),
            (4, 5, Stone::Black),
        ]);
        assert_eq!(line_length(&board, Pos::new(4, 4), 0, 1, Stone::Black), 3);
        assert_eq!(line_length(&board, Pos::new(4, 4), 1, 0, Stone::Black), 1);
    }

    #[test]
    fn test_winning_line_diagonal_sw() {
        // Diagonal from (4, 8) to (7, 5)
        let mut board = Board::new();
        for i in 0..4 {
            board.place(Pos::new(4 + i, 8 - i), Stone::Black);
        }
        let line = winning_line(&board, Pos::new(6, 6), Stone::Black).unwrap();
        assert_eq!(
            line,
            [Pos::new(4, 8), Pos::new(5, 7), Pos::new(6, 6), Pos::new(7, 5)]
        );
    }

    #[test]
    fn test_winning_line_none_for_three() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place(Pos::new(0, i), Stone::White);
        }
        assert!(winning_line(&board, Pos::new(0, 1), Stone::White).is_none());
    }
}
