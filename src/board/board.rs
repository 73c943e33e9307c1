//! Board structure and move application

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::rules::has_four_at_pos;

/// Game board: one bitboard per color.
///
/// `Clone` is the cheap independent copy used for speculative search; the
/// bitboards are plain arrays, so nothing is shared between copies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard (player 1)
    pub black: Bitboard,
    /// White stones bitboard (player 2)
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// True iff both coordinates are on the board and the cell is empty
    #[inline]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Pos::checked(row, col).is_some_and(|pos| self.is_empty(pos))
    }

    /// Place a stone if the move is valid.
    ///
    /// Returns false and leaves the board untouched for out-of-range
    /// coordinates, occupied cells, or `Stone::Empty`.
    pub fn place_stone(&mut self, row: i32, col: i32, stone: Stone) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        let pos = Pos::new(row as u8, col as u8);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return false,
        }
        true
    }

    /// `place_stone` for an already validated position
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        self.place_stone(pos.row as i32, pos.col as i32, stone)
    }

    /// Undo a speculative placement made by the search
    #[inline]
    pub(crate) fn retract(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Check whether the stone at `(row, col)` completes four in a row.
    ///
    /// The anchor is expected to already hold `stone`; call this right after
    /// a successful `place_stone` with the same color.
    pub fn check_winner(&self, row: i32, col: i32, stone: Stone) -> bool {
        match Pos::checked(row, col) {
            Some(pos) => has_four_at_pos(self, pos, stone),
            None => false,
        }
    }

    #[inline]
    pub fn is_board_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// All empty cells in row-major order
    pub fn get_empty_positions(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> {
        self.black.union(&self.white).iter_ones()
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
