//! Board structure and mutation primitives

use super::bitboard::Bitboard;
use super::{MoveError, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
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

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone on a cell the caller knows to be empty.
    ///
    /// No validation; the searcher uses this with [`Board::remove`] in
    /// strictly paired place/undo steps. Game moves go through
    /// [`Board::set`].
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone. Counterpart of [`Board::place`].
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Place a stone, validating the move.
    ///
    /// Fails with [`MoveError::OutOfBounds`] when the position is off the
    /// board and [`MoveError::CellOccupied`] when the cell already holds a
    /// stone. The board is unchanged on failure.
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds(pos.row as i32, pos.col as i32));
        }
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.place(pos, stone);
        Ok(())
    }

    /// Reset a cell to empty, validating the coordinates.
    ///
    /// Clearing a cell the caller did not itself just set is a logic error,
    /// not a recoverable condition; the search engine guarantees strict
    /// set/clear pairing.
    pub fn clear(&mut self, pos: Pos) -> Result<(), MoveError> {
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds(pos.row as i32, pos.col as i32));
        }
        self.remove(pos);
        Ok(())
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

    /// Check if the board has no stones at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// True when some 8-neighbor of `pos` holds a stone of either color.
    pub fn has_adjacent_stone(&self, pos: Pos) -> bool {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = Pos::from_signed(pos.row as i32 + dr, pos.col as i32 + dc) {
                    if !self.is_empty(n) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
