//! 10×12 padded board.
//!
//! The 64 board cells sit in an 8×8 interior surrounded by `Piece::OffBoard`:
//! two full sentinel rows above and below, and one sentinel column on each
//! side. Any single step (king or knight jump) from an interior cell lands on
//! a valid index, so move generation only has to test for the sentinel.
//!
//! ```text
//!   0 ..  19   sentinel rows
//!  20 ..  29   x h1 g1 f1 e1 d1 c1 b1 a1 x
//!  30 ..  39   x h2 ..                a2 x
//!   ..
//!  90 ..  99   x h8 ..                a8 x
//! 100 .. 119   sentinel rows
//! ```

use crate::engine::board::Board;
use crate::engine::types::{Piece, Square, to_internal_index};

/// Columns per padded row.
pub const WIDTH: usize = 10;
/// Padded rows.
pub const HEIGHT: usize = 12;
/// Total padded cells.
pub const LEN: usize = WIDTH * HEIGHT;

/// Padded index of internal square 0 (h1).
const FIRST_INTERIOR: usize = 2 * WIDTH + 1;

// ---------------------------------------------------------------------------
// Square <-> padded index
// ---------------------------------------------------------------------------

impl Square {
    /// Index of this square in the padded board.
    #[inline]
    pub fn padded_index(self) -> usize {
        FIRST_INTERIOR + WIDTH * (self.index() / 8) + self.index() % 8
    }

    /// Square for a padded index, or `None` for a sentinel cell.
    pub fn from_padded(index: usize) -> Option<Self> {
        let row = (index / WIDTH).checked_sub(2)?;
        let col = (index % WIDTH).checked_sub(1)?;
        if row >= 8 || col >= 8 {
            return None;
        }
        Square::new((row * 8 + col) as u8)
    }
}

// ---------------------------------------------------------------------------
// PaddedBoard
// ---------------------------------------------------------------------------

/// The 120-cell board the move generator walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaddedBoard {
    cells: [Piece; LEN],
}

impl PaddedBoard {
    /// Cells in padded order.
    #[inline]
    pub fn cells(&self) -> &[Piece; LEN] {
        &self.cells
    }

    /// Piece on an interior square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.cells[sq.padded_index()]
    }

    /// Padded indices of the 64 interior cells, paired with their square.
    pub fn interior() -> impl Iterator<Item = (usize, Square)> {
        Square::all().map(|sq| (sq.padded_index(), sq))
    }
}

impl std::ops::Index<usize> for PaddedBoard {
    type Output = Piece;

    #[inline]
    fn index(&self, index: usize) -> &Piece {
        &self.cells[index]
    }
}

/// Reverse the board into internal order and embed it in a sentinel frame.
pub fn pad(board: &Board) -> PaddedBoard {
    let mut cells = [Piece::OffBoard; LEN];
    for (fen_index, piece) in board.iter().enumerate() {
        cells[to_internal_index(fen_index).padded_index()] = piece;
    }
    PaddedBoard { cells }
}

impl From<&Board> for PaddedBoard {
    fn from(board: &Board) -> Self {
        pad(board)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
