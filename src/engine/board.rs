//! Unpadded 64-cell board in FEN order.
//!
//! Cell 0 is a8, cell 7 is h8, cell 56 is a1 and cell 63 is h1: exactly the
//! order in which the FEN placement field lists them. The move generator works
//! on a reversed, padded copy (see [`crate::engine::padded`]).

use crate::engine::types::{Piece, Square, from_internal_index};

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Exactly 64 cells, each empty or holding one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; 64],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; 64],
        }
    }

    /// Build a board from cells already in FEN order.
    pub fn from_cells(cells: [Piece; 64]) -> Self {
        debug_assert!(
            !cells.iter().any(|p| p.is_off_board()),
            "unpadded board must not contain the off-board sentinel"
        );
        Board { cells }
    }

    /// Cells in FEN order.
    #[inline]
    pub fn cells(&self) -> &[Piece; 64] {
        &self.cells
    }

    /// Iterate cells in FEN order.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().copied()
    }

    /// Piece on a square given in internal addressing.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.cells[from_internal_index(sq)]
    }

    /// Place a piece on a square given in internal addressing.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[from_internal_index(sq)] = piece;
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|p| matches!(p, Piece::Occupied(..)))
            .count()
    }

    // -----------------------------------------------------------------------
    // FEN placement encoding
    // -----------------------------------------------------------------------

    /// Encode the first FEN field (piece placement), rank 8 first.
    pub fn to_placement(&self) -> String {
        let mut fen = String::with_capacity(72);
        for (rank_idx, rank) in self.cells.chunks(8).enumerate() {
            let mut empty_count = 0u8;
            for piece in rank {
                match piece.to_char() {
                    Some(c) => {
                        if empty_count > 0 {
                            fen.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        fen.push(c);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push((b'0' + empty_count) as char);
            }
            if rank_idx < 7 {
                fen.push('/');
            }
        }
        fen
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line string (rank 8 at top), useful for debugging.
    pub fn board_string(&self) -> String {
        self.render(Piece::to_char)
    }

    /// Same grid with chess glyphs instead of FEN letters.
    pub fn board_string_unicode(&self) -> String {
        self.render(Piece::to_unicode)
    }

    fn render(&self, glyph: fn(Piece) -> Option<char>) -> String {
        let mut s = String::with_capacity(200);
        for (rank_idx, rank) in self.cells.chunks(8).enumerate() {
            s.push((b'8' - rank_idx as u8) as char);
            s.push(' ');
            for (file, piece) in rank.iter().enumerate() {
                s.push(glyph(*piece).unwrap_or('.'));
                if file < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Piece;

    /// Index by FEN-order cell.
    fn index(&self, index: usize) -> &Piece {
        &self.cells[index]
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// `{}` renders FEN letters, `{:#}` renders chess glyphs.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str(&self.board_string_unicode())
        } else {
            f.write_str(&self.board_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Color, PieceType};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.piece_count(), 0);
        assert!(board.iter().all(|p| p.is_empty()));
        assert_eq!(board.to_placement(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn set_and_read_through_internal_square() {
        let mut board = Board::empty();
        let knight = Piece::Occupied(Color::White, PieceType::Knight);
        board.set(sq("b1"), knight);

        assert_eq!(board.piece_at(sq("b1")), knight);
        // b1 is FEN cell 57: rank 1 is the last FEN row, file b is its second cell.
        assert_eq!(board[57], knight);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn placement_encoding() {
        let mut board = Board::empty();
        board.set(sq("b1"), Piece::Occupied(Color::White, PieceType::Knight));
        board.set(sq("g1"), Piece::Occupied(Color::White, PieceType::Knight));
        board.set(sq("e8"), Piece::Occupied(Color::Black, PieceType::King));
        assert_eq!(board.to_placement(), "4k3/8/8/8/8/8/8/1N4N1");
    }

    #[test]
    fn board_string_layout() {
        let mut board = Board::empty();
        board.set(sq("a8"), Piece::Occupied(Color::Black, PieceType::Rook));
        board.set(sq("h1"), Piece::Occupied(Color::White, PieceType::King));
        let s = board.board_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r . . . . . . .");
        assert_eq!(lines[7], "1 . . . . . . . K");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn alternate_display_uses_glyphs() {
        let mut board = Board::empty();
        board.set(sq("a8"), Piece::Occupied(Color::Black, PieceType::Rook));
        board.set(sq("h1"), Piece::Occupied(Color::White, PieceType::King));

        let plain = format!("{board}");
        let glyphs = format!("{board:#}");
        assert_eq!(plain, board.board_string());
        assert_eq!(glyphs.lines().next(), Some("8 ♜ . . . . . . ."));
        assert_eq!(glyphs.lines().nth(7), Some("1 . . . . . . . ♔"));
    }
}
