//! Pseudo-legal move generation on the padded board.
//!
//! Pipeline:
//!   1. Parse the FEN and read the side to move.
//!   2. Pad the board (see [`crate::engine::padded`]).
//!   3. For each piece of the side to move, look up its [`MoveShape`] and walk
//!      its directions: leapers take one step, sliders run until blocked.
//!   4. Hand the result to a [`LegalityFilter`].
//!
//! The default filter is [`PseudoLegal`], which returns its input unchanged:
//! checks, pins, castling, en passant and promotion are not considered. Pawns
//! have no shape in [`ShapeTable::standard`] and therefore never move.

use std::collections::BTreeMap;

use tracing::debug;

use crate::engine::fen;
use crate::engine::padded::{self, PaddedBoard};
use crate::engine::types::{ChessError, Color, Piece, PieceType, Square};

// =========================================================================
// Directions
// =========================================================================

/// A step on the padded board. Compass names follow the internal layout:
/// north is towards rank 8, east is towards higher padded columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
    NNE,
    NNW,
    SSE,
    SSW,
    ENE,
    ESE,
    WNW,
    WSW,
}

impl Direction {
    /// The eight knight jumps.
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE,
        Direction::NNW,
        Direction::SSE,
        Direction::SSW,
        Direction::ENE,
        Direction::ESE,
        Direction::WNW,
        Direction::WSW,
    ];

    /// The eight neighbouring squares. Also the queen's ray set.
    pub const KING: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    pub const ROOK: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    pub const BISHOP: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// Offset into the padded index space.
    pub const fn offset(self) -> isize {
        const N: isize = padded::WIDTH as isize;
        const S: isize = -N;
        const E: isize = 1;
        const W: isize = -E;

        match self {
            Direction::N => N,
            Direction::S => S,
            Direction::E => E,
            Direction::W => W,
            Direction::NE => N + E,
            Direction::NW => N + W,
            Direction::SE => S + E,
            Direction::SW => S + W,
            Direction::NNE => N + N + E,
            Direction::NNW => N + N + W,
            Direction::SSE => S + S + E,
            Direction::SSW => S + S + W,
            Direction::ENE => E + N + E,
            Direction::ESE => E + S + E,
            Direction::WNW => W + N + W,
            Direction::WSW => W + S + W,
        }
    }

    /// Padded index one step from `from`.
    ///
    /// `from` must be an interior index; the two-cell frame keeps the result
    /// inside the padded board.
    #[inline]
    fn step(self, from: usize) -> usize {
        from.wrapping_add_signed(self.offset())
    }
}

// =========================================================================
// Move shapes
// =========================================================================

/// How a piece kind uses its directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveShape {
    /// One step per direction.
    Leaper(&'static [Direction]),
    /// Repeated steps per direction until blocked.
    Slider(&'static [Direction]),
}

/// Per-kind dispatch table. A kind without a shape generates no moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeTable([Option<MoveShape>; PieceType::COUNT]);

impl ShapeTable {
    /// Knight and king leap, rook/bishop/queen slide, pawn is unmapped.
    pub const fn standard() -> Self {
        let mut shapes = [None; PieceType::COUNT];
        shapes[PieceType::Knight.index()] = Some(MoveShape::Leaper(&Direction::KNIGHT));
        shapes[PieceType::King.index()] = Some(MoveShape::Leaper(&Direction::KING));
        shapes[PieceType::Rook.index()] = Some(MoveShape::Slider(&Direction::ROOK));
        shapes[PieceType::Bishop.index()] = Some(MoveShape::Slider(&Direction::BISHOP));
        shapes[PieceType::Queen.index()] = Some(MoveShape::Slider(&Direction::KING));
        ShapeTable(shapes)
    }

    #[inline]
    pub fn get(&self, piece: PieceType) -> Option<MoveShape> {
        self.0[piece.index()]
    }

    /// Replace (or clear, with `None`) the shape of one kind.
    pub fn with(mut self, piece: PieceType, shape: Option<MoveShape>) -> Self {
        self.0[piece.index()] = shape;
        self
    }
}

impl Default for ShapeTable {
    fn default() -> Self {
        ShapeTable::standard()
    }
}

// =========================================================================
// MoveSet
// =========================================================================

/// Destinations per origin square, both in internal addressing.
///
/// Origins are ordered by square; destinations keep generation order
/// (direction table order, nearest first along a ray). Origins with no
/// destination are left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet(BTreeMap<Square, Vec<Square>>);

impl MoveSet {
    pub fn new() -> Self {
        MoveSet(BTreeMap::new())
    }

    /// Record the destinations of one origin; an empty list is dropped.
    pub fn insert(&mut self, from: Square, to: Vec<Square>) {
        if !to.is_empty() {
            self.0.insert(from, to);
        }
    }

    /// Destinations from `from`, if it has any.
    pub fn get(&self, from: Square) -> Option<&[Square]> {
        self.0.get(&from).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> {
        self.0.iter().map(|(from, to)| (*from, to.as_slice()))
    }

    pub fn origins(&self) -> impl Iterator<Item = Square> + '_ {
        self.0.keys().copied()
    }

    /// Number of origins.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of (origin, destination) pairs.
    pub fn move_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Same moves with squares written as "e4" etc.
    pub fn to_algebraic(&self) -> BTreeMap<String, Vec<String>> {
        self.iter()
            .map(|(from, to)| {
                (
                    from.to_algebraic(),
                    to.iter().map(|sq| sq.to_algebraic()).collect(),
                )
            })
            .collect()
    }
}

impl IntoIterator for MoveSet {
    type Item = (Square, Vec<Square>);
    type IntoIter = std::collections::btree_map::IntoIter<Square, Vec<Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =========================================================================
// Legality filtering
// =========================================================================

/// Final stage of generation: turns pseudo-legal moves into legal ones.
pub trait LegalityFilter {
    fn filter(&self, board: &PaddedBoard, us: Color, moves: MoveSet) -> MoveSet;
}

/// Identity filter. The generator output stays pseudo-legal.
#[derive(Clone, Copy, Debug, Default)]
pub struct PseudoLegal;

impl LegalityFilter for PseudoLegal {
    #[inline]
    fn filter(&self, _board: &PaddedBoard, _us: Color, moves: MoveSet) -> MoveSet {
        moves
    }
}

impl<F> LegalityFilter for F
where
    F: Fn(&PaddedBoard, Color, MoveSet) -> MoveSet,
{
    fn filter(&self, board: &PaddedBoard, us: Color, moves: MoveSet) -> MoveSet {
        self(board, us, moves)
    }
}

// =========================================================================
// Generator
// =========================================================================

/// Move generator with a configurable shape table and legality filter.
#[derive(Clone, Debug, Default)]
pub struct MoveGenerator<F = PseudoLegal> {
    shapes: ShapeTable,
    filter: F,
}

impl MoveGenerator {
    /// Standard shapes, no legality filtering.
    pub fn new() -> Self {
        MoveGenerator {
            shapes: ShapeTable::standard(),
            filter: PseudoLegal,
        }
    }
}

impl<F: LegalityFilter> MoveGenerator<F> {
    pub fn with_shapes(self, shapes: ShapeTable) -> Self {
        MoveGenerator { shapes, ..self }
    }

    pub fn with_filter<G: LegalityFilter>(self, filter: G) -> MoveGenerator<G> {
        MoveGenerator {
            shapes: self.shapes,
            filter,
        }
    }

    /// Parse `fen` and generate moves for the side to move.
    pub fn generate(&self, fen: &str) -> Result<MoveSet, ChessError> {
        let board = fen::parse(fen)?;
        let us = side_to_move(fen)?;
        let padded = padded::pad(&board);
        Ok(self.generate_padded(&padded, us))
    }

    /// Generate moves for `us` on an already padded board.
    pub fn generate_padded(&self, board: &PaddedBoard, us: Color) -> MoveSet {
        let pseudo = self.pseudo_legal(board, us);
        debug!(
            side = %us,
            origins = pseudo.len(),
            moves = pseudo.move_count(),
            "generated pseudo-legal moves"
        );
        self.filter.filter(board, us, pseudo)
    }

    /// Moves of the piece on `from`, empty when it has none (or is not ours).
    pub fn moves_from(&self, fen: &str, from: Square) -> Result<Vec<Square>, ChessError> {
        let moves = self.generate(fen)?;
        Ok(moves.get(from).map(<[Square]>::to_vec).unwrap_or_default())
    }

    fn pseudo_legal(&self, board: &PaddedBoard, us: Color) -> MoveSet {
        let mut moves = MoveSet::new();
        for index in 0..padded::LEN {
            let Piece::Occupied(color, piece) = board[index] else {
                continue;
            };
            if color != us {
                continue;
            }
            let Some(shape) = self.shapes.get(piece) else {
                continue;
            };
            let Some(from) = Square::from_padded(index) else {
                continue;
            };
            let targets = match shape {
                MoveShape::Leaper(dirs) => leaper_targets(board, index, us, dirs),
                MoveShape::Slider(dirs) => slider_targets(board, index, us, dirs),
            };
            moves.insert(from, targets);
        }
        moves
    }
}

/// Generate moves for the side to move with the standard generator.
pub fn generate(fen: &str) -> Result<MoveSet, ChessError> {
    MoveGenerator::new().generate(fen)
}

/// Side to move from the second FEN field.
pub fn side_to_move(fen: &str) -> Result<Color, ChessError> {
    let token = fen.split_whitespace().nth(1).unwrap_or_default();
    Color::from_fen(token).ok_or_else(|| ChessError::InvalidTurn(token.to_string()))
}

// =========================================================================
// Leapers and sliders
// =========================================================================

fn leaper_targets(board: &PaddedBoard, from: usize, us: Color, dirs: &[Direction]) -> Vec<Square> {
    dirs.iter()
        .filter_map(|dir| {
            let to = dir.step(from);
            match board[to] {
                Piece::OffBoard => None,
                piece if piece.is_color(us) => None,
                _ => Square::from_padded(to),
            }
        })
        .collect()
}

fn slider_targets(board: &PaddedBoard, from: usize, us: Color, dirs: &[Direction]) -> Vec<Square> {
    let mut targets = Vec::new();
    for dir in dirs {
        let mut to = dir.step(from);
        loop {
            let piece = board[to];
            if piece.is_off_board() || piece.is_color(us) {
                break;
            }
            targets.extend(Square::from_padded(to));
            if !piece.is_empty() {
                // Capture ends the ray.
                break;
            }
            to = dir.step(to);
        }
    }
    targets
}

// =========================================================================
// Tests
// =========================================================================
