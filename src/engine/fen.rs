//! FEN (Forsyth–Edwards Notation) parsing and validation.
//!
//! The six fields are checked last-to-first: full-move number, half-move
//! clock, en passant, castling, side to move and finally the piece placement.
//! Only the grammar is checked; impossible positions (no king, pawns on the
//! back rank, ...) are accepted.
//!
//! Reference: <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>

use crate::engine::board::Board;
use crate::engine::types::{CastlingRights, ChessError, Color, Piece, Square};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// ---------------------------------------------------------------------------
// Fen record
// ---------------------------------------------------------------------------

/// A fully parsed FEN string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fen {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// En-passant target square; validated only, never used for generation.
    pub en_passant: Option<Square>,
    /// Field 5. Any non-negative integer.
    pub halfmove_clock: u64,
    /// Field 6. Strictly positive.
    pub fullmove_number: u64,
}

impl Fen {
    /// Export as a FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board.to_placement(),
            self.side_to_move.to_fen(),
            self.castling_rights.to_fen(),
            self.en_passant
                .map_or_else(|| "-".to_string(), Square::to_algebraic),
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}

impl std::str::FromStr for Fen {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a FEN string into its 64-cell board (rank 8 → 1, file a → h).
pub fn parse(fen: &str) -> Result<Board, ChessError> {
    parse_fen(fen).map(|record| record.board)
}

/// Parse a FEN string into a full [`Fen`] record.
pub fn parse_fen(fen: &str) -> Result<Fen, ChessError> {
    let mut cells = Vec::with_capacity(Square::NUM);
    let fields = scan(fen, &mut |piece| cells.push(piece))?;

    let cells: [Piece; 64] = cells.try_into().map_err(|cells: Vec<Piece>| {
        ChessError::InvalidFen(format!("amount of cells was not 64 (was {})", cells.len()))
    })?;

    Ok(Fen {
        board: Board::from_cells(cells),
        side_to_move: fields.side_to_move,
        castling_rights: fields.castling_rights,
        en_passant: fields.en_passant,
        halfmove_clock: fields.halfmove_clock,
        fullmove_number: fields.fullmove_number,
    })
}

/// Run every check `parse` runs without building the board.
pub fn validate(fen: &str) -> bool {
    scan(fen, &mut |_| {}).is_ok()
}

/// Parse raw bytes; anything that is not UTF-8 text is rejected as `NotText`.
pub fn parse_bytes(bytes: &[u8]) -> Result<Board, ChessError> {
    let fen = std::str::from_utf8(bytes)
        .map_err(|e| ChessError::NotText(format!("non-UTF-8 bytes ({e})")))?;
    parse(fen)
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Every field except the piece placement.
struct Fields {
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u64,
    fullmove_number: u64,
}

/// Check all six fields, feeding each placement cell to `on_cell` in FEN order.
fn scan(fen: &str, on_cell: &mut dyn FnMut(Piece)) -> Result<Fields, ChessError> {
    if fen.is_empty() {
        return Err(ChessError::MissingInput);
    }

    let fields = split_fields(fen);
    if fields.len() != 6 {
        return Err(ChessError::InvalidFen(format!(
            "expected 6 fields, got {}",
            fields.len()
        )));
    }

    // ----- Field 6: Fullmove number -----
    let fullmove_number = parse_counter(fields[5]).filter(|&n| n > 0).ok_or_else(|| {
        ChessError::InvalidFen(format!(
            "invalid fullmove number: '{}' (must be a positive integer)",
            fields[5]
        ))
    })?;

    // ----- Field 5: Halfmove clock -----
    let halfmove_clock = parse_counter(fields[4]).filter(|&n| n >= 0).ok_or_else(|| {
        ChessError::InvalidFen(format!(
            "invalid halfmove clock: '{}' (must be a non-negative integer)",
            fields[4]
        ))
    })?;

    // ----- Field 4: En passant target square -----
    let en_passant = parse_en_passant(fields[3]).ok_or_else(|| {
        ChessError::InvalidFen(format!("invalid en passant square: '{}'", fields[3]))
    })?;

    // ----- Field 3: Castling availability -----
    let castling_rights = CastlingRights::from_fen(fields[2]).ok_or_else(|| {
        ChessError::InvalidFen(format!("invalid castling string: '{}'", fields[2]))
    })?;

    // ----- Field 2: Side to move -----
    let side_to_move = Color::from_fen(fields[1]).ok_or_else(|| {
        ChessError::InvalidFen(format!(
            "invalid side to move: '{}' (must be \"w\" or \"b\")",
            fields[1]
        ))
    })?;

    // ----- Field 1: Piece placement -----
    scan_placement(fields[0], on_cell)?;

    Ok(Fields {
        side_to_move,
        castling_rights,
        en_passant,
        halfmove_clock: halfmove_clock as u64,
        fullmove_number: fullmove_number as u64,
    })
}

/// Split on runs of whitespace. Leading or trailing whitespace leaves an
/// empty field at that edge, which then fails the field count.
fn split_fields(fen: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = fen.split_whitespace().collect();
    if fen.starts_with(char::is_whitespace) {
        fields.insert(0, "");
    }
    if fen.ends_with(char::is_whitespace) {
        fields.push("");
    }
    fields
}

fn scan_placement(placement: &str, on_cell: &mut dyn FnMut(Piece)) -> Result<(), ChessError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut total = 0usize;
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - rank_idx; // FEN starts from rank 8
        let mut cells = 0usize;
        let mut last_was_digit = false;

        for ch in rank_str.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if last_was_digit {
                    return Err(ChessError::InvalidFen(format!(
                        "two empty-square counts in sequence in rank {rank}"
                    )));
                }
                if !(1..=8).contains(&digit) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty count '{ch}' in rank {rank}"
                    )));
                }
                for _ in 0..digit {
                    on_cell(Piece::Empty);
                }
                cells += digit as usize;
                last_was_digit = true;
            } else if let Some(piece) = Piece::from_char(ch) {
                on_cell(piece);
                cells += 1;
                last_was_digit = false;
            } else {
                return Err(ChessError::InvalidFen(format!(
                    "piece char was not recognized (found '{ch}' in rank {rank})"
                )));
            }
        }

        if cells != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {rank} has {cells} cells instead of 8"
            )));
        }
        total += cells;
    }

    if total != Square::NUM {
        return Err(ChessError::InvalidFen(format!(
            "amount of cells was not 64 (was {total})"
        )));
    }
    Ok(())
}

fn parse_counter(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// `-` or a file letter followed by rank 3 or 6.
fn parse_en_passant(s: &str) -> Option<Option<Square>> {
    if s == "-" {
        return Some(None);
    }
    let sq = Square::from_algebraic(s)?;
    // rank() is 0-based: rank 3 → 2, rank 6 → 5.
    matches!(sq.rank(), 2 | 5).then_some(Some(sq))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
