use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Parse the FEN side-to-move token (`"w"` or `"b"`).
    pub fn from_fen(s: &str) -> Option<Self> {
        match s {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// FEN side-to-move character.
    pub fn to_fen(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Number of piece types.
    pub const COUNT: usize = 6;

    /// Index for array lookups: Pawn=0 .. King=5.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece character; the case decides the colour.
    pub fn from_char(c: char) -> Option<(Color, PieceType)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((color, piece))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// Contents of one board cell.
///
/// The unpadded board only ever holds `Empty` and `Occupied`; `OffBoard` is the
/// sentinel written into the border of a padded board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    OffBoard,
    Occupied(Color, PieceType),
}

impl Piece {
    /// Parse a FEN piece character (`PNBRQK` white, `pnbrqk` black).
    pub fn from_char(c: char) -> Option<Self> {
        PieceType::from_char(c).map(|(color, piece)| Piece::Occupied(color, piece))
    }

    /// FEN character for an occupied cell.
    pub fn to_char(self) -> Option<char> {
        match self {
            Piece::Occupied(color, piece) => Some(piece.to_char(color)),
            Piece::Empty | Piece::OffBoard => None,
        }
    }

    /// Chess glyph for an occupied cell (U+2654..U+265F).
    pub fn to_unicode(self) -> Option<char> {
        let Piece::Occupied(color, piece) = self else {
            return None;
        };
        let glyphs = match color {
            Color::White => ['♙', '♘', '♗', '♖', '♕', '♔'],
            Color::Black => ['♟', '♞', '♝', '♜', '♛', '♚'],
        };
        Some(glyphs[piece.index()])
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Occupied(color, _) => Some(color),
            Piece::Empty | Piece::OffBoard => None,
        }
    }

    #[inline]
    pub fn piece_type(self) -> Option<PieceType> {
        match self {
            Piece::Occupied(_, piece) => Some(piece),
            Piece::Empty | Piece::OffBoard => None,
        }
    }

    /// Does this cell hold a piece of `color`?
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    #[inline]
    pub fn is_off_board(self) -> bool {
        self == Piece::OffBoard
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A square in the generator's internal addressing (0..63).
///
/// The internal order is the FEN order reversed: rank-major from rank 1, with
/// files running h→a inside a rank. So h1 = 0, a1 = 7, h8 = 56, a8 = 63.
/// Use [`to_internal_index`] / [`from_internal_index`] to cross between the two
/// orders; nothing else should do that arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const NUM: usize = 64;

    /// Square for an internal index, `None` past 63.
    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < Self::NUM).then_some(Square(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 0 = rank 1 .. 7 = rank 8.
    #[inline]
    pub fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// 0 = file a .. 7 = file h.
    #[inline]
    pub fn file(self) -> u8 {
        7 - (self.0 & 7)
    }

    #[inline]
    pub fn from_file_rank(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        to_internal_index(usize::from((7 - rank) * 8 + file))
    }

    /// All 64 squares in internal order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Some(Square::from_file_rank(file, rank))
        } else {
            None
        }
    }

    /// Convert to algebraic notation like "e4".
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Map a FEN-order cell index (a8 = 0 .. h1 = 63) to its internal square.
#[inline]
pub fn to_internal_index(fen_index: usize) -> Square {
    debug_assert!(fen_index < Square::NUM);
    Square((Square::NUM - 1 - fen_index) as u8)
}

/// Map an internal square back to its FEN-order cell index.
#[inline]
pub fn from_internal_index(sq: Square) -> usize {
    Square::NUM - 1 - sq.index()
}

// ---------------------------------------------------------------------------
// CastlingRights
// ---------------------------------------------------------------------------

/// Castling availability bitfield: bits 0-3 = WK, WQ, BK, BQ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights(pub u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 2;
    pub const BLACK_KINGSIDE: u8 = 4;
    pub const BLACK_QUEENSIDE: u8 = 8;

    #[inline]
    pub fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Parse FEN castling string (e.g. "KQkq", "-", "Kq").
    ///
    /// Letters must appear in `KQkq` order, each at most once.
    pub fn from_fen(s: &str) -> Option<Self> {
        if s == "-" {
            return Some(CastlingRights::NONE);
        }
        if s.is_empty() {
            return None;
        }
        let mut rights = 0u8;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return None,
            };
            // Flags grow in KQkq order, so a smaller-or-equal flag is out of order or repeated.
            if flag <= rights {
                return None;
            }
            rights |= flag;
        }
        Some(CastlingRights(rights))
    }

    /// Convert to FEN castling string.
    pub fn to_fen(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.has(Self::WHITE_KINGSIDE) {
            s.push('K');
        }
        if self.has(Self::WHITE_QUEENSIDE) {
            s.push('Q');
        }
        if self.has(Self::BLACK_KINGSIDE) {
            s.push('k');
        }
        if self.has(Self::BLACK_QUEENSIDE) {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for FEN parsing and move generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("FEN string not provided")]
    MissingInput,

    #[error("FEN argument was not a string (found {0})")]
    NotText(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid side to move: '{0}' (must be \"w\" or \"b\")")]
    InvalidTurn(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
