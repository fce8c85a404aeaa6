pub mod board;
pub mod fen;
pub mod movegen;
pub mod padded;
pub mod types;

pub use board::Board;
pub use fen::{Fen, parse, validate};
pub use movegen::{LegalityFilter, MoveGenerator, MoveSet, PseudoLegal, generate};
pub use padded::{PaddedBoard, pad};
pub use types::*;
