use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::board::Board;
use crate::engine::movegen::MoveSet;
use crate::engine::types::{ChessError, Color};

// ---------------------------------------------------------------------------
// Request models
// ---------------------------------------------------------------------------

/// Body of `POST /api/moves` and `POST /api/validate`.
///
/// `fen` is kept as raw JSON so a missing value and a non-string value can be
/// told apart.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FenRequest {
    #[serde(default)]
    pub fen: serde_json::Value,
    pub notation: Option<String>,
    /// Restrict the answer to the piece on this square ("e4").
    pub from: Option<String>,
}

impl FenRequest {
    /// The FEN text, or the input error that stands in its way.
    pub fn fen_str(&self) -> Result<&str, ChessError> {
        match &self.fen {
            serde_json::Value::Null => Err(ChessError::MissingInput),
            serde_json::Value::String(s) if s.is_empty() => Err(ChessError::MissingInput),
            serde_json::Value::String(s) => Ok(s),
            other => Err(ChessError::NotText(json_type_name(other).to_string())),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// How squares are written in a move response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Notation {
    /// Internal square index ("0" = h1 .. "63" = a8).
    #[default]
    Index,
    /// Algebraic ("e4").
    Algebraic,
}

impl Notation {
    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "index" => Some(Notation::Index),
            "algebraic" => Some(Notation::Algebraic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Index => "index",
            Notation::Algebraic => "algebraic",
        }
    }
}

// ---------------------------------------------------------------------------
// Response models
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub language: String,
    pub engine: String,
    pub uptime: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSetResponse {
    pub fen: String,
    pub side_to_move: String,
    pub notation: String,
    pub board: Vec<Vec<Option<String>>>,
    /// Number of (origin, destination) pairs.
    pub count: usize,
    pub moves: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub fn color_name(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Build the 8×8 board array for the API response.
/// Row 0 = rank 8 (top), row 7 = rank 1 (bottom).
/// Pieces: uppercase for White ("R"), lowercase for Black ("r").
/// Empty = None.
pub fn board_to_api(board: &Board) -> Vec<Vec<Option<String>>> {
    board
        .cells()
        .chunks(8)
        .map(|rank| {
            rank.iter()
                .map(|piece| piece.to_char().map(|c| c.to_string()))
                .collect()
        })
        .collect()
}

/// Write a move set with the requested square notation.
///
/// Index keys are decimal strings, since JSON object keys must be strings.
pub fn moves_to_api(moves: &MoveSet, notation: Notation) -> BTreeMap<String, Vec<String>> {
    match notation {
        Notation::Algebraic => moves.to_algebraic(),
        Notation::Index => moves
            .iter()
            .map(|(from, to)| {
                (
                    from.index().to_string(),
                    to.iter().map(|sq| sq.index().to_string()).collect(),
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{fen, movegen};
    use serde_json::json;

    fn request(body: serde_json::Value) -> FenRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn fen_str_accepts_text() {
        let req = request(json!({ "fen": fen::START_FEN }));
        assert_eq!(req.fen_str(), Ok(fen::START_FEN));
    }

    #[test]
    fn fen_str_missing() {
        assert_eq!(request(json!({})).fen_str(), Err(ChessError::MissingInput));
        assert_eq!(
            request(json!({ "fen": null })).fen_str(),
            Err(ChessError::MissingInput)
        );
        assert_eq!(
            request(json!({ "fen": "" })).fen_str(),
            Err(ChessError::MissingInput)
        );
    }

    #[test]
    fn fen_str_not_text() {
        assert_eq!(
            request(json!({ "fen": 42 })).fen_str(),
            Err(ChessError::NotText("number".into()))
        );
        assert_eq!(
            request(json!({ "fen": ["8/8/8/8/8/8/8/8"] })).fen_str(),
            Err(ChessError::NotText("array".into()))
        );
    }

    #[test]
    fn notation_parsing() {
        assert_eq!(Notation::from_str_loose("INDEX"), Some(Notation::Index));
        assert_eq!(
            Notation::from_str_loose("Algebraic"),
            Some(Notation::Algebraic)
        );
        assert_eq!(Notation::from_str_loose("san"), None);
        assert_eq!(Notation::default().as_str(), "index");
    }

    #[test]
    fn board_rows_start_at_rank_8() {
        let board = fen::parse(fen::START_FEN).unwrap();
        let rows = board_to_api(&board);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0][0].as_deref(), Some("r"));
        assert_eq!(rows[7][4].as_deref(), Some("K"));
        assert_eq!(rows[4][4], None);
    }

    #[test]
    fn moves_in_both_notations() {
        let moves = movegen::generate("8/8/8/8/8/8/8/N7 w - - 0 1").unwrap();

        let alg = moves_to_api(&moves, Notation::Algebraic);
        assert_eq!(alg.keys().collect::<Vec<_>>(), vec!["a1"]);

        // a1 is internal square 7; b3 = 22, c2 = 13.
        let idx = moves_to_api(&moves, Notation::Index);
        let mut to = idx["7"].clone();
        to.sort();
        assert_eq!(to, vec!["13".to_string(), "22".to_string()]);
    }
}
