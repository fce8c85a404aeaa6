use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::engine::fen;
use crate::engine::movegen::{MoveGenerator, MoveSet};
use crate::engine::padded;
use crate::engine::types::{ChessError, Square};
use crate::positions::{self, PositionRecord};

use super::errors::ApiError;
use super::models::*;
use super::state::SharedState;

// =========================================================================
// Health
// =========================================================================

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        language: "rust".to_string(),
        engine: "chess-positions".to_string(),
        uptime,
    })
}

// =========================================================================
// Positions
// =========================================================================

/// GET /api/positions
pub async fn list_positions() -> Json<&'static [PositionRecord]> {
    Json(positions::all())
}

// =========================================================================
// Moves
// =========================================================================

/// POST /api/moves
pub async fn generate_moves(
    State(state): State<SharedState>,
    input: Result<Json<FenRequest>, JsonRejection>,
) -> Result<Json<MoveSetResponse>, ApiError> {
    let Json(input) = input.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let notation_str = input
        .notation
        .as_deref()
        .unwrap_or(state.config.default_notation.as_str());
    let notation = Notation::from_str_loose(notation_str).ok_or_else(|| {
        ApiError::InvalidRequest(format!(
            "unknown notation '{notation_str}' (expected \"index\" or \"algebraic\")"
        ))
    })?;

    let fen_str = input.fen_str()?;
    let record = fen::parse_fen(fen_str)?;
    let mut moves = MoveGenerator::new()
        .generate_padded(&padded::pad(&record.board), record.side_to_move);

    if let Some(from) = input.from.as_deref() {
        let sq = Square::from_algebraic(from)
            .ok_or_else(|| ChessError::InvalidSquare(from.to_string()))?;
        let mut only = MoveSet::new();
        only.insert(sq, moves.get(sq).map(<[Square]>::to_vec).unwrap_or_default());
        moves = only;
    }

    debug!(
        fen = fen_str,
        origins = moves.len(),
        moves = moves.move_count(),
        "served move set"
    );

    Ok(Json(MoveSetResponse {
        fen: record.to_fen(),
        side_to_move: color_name(record.side_to_move).to_string(),
        notation: notation.as_str().to_string(),
        board: board_to_api(&record.board),
        count: moves.move_count(),
        moves: moves_to_api(&moves, notation),
    }))
}

// =========================================================================
// Validate
// =========================================================================

/// POST /api/validate
///
/// A malformed FEN is a normal `valid: false` answer. A missing, empty or
/// non-text `fen` is an input error, as on `/api/moves`.
pub async fn validate_fen(
    input: Result<Json<FenRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(input) = input.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let fen_str = input.fen_str()?;
    Ok(Json(ValidateResponse {
        valid: fen::validate(fen_str),
    }))
}

// =========================================================================
// Tests
// =========================================================================
