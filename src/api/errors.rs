use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::engine::ChessError;

/// Structured API error that serializes to JSON.
#[derive(Debug)]
pub enum ApiError {
    MissingFen,
    FenNotText(ChessError),
    InvalidFen(ChessError),
    InvalidTurn(ChessError),
    InvalidSquare(ChessError),
    InvalidRequest(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::MissingFen => (
                StatusCode::BAD_REQUEST,
                "MISSING_FEN",
                ChessError::MissingInput.to_string(),
            ),
            ApiError::FenNotText(err) => (StatusCode::BAD_REQUEST, "FEN_NOT_TEXT", err.to_string()),
            ApiError::InvalidFen(err) => (StatusCode::BAD_REQUEST, "INVALID_FEN", err.to_string()),
            ApiError::InvalidTurn(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_TURN", err.to_string())
            }
            ApiError::InvalidSquare(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_SQUARE", err.to_string())
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChessError> for ApiError {
    fn from(err: ChessError) -> Self {
        match &err {
            ChessError::MissingInput => ApiError::MissingFen,
            ChessError::NotText(_) => ApiError::FenNotText(err),
            ChessError::InvalidFen(_) => ApiError::InvalidFen(err),
            ChessError::InvalidTurn(_) => ApiError::InvalidTurn(err),
            ChessError::InvalidSquare(_) => ApiError::InvalidSquare(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_to_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn missing_fen_returns_400() {
        let (status, json) = error_to_json(ApiError::MissingFen).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "MISSING_FEN");
        assert_eq!(json["error"]["message"], "FEN string not provided");
    }

    #[tokio::test]
    async fn invalid_request_returns_400() {
        let (status, json) = error_to_json(ApiError::InvalidRequest("bad input".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_REQUEST");
        assert_eq!(json["error"]["message"], "bad input");
    }

    #[tokio::test]
    async fn chess_errors_convert_to_api_errors() {
        let cases = [
            (ChessError::MissingInput, "MISSING_FEN"),
            (ChessError::NotText("number".into()), "FEN_NOT_TEXT"),
            (ChessError::InvalidFen("bad fen".into()), "INVALID_FEN"),
            (ChessError::InvalidTurn("x".into()), "INVALID_TURN"),
            (ChessError::InvalidSquare("z9".into()), "INVALID_SQUARE"),
        ];
        for (chess_err, code) in cases {
            let api_err: ApiError = chess_err.into();
            let (status, json) = error_to_json(api_err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"]["code"], code);
        }
    }
}
