use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use records::RecordError;
use serde_json::json;
use thiserror::Error;

/// Shown to the user whenever submitted numbers fail to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input: please check numeric fields";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(RecordError),
    #[error("Record source error: {0}")]
    Records(RecordError),
}

/// Bad user input and unreadable data files end up as different statuses.
impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        if err.is_invalid_input() {
            AppError::InvalidInput(err)
        } else {
            AppError::Records(err)
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(record_err) => {
                tracing::warn!(error = %record_err, "Rejected submitted crop rows.");
                (StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUT_MESSAGE.to_string())
            }
            AppError::Records(record_err) => {
                tracing::error!(error = ?record_err, "Record source error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Crop price data is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
