use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid stored date: {0}")]
    InvalidStoredDate(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            Self::NoData(msg) => {
                tracing::error!("No data: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            Self::InvalidStoredDate(date) => {
                tracing::error!(date = %date, "Stored date is not YYYY-MM-DD");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid date in dataset".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
