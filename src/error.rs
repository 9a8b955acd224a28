use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ScribeError {
    /// A create request arrived without a usable title.
    #[error("Post title is required")]
    TitleRequired,

    /// A lookup or delete matched no row. Reported as 500, not 404:
    /// not-found deliberately rides the operational-failure path
    /// (see DESIGN.md before changing this).
    #[error("Post with id {0} is not found")]
    PostNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl IntoResponse for ScribeError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ScribeError::TitleRequired => {
                let body = ApiErrorResponse {
                    error: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            ScribeError::PostNotFound(_) => {
                let body = ApiErrorResponse {
                    error: self.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            ScribeError::DatabaseError(ref e) => {
                // Log the real error; clients only ever see the generic body.
                error!(error = %e, "persistence call failed");
                let body = ApiErrorResponse {
                    error: "Internal server error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
