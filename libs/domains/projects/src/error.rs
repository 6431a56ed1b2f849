use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    // The message names date_created even though the update path ignores it;
    // clients already match on this exact text.
    #[error("Request body must contain either 'name', 'description', or 'date_created'")]
    NoUpdatableField,

    #[error("project doesn't exist")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Uniform error body: `{"error":{"message":"<text>"}}`
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProjectError::MissingField(_) | ProjectError::NoUpdatableField => {
                tracing::info!("Bad request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ProjectError::NotFound => {
                tracing::info!("Not found: {}", self);
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ProjectError::Database(err) => {
                // Persistence failures are logged in full but never leaked.
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: ErrorMessage { message },
        });

        (status, body).into_response()
    }
}
