use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::tmdb::TmdbError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("TMDB error: {0}")]
    Tmdb(#[from] TmdbError),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalWithMessage(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithMessage(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Tmdb(TmdbError::NotFound) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Tmdb(TmdbError::Upstream { .. }) | AppError::Tmdb(TmdbError::Request(_)) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Tmdb(_) | AppError::InternalWithMessage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Tmdb(TmdbError::NotFound) | AppError::NotFound => "Not found".to_string(),
            AppError::Tmdb(TmdbError::Upstream { status, message }) => {
                format!("TMDB error: {} {}", status, message)
            }
            AppError::Tmdb(TmdbError::Request(_)) => "TMDB unreachable".to_string(),
            AppError::Tmdb(TmdbError::Decode(_)) => "Invalid TMDB response".to_string(),
            AppError::Tmdb(TmdbError::MissingConfig(name)) => {
                format!("Missing configuration: {}", name)
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InternalWithMessage(msg) => format!("Internal error: {}", msg),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
