use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pkg::internal::{
    adaptors::companies::spec::ConversionError, parser::ParseError, payload::PayloadError,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("invalid request body: {0}")]
    Body(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No companies found")]
    NotFound,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Payload(_)
            | Error::Body(_)
            | Error::Parse(_)
            | Error::Conversion(_)
            | Error::Database(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Config(_) | Error::Migrate(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, "{detail}");
        } else {
            tracing::warn!(%status, "{detail}");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
