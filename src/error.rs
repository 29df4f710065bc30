//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid car name")]
    InvalidName,
    #[error("Invalid car year")]
    InvalidYear,
    #[error("Invalid car image URL")]
    InvalidImage,
}

/// Failure reported by the storage collaborator. Display is the driver message, unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Car not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(StoreError::Db(e))
    }
}

/// Body of client-caused failures (400, 404).
#[derive(Serialize)]
pub struct MessageBody {
    pub msg: String,
}

/// Body of infrastructure failures (500).
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(e) => {
                tracing::warn!(reason = %e, "rejected car payload");
                (status, Json(MessageBody { msg: e.to_string() })).into_response()
            }
            AppError::NotFound => {
                (status, Json(MessageBody { msg: self.to_string() })).into_response()
            }
            AppError::Storage(_) => {
                tracing::error!(error = %self, "request failed");
                (status, Json(ErrorBody { error: self.to_string() })).into_response()
            }
        }
    }
}
