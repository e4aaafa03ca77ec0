//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps the data layer and configuration errors and
//! implements `IntoResponse`, which makes the controllers the only place where errors
//! are turned into responses.

pub mod config;
pub mod store;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, store::StoreError},
};

/// Message returned whenever a user lookup, update or delete matches nothing.
pub const USER_NOT_FOUND: &str = "User not found";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store error.
    ///
    /// Connectivity failures result in 503 Service Unavailable with a generic message;
    /// operation failures result in 400 Bad Request carrying the driver's message.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The rolling log file could not be opened at startup.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Failed to open log file: {0}")]
    LogFileErr(#[from] tracing_appender::rolling::InitError),

    /// The requested resource does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// The request could not be read.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Status Codes
/// - 400 Bad Request - `BadRequest` and store `OperationFailed`
/// - 404 Not Found - `NotFound`
/// - 503 Service Unavailable - store `ConnectionFailed`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::StoreErr(err @ StoreError::ConnectionFailed { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::StoreErr(StoreError::OperationFailed(msg)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
