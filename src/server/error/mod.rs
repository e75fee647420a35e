//! Error types for the Guildhall server application.
//!
//! This module provides the error handling system for the server, with specialized error types
//! for each domain (access control, configuration, loadouts, the remote guild API). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod loadout;
pub mod remote;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ApiErrorKind, ErrorDto},
    server::error::{
        auth::AuthError, config::ConfigError, loadout::LoadoutError, remote::RemoteError,
    },
};

/// Main error type for the Guildhall server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Access errors (denied, expired profile link, read-only viewer, bad login)
/// - Loadout errors (unknown player/gear, incompatible slot, concurrent change, unapplied change)
/// - Remote guild API errors (network failures, unexpected statuses, business rule rejections)
/// - External library errors (session store)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Access error (denied, expired link, read-only viewer, login failures).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Loadout error (validation failures, reconciliation mismatches).
    #[error(transparent)]
    LoadoutError(#[from] LoadoutError),
    /// Remote guild API error (transport, status, rejection).
    #[error(transparent)]
    RemoteError(#[from] RemoteError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Guildhall's code.
    #[error("Internal error with Guildhall's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mapping; everything else becomes a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LoadoutError(err) => err.into_response(),
            Self::RemoteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with an optional error category.
pub(crate) fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    kind: Option<ApiErrorKind>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            error: error.into(),
            kind,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            Some(ApiErrorKind::Internal),
        )
    }
}
