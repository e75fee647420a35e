use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ApiErrorKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum RemoteError {
    /// Request could not be sent or the response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Remote API answered with a status the client has no mapping for.
    #[error("Guild API request to {endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },
    /// Remote API refused the request on business grounds (e.g. level requirements).
    #[error("Guild API rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl RemoteError {
    /// Whether the failure is temporary and the same request may succeed later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(err) => !(err.is_decode() || err.is_builder() || err.is_status()),
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Rejected { .. } => false,
        }
    }
}

impl IntoResponse for RemoteError {
    fn into_response(self) -> Response {
        if self.is_transient() {
            tracing::warn!("{}", self);

            return error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "The guild API is temporarily unavailable, please try again.",
                Some(ApiErrorKind::Transient),
            );
        }

        match self {
            Self::Rejected { message, .. } => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                message,
                Some(ApiErrorKind::Rejected),
            ),
            err => {
                tracing::error!("{}", err);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Unexpected response from the guild API.",
                    Some(ApiErrorKind::Internal),
                )
            }
        }
    }
}
