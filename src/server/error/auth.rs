use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ApiErrorKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Viewer is not authorized to access player ID {0}")]
    AccessDenied(i64),
    #[error("Profile access token for player ID {0} has expired")]
    TokenExpired(i64),
    #[error("Viewer may view but not edit player ID {0}")]
    EditNotPermitted(i64),
    #[error("Login rejected by the guild API")]
    InvalidCredentials,
    #[error("Viewer is not present in session")]
    ViewerNotInSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "You are not authorized to view this player.",
                Some(ApiErrorKind::AccessDenied),
            ),
            Self::TokenExpired(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "This profile link has expired, please generate a new link.",
                Some(ApiErrorKind::TokenExpired),
            ),
            Self::EditNotPermitted(_) => error_response(
                StatusCode::FORBIDDEN,
                "You may view this loadout but not change it.",
                Some(ApiErrorKind::EditNotPermitted),
            ),
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid username or password.",
                Some(ApiErrorKind::InvalidCredentials),
            ),
            Self::ViewerNotInSession => error_response(
                StatusCode::NOT_FOUND,
                "Viewer not found",
                Some(ApiErrorKind::NotFound),
            ),
        }
    }
}
