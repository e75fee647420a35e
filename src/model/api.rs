use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{loadout::EquipRejection, player::GameRole, slot::SlotKey};

/// Machine-readable category of an API error.
///
/// Lets the client tell "request a new link" apart from "not authorized", "does not exist",
/// and "your change did not take effect".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    NotFound,
    AccessDenied,
    TokenExpired,
    EditNotPermitted,
    InvalidCredentials,
    IncompatibleSlot,
    GearNotFound,
    InvalidRequest,
    OperationInProgress,
    NotApplied,
    Rejected,
    Transient,
    Internal,
}

impl ApiErrorKind {
    /// Message shown to the viewer for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "This player does not exist.",
            Self::AccessDenied => "You are not authorized to view this player.",
            Self::TokenExpired => "This profile link has expired. Please generate a new link.",
            Self::EditNotPermitted => "You may view this loadout but not change it.",
            Self::InvalidCredentials => "Invalid username or password.",
            Self::IncompatibleSlot => "That gear does not fit this slot.",
            Self::GearNotFound => "That gear is not in the catalog.",
            Self::InvalidRequest => "That change is not allowed.",
            Self::OperationInProgress => "Another change is still in progress, please wait.",
            Self::NotApplied => "The change did not take effect, please try again.",
            Self::Rejected => "The guild refused this change.",
            Self::Transient => "The guild is temporarily unavailable, please try again.",
            Self::Internal => "Something went wrong, please try again later.",
        }
    }
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// Error category, absent for errors without a dedicated category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ApiErrorKind>,
}

/// Body of an equip request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EquipRequestDto {
    pub gear_id: i64,
    /// Drifter ordinal, starting at 1
    pub drifter: u8,
    pub slot: SlotKey,
}

/// Body of an unequip request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UnequipRequestDto {
    pub gear_id: i64,
}

/// Player profile fields that may be changed; absent fields are left untouched
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfileUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<GameRole>,
}

/// A failed dashboard API call as seen by the web client.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, `0` when the request never reached the server
    pub status: u16,
    pub kind: Option<ApiErrorKind>,
    pub message: String,
}

impl ApiError {
    /// Builds the error for a non-success response.
    ///
    /// Categorised errors use the message for their category, except rejections which carry the
    /// guild's own explanation.
    pub fn from_response(status: u16, body: Option<ErrorDto>) -> Self {
        let Some(body) = body else {
            return Self {
                status,
                kind: None,
                message: format!("Request failed with status {}", status),
            };
        };

        let message = match body.kind {
            Some(ApiErrorKind::Rejected) | None => body.error,
            Some(kind) => kind.user_message().to_string(),
        };

        Self {
            status,
            kind: body.kind,
            message,
        }
    }

    /// Error for a request that could not be sent or whose response could not be read.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            kind: Some(ApiErrorKind::Transient),
            message: message.into(),
        }
    }

    /// Whether the viewer has to request a new profile link to continue.
    pub fn needs_new_link(&self) -> bool {
        self.kind == Some(ApiErrorKind::TokenExpired)
    }
}

impl From<EquipRejection> for ApiError {
    fn from(value: EquipRejection) -> Self {
        let kind = match value {
            EquipRejection::IncompatibleSlot { .. } => ApiErrorKind::IncompatibleSlot,
            EquipRejection::GearNotFound(_) => ApiErrorKind::GearNotFound,
            EquipRejection::DrifterNotFound(_) | EquipRejection::DrifterUnassigned(_) => {
                ApiErrorKind::InvalidRequest
            }
        };

        Self {
            status: 0,
            kind: Some(kind),
            message: value.to_string(),
        }
    }
}
