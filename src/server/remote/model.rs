//! Response bodies specific to the remote guild API.
//!
//! Records that are passed through to the dashboard unchanged (players, drifters, gear, equipped
//! gear) reuse the shared DTOs in [`crate::model`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{auth::ViewerDto, player::PlayerDto, slot::SlotKey};

/// Result of `GET /players/{id}/profile-token`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenValidationDto {
    pub success: bool,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
    /// `"expired"` when the token is valid but past its expiry, anything else otherwise.
    #[serde(default)]
    pub error_kind: Option<String>,
}

impl TokenValidationDto {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.error_kind
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("expired"))
            || self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Result of `POST /players/{id}/profile`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileUpdateResultDto {
    pub success: bool,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResultDto {
    pub token: String,
    pub viewer: ViewerDto,
}

/// Generic body of mutation responses and error responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RemoteMessageDto {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct EquipGearBody {
    pub gear_id: i64,
    pub drifter: u8,
    pub slot: SlotKey,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdateBody<'a> {
    #[serde(flatten)]
    pub fields: &'a crate::model::api::ProfileUpdateDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'a str>,
}
