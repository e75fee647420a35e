use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{
        api::ApiErrorKind,
        gear::GearType,
        loadout::{EquipRejection, LoadoutStateError},
        slot::{SlotKey, SlotRef},
    },
    server::error::error_response,
};

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("Player ID {0} not found")]
    PlayerNotFound(i64),
    #[error("Gear ID {0} not found in the gear catalog")]
    GearNotFound(i64),
    #[error("Gear of type {gear_type} cannot be equipped in the {slot} slot")]
    IncompatibleSlot { slot: SlotKey, gear_type: GearType },
    #[error("Drifter {0} does not exist")]
    DrifterNotFound(u8),
    #[error("Drifter {0} is unassigned")]
    DrifterUnassigned(u8),
    #[error("A loadout change for player ID {0} is already in progress")]
    OperationInProgress(i64),
    /// The remote API acknowledged a change that the follow-up fetch does not show.
    #[error("Change to gear ID {gear_id} for player ID {player_id} was not applied (expected {expected:?}, found {found:?})")]
    MutationNotApplied {
        player_id: i64,
        gear_id: i64,
        expected: Option<SlotRef>,
        found: Option<SlotRef>,
    },
    /// The remote API returned records that cannot form a valid loadout.
    #[error("Guild API returned an inconsistent loadout: {0}")]
    InconsistentState(#[from] LoadoutStateError),
    #[error("Invalid profile update: {0}")]
    InvalidProfile(String),
}

impl From<EquipRejection> for LoadoutError {
    fn from(value: EquipRejection) -> Self {
        match value {
            EquipRejection::GearNotFound(id) => Self::GearNotFound(id),
            EquipRejection::DrifterNotFound(ordinal) => Self::DrifterNotFound(ordinal),
            EquipRejection::DrifterUnassigned(ordinal) => Self::DrifterUnassigned(ordinal),
            EquipRejection::IncompatibleSlot { slot, gear_type } => {
                Self::IncompatibleSlot { slot, gear_type }
            }
        }
    }
}

impl IntoResponse for LoadoutError {
    fn into_response(self) -> Response {
        match self {
            Self::PlayerNotFound(_) => error_response(
                StatusCode::NOT_FOUND,
                "Player not found",
                Some(ApiErrorKind::NotFound),
            ),
            Self::GearNotFound(_) => error_response(
                StatusCode::NOT_FOUND,
                self.to_string(),
                Some(ApiErrorKind::GearNotFound),
            ),
            Self::IncompatibleSlot { .. } => error_response(
                StatusCode::BAD_REQUEST,
                self.to_string(),
                Some(ApiErrorKind::IncompatibleSlot),
            ),
            Self::DrifterNotFound(_) | Self::DrifterUnassigned(_) | Self::InvalidProfile(_) => {
                error_response(
                    StatusCode::BAD_REQUEST,
                    self.to_string(),
                    Some(ApiErrorKind::InvalidRequest),
                )
            }
            Self::OperationInProgress(_) => error_response(
                StatusCode::CONFLICT,
                "Another change to this loadout is still in progress, please wait.",
                Some(ApiErrorKind::OperationInProgress),
            ),
            Self::MutationNotApplied { .. } => {
                tracing::warn!("{}", self);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "The change did not take effect, please try again.",
                    Some(ApiErrorKind::NotApplied),
                )
            }
            Self::InconsistentState(_) => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "The guild API returned an inconsistent loadout.",
                    Some(ApiErrorKind::Internal),
                )
            }
        }
    }
}
