use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ProfileUpdateDto},
        auth::AccessDto,
        player::PlayerDto,
    },
    server::{
        controller::util::credentials::{request_credentials, TokenQuery},
        error::Error,
        model::app::AppState,
        service::{access::AccessGate, profile::ProfileService},
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Check whether the caller may view and edit a player
///
/// Lets the client tell an expired profile link apart from one that was never valid.
#[utoipa::path(
    get,
    path = "/api/players/{player_id}/access",
    tag = PROFILE_TAG,
    params(
        ("player_id" = i64, Path, description = "ID of the player"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Access granted", body = AccessDto),
        (status = 401, description = "Not authorized or profile link expired", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_access(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i64>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, Error> {
    let credentials = request_credentials(&session, query).await?;

    let access = AccessGate::new(&state.guild_client)
        .authorize(player_id, &credentials)
        .await?;

    Ok((StatusCode::OK, Json(access.to_dto())))
}

/// Update a player's name, level, or role
#[utoipa::path(
    post,
    path = "/api/players/{player_id}/profile",
    tag = PROFILE_TAG,
    params(
        ("player_id" = i64, Path, description = "ID of the player"),
        TokenQuery
    ),
    request_body = ProfileUpdateDto,
    responses(
        (status = 200, description = "Updated player", body = PlayerDto),
        (status = 400, description = "Invalid profile update", body = ErrorDto),
        (status = 401, description = "Not authorized or profile link expired", body = ErrorDto),
        (status = 403, description = "Viewer may not edit this player", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 422, description = "Guild API refused the update", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i64>,
    Query(query): Query<TokenQuery>,
    Json(update): Json<ProfileUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials = request_credentials(&session, query).await?;

    let player = ProfileService::new(&state.guild_client)
        .update_profile(player_id, update, &credentials)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}
