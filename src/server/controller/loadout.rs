use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{EquipRequestDto, ErrorDto, UnequipRequestDto},
        loadout::LoadoutDto,
        slot::SlotRef,
    },
    server::{
        controller::util::credentials::{request_credentials, TokenQuery},
        error::Error,
        model::app::AppState,
        service::loadout::LoadoutService,
    },
};

pub static LOADOUT_TAG: &str = "loadout";

fn loadout_service(state: &AppState) -> LoadoutService<'_> {
    LoadoutService::new(&state.guild_client, &state.locks, &state.catalog)
}

/// Get the loadout of every drifter of a player
#[utoipa::path(
    get,
    path = "/api/players/{player_id}/loadout",
    tag = LOADOUT_TAG,
    params(
        ("player_id" = i64, Path, description = "ID of the player"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Current loadout", body = LoadoutDto),
        (status = 401, description = "Not authorized or profile link expired", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 502, description = "Guild API returned an inconsistent loadout", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loadout(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i64>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, Error> {
    let credentials = request_credentials(&session, query).await?;

    let (loadout, access) = loadout_service(&state)
        .load_player_loadout(player_id, &credentials)
        .await?;

    Ok((StatusCode::OK, Json(loadout.to_dto(access.can_edit))))
}

/// Equip gear into a drifter slot, moving it out of its current slot if needed
#[utoipa::path(
    post,
    path = "/api/players/{player_id}/loadout/equip",
    tag = LOADOUT_TAG,
    params(
        ("player_id" = i64, Path, description = "ID of the player"),
        TokenQuery
    ),
    request_body = EquipRequestDto,
    responses(
        (status = 200, description = "Refetched loadout showing the change", body = LoadoutDto),
        (status = 400, description = "Slot does not accept the gear or drifter is unassigned", body = ErrorDto),
        (status = 401, description = "Not authorized or profile link expired", body = ErrorDto),
        (status = 403, description = "Viewer may not edit this loadout", body = ErrorDto),
        (status = 404, description = "Player or gear not found", body = ErrorDto),
        (status = 409, description = "Another change is in progress", body = ErrorDto),
        (status = 422, description = "Guild API refused the change", body = ErrorDto),
        (status = 502, description = "Change did not take effect", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn equip_gear(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i64>,
    Query(query): Query<TokenQuery>,
    Json(request): Json<EquipRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials = request_credentials(&session, query).await?;
    let target = SlotRef {
        drifter: request.drifter,
        slot: request.slot,
    };

    let (loadout, access) = loadout_service(&state)
        .equip(player_id, request.gear_id, target, &credentials)
        .await?;

    Ok((StatusCode::OK, Json(loadout.to_dto(access.can_edit))))
}

/// Unequip gear from whichever slot holds it
///
/// Unequipping gear that is not equipped succeeds without changing anything.
#[utoipa::path(
    post,
    path = "/api/players/{player_id}/loadout/unequip",
    tag = LOADOUT_TAG,
    params(
        ("player_id" = i64, Path, description = "ID of the player"),
        TokenQuery
    ),
    request_body = UnequipRequestDto,
    responses(
        (status = 200, description = "Refetched loadout showing the change", body = LoadoutDto),
        (status = 401, description = "Not authorized or profile link expired", body = ErrorDto),
        (status = 403, description = "Viewer may not edit this loadout", body = ErrorDto),
        (status = 404, description = "Player or gear not found", body = ErrorDto),
        (status = 409, description = "Another change is in progress", body = ErrorDto),
        (status = 422, description = "Guild API refused the change", body = ErrorDto),
        (status = 502, description = "Change did not take effect", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unequip_gear(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i64>,
    Query(query): Query<TokenQuery>,
    Json(request): Json<UnequipRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials = request_credentials(&session, query).await?;

    let (loadout, access) = loadout_service(&state)
        .unequip(player_id, request.gear_id, &credentials)
        .await?;

    Ok((StatusCode::OK, Json(loadout.to_dto(access.can_edit))))
}
