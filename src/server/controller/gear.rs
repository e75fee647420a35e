use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, filter::TypeFilter, gear::GearDto},
    server::{error::Error, model::app::AppState, service::gear::GearService},
};

pub static GEAR_TAG: &str = "gear";

/// Gear catalog search parameters
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct GearQuery {
    /// Case-insensitive text matched against gear names and skills
    #[serde(default)]
    pub search: String,
    /// Gear type to restrict results to, or `all`
    #[serde(default, rename = "type")]
    #[param(value_type = Option<String>)]
    pub gear_type: TypeFilter,
}

/// Search the gear catalog
#[utoipa::path(
    get,
    path = "/api/gear",
    tag = GEAR_TAG,
    params(GearQuery),
    responses(
        (status = 200, description = "Matching gear in catalog order", body = Vec<GearDto>),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gear(
    State(state): State<AppState>,
    Query(query): Query<GearQuery>,
) -> Result<impl IntoResponse, Error> {
    let gear = GearService::new(&state.guild_client, &state.catalog)
        .browse(&query.search, query.gear_type)
        .await?;

    Ok((StatusCode::OK, Json(gear)))
}
