//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Sign in with the guild API
/// - `GET /api/auth/logout` - Logout current viewer
/// - `GET /api/auth/user` - Get the signed-in viewer
/// - `GET /api/players/{player_id}/loadout` - Get a player's loadout
/// - `POST /api/players/{player_id}/loadout/equip` - Equip gear into a drifter slot
/// - `POST /api/players/{player_id}/loadout/unequip` - Unequip gear
/// - `GET /api/players/{player_id}/access` - Check access to a player
/// - `POST /api/players/{player_id}/profile` - Update a player's profile
/// - `GET /api/gear` - Search the gear catalog
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged into the main
/// application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from(guild_client);
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Guildhall", description = "Guildhall API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Staff session API routes"),
        (name = controller::loadout::LOADOUT_TAG, description = "Drifter loadout API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Player access and profile API routes"),
        (name = controller::gear::GEAR_TAG, description = "Gear catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_viewer))
        .routes(routes!(controller::loadout::get_loadout))
        .routes(routes!(controller::loadout::equip_gear))
        .routes(routes!(controller::loadout::unequip_gear))
        .routes(routes!(controller::profile::get_access))
        .routes(routes!(controller::profile::update_profile))
        .routes(routes!(controller::gear::get_gear))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
