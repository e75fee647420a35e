use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, ViewerDto},
    },
    server::{
        controller::util::get_viewer::get_viewer_from_session,
        error::Error,
        model::{app::AppState, session::viewer::SessionViewer},
        service::auth::login::login_service,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Signs a staff member or guild member in with the guild API
///
/// Stores the returned viewer and its credential in the session so later requests can edit
/// loadouts without a profile link.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = ViewerDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.guild_client, &credentials).await?;

    // Prevent session fixation by issuing a new session ID on sign in
    session.cycle_id().await?;
    SessionViewer::insert(&session, login.viewer.clone(), login.token).await?;

    Ok((StatusCode::OK, Json(login.viewer)))
}

/// Logs the viewer out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that holds no data fails, so only clear when signed in
    if SessionViewer::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the signed-in viewer after re-validating their credential
///
/// A credential the guild API no longer accepts clears the session.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in viewer", body = ViewerDto),
        (status = 404, description = "Viewer not found", body = ErrorDto),
        (status = 503, description = "Guild API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_viewer(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(viewer)))
}
