use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::auth::ViewerDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::viewer::SessionViewer},
        service::auth::viewer::revalidate_viewer_service,
    },
};

/// Retrieves the viewer from session and re-validates its credential with the guild API
///
/// # Arguments
/// - `state`: Application state with the guild API client
/// - `session`: The viewer's session
///
/// # Returns
/// - `Ok(ViewerDto)`: Viewer found and its credential still accepted by the guild API
/// - `Err(Error::AuthError(AuthError::ViewerNotInSession))`: No viewer in session, or the
///   credential was rejected (session is cleared)
/// - `Err(Error)`: Session or remote failures
pub async fn get_viewer_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ViewerDto, Error> {
    let Some(stored) = SessionViewer::get(session).await? else {
        return Err(Error::AuthError(AuthError::ViewerNotInSession));
    };

    let Some(viewer) = revalidate_viewer_service(&state.guild_client, &stored.token).await? else {
        session.clear().await;

        tracing::warn!(
            viewer_id = stored.viewer.id,
            "Session cleared for viewer whose credential was rejected by the guild API"
        );

        return Err(Error::AuthError(AuthError::ViewerNotInSession));
    };

    if viewer != stored.viewer {
        SessionViewer::insert(session, viewer.clone(), stored.token).await?;
    }

    Ok(viewer)
}
