use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::server::{
    error::Error, model::session::viewer::SessionViewer, service::access::Credentials,
};

/// Optional profile link token accepted by player endpoints
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct TokenQuery {
    /// Profile link token; the session viewer is used when absent
    pub token: Option<String>,
}

/// Resolves the credentials of a request from its token query and session.
///
/// # Returns
/// - `Ok(Credentials)` - Token, session viewer, or no credentials at all
/// - `Err(Error::SessionError)` - Session could not be read
pub async fn request_credentials(
    session: &Session,
    query: TokenQuery,
) -> Result<Credentials, Error> {
    let viewer = SessionViewer::get(session).await?.map(|s| s.viewer);

    Ok(Credentials::resolve(query.token, viewer))
}
