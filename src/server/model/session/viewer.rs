use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::auth::ViewerDto, server::error::Error};

/// Session key for the signed-in viewer.
pub const SESSION_VIEWER_KEY: &str = "guildhall:auth:viewer";

/// Signed-in viewer together with the remote auth token used to re-validate it.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct SessionViewer {
    pub viewer: ViewerDto,
    pub token: String,
}

impl SessionViewer {
    /// Insert the viewer into the session, replacing any previous one
    pub async fn insert(session: &Session, viewer: ViewerDto, token: String) -> Result<(), Error> {
        session
            .insert(SESSION_VIEWER_KEY, SessionViewer { viewer, token })
            .await?;

        Ok(())
    }

    /// Get the viewer from the session
    pub async fn get(session: &Session) -> Result<Option<SessionViewer>, Error> {
        Ok(session.get::<SessionViewer>(SESSION_VIEWER_KEY).await?)
    }

    /// Remove the viewer from the session
    pub async fn remove(session: &Session) -> Result<Option<SessionViewer>, Error> {
        Ok(session.remove::<SessionViewer>(SESSION_VIEWER_KEY).await?)
    }
}
