use dioxus_logger::tracing;

use crate::{
    model::auth::ViewerDto,
    server::{error::Error, remote::GuildApiClient},
};

/// Re-validates a stored auth token with the remote API.
///
/// # Returns
/// - `Ok(Some(ViewerDto))` - Token still valid; the viewer may have changed (e.g. staff flag)
/// - `Ok(None)` - Token was revoked or expired
/// - `Err(Error::RemoteError)` - Remote API failed
pub async fn revalidate_viewer_service(
    client: &GuildApiClient,
    auth_token: &str,
) -> Result<Option<ViewerDto>, Error> {
    let viewer = client.get_viewer(auth_token).await?;

    if viewer.is_none() {
        tracing::debug!("Remote auth token no longer valid");
    }

    Ok(viewer)
}
