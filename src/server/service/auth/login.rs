use dioxus_logger::tracing;

use crate::{
    model::auth::LoginDto,
    server::{
        error::{auth::AuthError, Error},
        remote::{model::LoginResultDto, GuildApiClient},
    },
};

/// Exchanges login credentials for a remote auth token and viewer.
///
/// # Returns
/// - `Ok(LoginResultDto)` - Credentials accepted
/// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Blank or refused credentials
/// - `Err(Error::RemoteError)` - Remote API failed
pub async fn login_service(
    client: &GuildApiClient,
    credentials: &LoginDto,
) -> Result<LoginResultDto, Error> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(AuthError::InvalidCredentials.into());
    }

    let Some(login) = client.login(credentials).await? else {
        tracing::debug!("Login refused for {}", credentials.username);

        return Err(AuthError::InvalidCredentials.into());
    };

    tracing::debug!(viewer_id = login.viewer.id, "Login accepted");

    Ok(login)
}
