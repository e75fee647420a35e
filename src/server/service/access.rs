//! Decides who may view and edit a player's loadout.
//!
//! A request carries either a signed-in viewer from the session, a profile link token, or
//! nothing. Session viewers are resolved locally; tokens are checked with the remote guild API.
//! Anything that does not positively grant access is refused.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::auth::{AccessDto, ViewerDto},
    server::{
        error::{auth::AuthError, loadout::LoadoutError, Error},
        remote::GuildApiClient,
    },
};

/// How the caller identifies itself for a single request.
#[derive(Clone, Debug, PartialEq)]
pub enum Credentials {
    /// Viewer signed in through the dashboard session
    Session(ViewerDto),
    /// Profile link token for a single player
    Token(String),
    None,
}

impl Credentials {
    /// Picks the credentials of a request; an explicit token wins over the session viewer.
    pub fn resolve(token: Option<String>, viewer: Option<ViewerDto>) -> Self {
        match (token, viewer) {
            (Some(token), _) => Self::Token(token),
            (None, Some(viewer)) => Self::Session(viewer),
            (None, None) => Self::None,
        }
    }

    /// Token to forward to remote calls that accept one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }
}

/// Granted access to one player.
#[derive(Clone, Debug, PartialEq)]
pub struct Access {
    pub player_id: i64,
    pub can_edit: bool,
    /// Signed-in viewer; `None` when access came from a profile link
    pub viewer: Option<ViewerDto>,
}

impl Access {
    pub fn to_dto(&self) -> AccessDto {
        AccessDto {
            player_id: self.player_id,
            granted: true,
            can_edit: self.can_edit,
            viewer: self.viewer.clone(),
        }
    }
}

pub struct AccessGate<'a> {
    client: &'a GuildApiClient,
}

impl<'a> AccessGate<'a> {
    pub fn new(client: &'a GuildApiClient) -> Self {
        Self { client }
    }

    /// Grants or refuses access to `player_id`.
    ///
    /// # Returns
    /// - `Ok(Access)` - Access granted; `can_edit` is set for staff, owners, and valid links
    /// - `Err(Error::AuthError(AuthError::TokenExpired))` - Profile link is past its expiry
    /// - `Err(Error::AuthError(AuthError::AccessDenied))` - No credentials, an empty or
    ///   invalid token, or a token issued for another player
    /// - `Err(Error::LoadoutError(LoadoutError::PlayerNotFound))` - Remote API does not know the player
    /// - `Err(Error::RemoteError)` - Token could not be validated
    pub async fn authorize(
        &self,
        player_id: i64,
        credentials: &Credentials,
    ) -> Result<Access, Error> {
        match credentials {
            Credentials::Session(viewer) => {
                let can_edit = viewer.is_staff || viewer.owns(player_id);

                tracing::debug!(
                    player_id,
                    viewer_id = viewer.id,
                    can_edit,
                    "Granted session access"
                );

                Ok(Access {
                    player_id,
                    can_edit,
                    viewer: Some(viewer.clone()),
                })
            }
            Credentials::Token(token) => self.authorize_token(player_id, token).await,
            Credentials::None => {
                tracing::debug!(player_id, "Denied access without credentials");

                Err(AuthError::AccessDenied(player_id).into())
            }
        }
    }

    async fn authorize_token(&self, player_id: i64, token: &str) -> Result<Access, Error> {
        if token.trim().is_empty() {
            tracing::debug!(player_id, "Denied access for empty profile token");

            return Err(AuthError::AccessDenied(player_id).into());
        }

        let Some(validation) = self.client.validate_profile_token(player_id, token).await? else {
            return Err(LoadoutError::PlayerNotFound(player_id).into());
        };

        if validation.is_expired(Utc::now()) {
            tracing::debug!(player_id, "Denied access for expired profile token");

            return Err(AuthError::TokenExpired(player_id).into());
        }

        let issued_for_other = validation
            .player
            .as_ref()
            .is_some_and(|player| player.id != player_id);

        if !validation.success || issued_for_other {
            tracing::debug!(
                player_id,
                error = validation.error.as_deref().unwrap_or_default(),
                "Denied access for invalid profile token"
            );

            return Err(AuthError::AccessDenied(player_id).into());
        }

        tracing::debug!(player_id, "Granted profile link access");

        Ok(Access {
            player_id,
            can_edit: true,
            viewer: None,
        })
    }

    /// Fails with `EditNotPermitted` unless `access` allows edits.
    pub fn require_edit(access: &Access) -> Result<(), Error> {
        if !access.can_edit {
            return Err(AuthError::EditNotPermitted(access.player_id).into());
        }

        Ok(())
    }
}
