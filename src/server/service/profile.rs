//! Player profile edits.

use dioxus_logger::tracing;

use crate::{
    model::{api::ProfileUpdateDto, player::PlayerDto},
    server::{
        error::{loadout::LoadoutError, Error},
        remote::GuildApiClient,
        service::access::{AccessGate, Credentials},
    },
};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 100;

pub struct ProfileService<'a> {
    client: &'a GuildApiClient,
}

impl<'a> ProfileService<'a> {
    pub fn new(client: &'a GuildApiClient) -> Self {
        Self { client }
    }

    /// Applies a profile edit for a caller with edit access.
    ///
    /// The profile link token is forwarded to the remote API when the caller used one.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - Updated player record
    /// - `Err(Error::LoadoutError(LoadoutError::InvalidProfile))` - Update is empty or out of range
    /// - `Err(Error::AuthError)` - Caller may not edit the player
    /// - `Err(Error::RemoteError(RemoteError::Rejected))` - Remote API refused the edit
    pub async fn update_profile(
        &self,
        player_id: i64,
        update: ProfileUpdateDto,
        credentials: &Credentials,
    ) -> Result<PlayerDto, Error> {
        let update = validate(update)?;

        let access = AccessGate::new(self.client)
            .authorize(player_id, credentials)
            .await?;
        AccessGate::require_edit(&access)?;

        let result = self
            .client
            .update_player_profile(player_id, &update, credentials.token())
            .await?;

        tracing::info!(player_id, "Updated player profile");

        match result.player {
            Some(player) => Ok(player),
            None => self
                .client
                .get_player(player_id)
                .await?
                .ok_or_else(|| LoadoutError::PlayerNotFound(player_id).into()),
        }
    }
}

/// Normalizes a profile edit, trimming the name.
///
/// # Returns
/// - `Ok(ProfileUpdateDto)` - At least one field set, name not blank, level in range
/// - `Err(LoadoutError::InvalidProfile)` - Otherwise
pub fn validate(update: ProfileUpdateDto) -> Result<ProfileUpdateDto, LoadoutError> {
    let name = match update.name {
        Some(name) if name.trim().is_empty() => {
            return Err(LoadoutError::InvalidProfile(
                "Name must not be empty".to_string(),
            ))
        }
        name => name.map(|n| n.trim().to_string()),
    };

    if let Some(level) = update.level {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(LoadoutError::InvalidProfile(format!(
                "Level must be between {} and {}",
                MIN_LEVEL, MAX_LEVEL
            )));
        }
    }

    if name.is_none() && update.level.is_none() && update.role.is_none() {
        return Err(LoadoutError::InvalidProfile(
            "No profile fields to update".to_string(),
        ));
    }

    Ok(ProfileUpdateDto {
        name,
        level: update.level,
        role: update.role,
    })
}
