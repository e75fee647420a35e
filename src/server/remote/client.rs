use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    model::{
        api::ProfileUpdateDto,
        auth::{LoginDto, ViewerDto},
        gear::GearDto,
        loadout::EquippedGearDto,
        player::{DrifterDto, PlayerDto},
        slot::SlotRef,
    },
    server::{
        error::{loadout::LoadoutError, remote::RemoteError, Error},
        remote::model::{
            EquipGearBody, LoginResultDto, ProfileUpdateBody, ProfileUpdateResultDto,
            RemoteMessageDto, TokenValidationDto,
        },
        service::retry::RetryContext,
    },
};

/// Header carrying the dashboard's key on every remote request.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug)]
pub struct GuildApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    max_attempts: u32,
    retry_backoff: Duration,
}

/// Builder for [`GuildApiClient`].
pub struct GuildApiClientBuilder {
    base_url: Option<String>,
    api_key: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_attempts: u32,
    retry_backoff: Duration,
}

impl GuildApiClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attempts made for reads failing with a transient error.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    pub fn build(self) -> Result<GuildApiClient, Error> {
        let base_url = self.base_url.ok_or_else(|| {
            Error::InternalError("Guild API client built without a base URL".to_string())
        })?;

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(GuildApiClient {
            http: http.build().map_err(RemoteError::from)?,
            base_url,
            api_key: self.api_key,
            max_attempts: self.max_attempts,
            retry_backoff: self.retry_backoff,
        })
    }
}

impl GuildApiClient {
    pub fn builder() -> GuildApiClientBuilder {
        GuildApiClientBuilder {
            base_url: None,
            api_key: String::new(),
            user_agent: None,
            timeout: None,
            max_attempts: 3,
            retry_backoff: Duration::from_secs(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetches a player record.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerDto))` - Player exists
    /// - `Ok(None)` - Remote API reports the player as not found
    /// - `Err(Error::RemoteError)` - Request failed
    pub async fn get_player(&self, player_id: i64) -> Result<Option<PlayerDto>, Error> {
        let path = format!("/players/{}", player_id);
        let response = self.read(&path, || self.get(&path)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(decode(response).await?)),
            status => Err(unexpected(&path, status)),
        }
    }

    /// Fetches the drifter positions of a player, in no particular order.
    pub async fn get_player_drifters(&self, player_id: i64) -> Result<Vec<DrifterDto>, Error> {
        let path = format!("/players/{}/drifters", player_id);
        self.read_player_list(player_id, &path).await
    }

    /// Fetches the equipped gear records of a player.
    pub async fn get_equipped_gear(&self, player_id: i64) -> Result<Vec<EquippedGearDto>, Error> {
        let path = format!("/players/{}/equipped-gear", player_id);
        self.read_player_list(player_id, &path).await
    }

    /// Fetches the full gear catalog.
    pub async fn get_gear_catalog(&self) -> Result<Vec<GearDto>, Error> {
        let path = "/gear";
        let response = self.read(path, || self.get(path)).await?;

        match response.status() {
            status if status.is_success() => decode(response).await,
            status => Err(unexpected(path, status)),
        }
    }

    /// Asks the remote API to place `gear_id` into `target`.
    ///
    /// Sent once; the caller decides how to reconcile an unknown outcome.
    pub async fn equip_gear(
        &self,
        player_id: i64,
        gear_id: i64,
        target: SlotRef,
    ) -> Result<(), Error> {
        let path = format!("/players/{}/equipped-gear", player_id);
        let body = EquipGearBody {
            gear_id,
            drifter: target.drifter,
            slot: target.slot,
        };

        tracing::debug!("Equipping gear ID {} into {} for player ID {}", gear_id, target, player_id);

        let response = self
            .post(&path)
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::from)?;

        mutation_outcome(&path, response).await
    }

    /// Asks the remote API to remove `gear_id` from whatever slot holds it.
    pub async fn unequip_gear(&self, player_id: i64, gear_id: i64) -> Result<(), Error> {
        let path = format!("/players/{}/equipped-gear/{}/unequip", player_id, gear_id);

        tracing::debug!("Unequipping gear ID {} for player ID {}", gear_id, player_id);

        let response = self.post(&path).send().await.map_err(RemoteError::from)?;

        mutation_outcome(&path, response).await
    }

    /// Checks a profile link token.
    ///
    /// # Returns
    /// - `Ok(Some(TokenValidationDto))` - Remote API evaluated the token (valid or not)
    /// - `Ok(None)` - Player does not exist
    pub async fn validate_profile_token(
        &self,
        player_id: i64,
        token: &str,
    ) -> Result<Option<TokenValidationDto>, Error> {
        let path = format!("/players/{}/profile-token", player_id);
        let response = self
            .read(&path, || self.get(&path).query(&[("token", token)]))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            // Invalid and expired tokens come back as 401/403 with the same body.
            status
                if status.is_success()
                    || status == StatusCode::UNAUTHORIZED
                    || status == StatusCode::FORBIDDEN =>
            {
                Ok(Some(decode(response).await?))
            }
            status => Err(unexpected(&path, status)),
        }
    }

    /// Submits a profile edit; `token` is forwarded when access came from a profile link.
    pub async fn update_player_profile(
        &self,
        player_id: i64,
        update: &ProfileUpdateDto,
        token: Option<&str>,
    ) -> Result<ProfileUpdateResultDto, Error> {
        let path = format!("/players/{}/profile", player_id);
        let body = ProfileUpdateBody {
            fields: update,
            token,
        };

        let response = self
            .post(&path)
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::from)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LoadoutError::PlayerNotFound(player_id).into()),
            status if status.is_success() => {
                let result: ProfileUpdateResultDto = decode(response).await?;
                if !result.success {
                    return Err(RemoteError::Rejected {
                        status: status.as_u16(),
                        message: result
                            .error
                            .unwrap_or_else(|| "Profile update was refused".to_string()),
                    }
                    .into());
                }

                Ok(result)
            }
            status => Err(rejection(&path, status, response).await),
        }
    }

    /// Exchanges dashboard credentials for a remote token and viewer identity.
    ///
    /// # Returns
    /// - `Ok(Some(LoginResultDto))` - Credentials accepted
    /// - `Ok(None)` - Credentials refused
    pub async fn login(&self, credentials: &LoginDto) -> Result<Option<LoginResultDto>, Error> {
        let path = "/auth/login";
        let response = self
            .post(path)
            .json(credentials)
            .send()
            .await
            .map_err(RemoteError::from)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => Ok(Some(decode(response).await?)),
            status => Err(unexpected(path, status)),
        }
    }

    /// Resolves the viewer a remote auth token belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(ViewerDto))` - Token still valid
    /// - `Ok(None)` - Token was revoked or expired
    pub async fn get_viewer(&self, auth_token: &str) -> Result<Option<ViewerDto>, Error> {
        let path = "/auth/user";
        let response = self
            .read(path, || self.get(path).bearer_auth(auth_token))
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => Ok(Some(decode(response).await?)),
            status => Err(unexpected(path, status)),
        }
    }

    async fn read_player_list<R>(&self, player_id: i64, path: &str) -> Result<Vec<R>, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.read(path, || self.get(path)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LoadoutError::PlayerNotFound(player_id).into()),
            status if status.is_success() => decode(response).await,
            status => Err(unexpected(path, status)),
        }
    }

    /// Sends a read request, retrying transport failures, 5xx, and 429 responses.
    ///
    /// Any other response is handed back for the caller to interpret.
    async fn read<F>(&self, path: &str, build: F) -> Result<Response, Error>
    where
        F: Fn() -> RequestBuilder,
    {
        let ctx = RetryContext::new()
            .with_max_attempts(self.max_attempts)
            .with_initial_backoff(self.retry_backoff);

        ctx.execute_with_retry(&format!("GET {}", path), |_| {
            let request = build();
            let endpoint = path.to_string();

            Box::pin(async move {
                let response = request.send().await.map_err(RemoteError::from)?;
                let status = response.status();

                if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                    return Err(RemoteError::Status {
                        endpoint,
                        status: status.as_u16(),
                    }
                    .into());
                }

                Ok(response)
            })
        })
        .await
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key)
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, Error> {
    Ok(response.json::<R>().await.map_err(RemoteError::from)?)
}

fn unexpected(path: &str, status: StatusCode) -> Error {
    RemoteError::Status {
        endpoint: path.to_string(),
        status: status.as_u16(),
    }
    .into()
}

/// Turns a 4xx response into a rejection carrying the remote message, anything else into a
/// status error.
async fn rejection(path: &str, status: StatusCode, response: Response) -> Error {
    if !status.is_client_error() || status == StatusCode::TOO_MANY_REQUESTS {
        return unexpected(path, status);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<RemoteMessageDto>(&body)
        .ok()
        .and_then(|message| message.error)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request rejected")
                .to_string()
        });

    RemoteError::Rejected {
        status: status.as_u16(),
        message,
    }
    .into()
}

/// Interprets the response to an equip or unequip request.
///
/// A 2xx response may still carry `{"success": false}`, which counts as a rejection.
async fn mutation_outcome(path: &str, response: Response) -> Result<(), Error> {
    let status = response.status();
    if !status.is_success() {
        return Err(rejection(path, status, response).await);
    }

    let body = response.text().await.map_err(RemoteError::from)?;
    if body.trim().is_empty() {
        return Ok(());
    }

    match serde_json::from_str::<RemoteMessageDto>(&body) {
        Ok(RemoteMessageDto {
            success: Some(false),
            error,
        }) => Err(RemoteError::Rejected {
            status: status.as_u16(),
            message: error.unwrap_or_else(|| "Change was refused".to_string()),
        }
        .into()),
        _ => Ok(()),
    }
}
