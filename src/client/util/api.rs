//! Calls from the web client to the dashboard API.
//!
//! Every call resolves to the decoded body or an [`ApiError`] carrying the error category, so
//! pages can show a message specific to what went wrong.

use serde::{de::DeserializeOwned, Serialize};

use guildhall::model::{
    api::{ApiError, EquipRequestDto, ErrorDto, UnequipRequestDto},
    auth::{LoginDto, ViewerDto},
    loadout::LoadoutDto,
};

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
}

/// Retrieve a player's loadout
pub async fn get_loadout(player_id: i64, token: &str) -> Result<LoadoutDto, ApiError> {
    let url = player_url(player_id, "loadout", token);
    decode(send(Method::Get, &url, None).await?)
}

/// Equip gear into a drifter slot and return the refetched loadout
pub async fn equip_gear(
    player_id: i64,
    token: &str,
    request: &EquipRequestDto,
) -> Result<LoadoutDto, ApiError> {
    let url = player_url(player_id, "loadout/equip", token);
    decode(send(Method::Post, &url, Some(encode(request)?)).await?)
}

/// Unequip gear and return the refetched loadout
pub async fn unequip_gear(
    player_id: i64,
    token: &str,
    request: &UnequipRequestDto,
) -> Result<LoadoutDto, ApiError> {
    let url = player_url(player_id, "loadout/unequip", token);
    decode(send(Method::Post, &url, Some(encode(request)?)).await?)
}

/// Retrieve the signed-in viewer, `None` when nobody is signed in
pub async fn get_viewer() -> Result<Option<ViewerDto>, ApiError> {
    match decode(send(Method::Get, "/api/auth/user", None).await?) {
        Ok(viewer) => Ok(Some(viewer)),
        Err(err) if err.status == 404 => Ok(None),
        Err(err) => Err(err),
    }
}

/// Sign in with the guild API
pub async fn login(credentials: &LoginDto) -> Result<ViewerDto, ApiError> {
    decode(send(Method::Post, "/api/auth/login", Some(encode(credentials)?)).await?)
}

fn player_url(player_id: i64, resource: &str, token: &str) -> String {
    if token.is_empty() {
        format!("/api/players/{}/{}", player_id, resource)
    } else {
        format!(
            "/api/players/{}/{}?token={}",
            player_id,
            resource,
            encode_query_value(token)
        )
    }
}

/// Percent-encodes everything outside the URL unreserved set.
fn encode_query_value(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

fn encode<T: Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|e| ApiError::network(format!("Failed to encode request: {}", e)))
}

fn decode<T: DeserializeOwned>((status, body): (u16, String)) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(&body)
            .map_err(|e| ApiError::network(format!("Failed to parse response: {}", e)));
    }

    Err(ApiError::from_response(
        status,
        serde_json::from_str::<ErrorDto>(&body).ok(),
    ))
}

#[cfg(feature = "web")]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(body),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    let text = response.text().await.unwrap_or_default();

    Ok((response.status(), text))
}

#[cfg(not(feature = "web"))]
async fn send(_: Method, _: &str, _: Option<String>) -> Result<(u16, String), ApiError> {
    Err(ApiError::network(
        "The dashboard API is only called from the browser",
    ))
}
