use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use guildhall::{
    model::{
        api::{ApiErrorKind, ErrorDto},
        loadout::LoadoutDto,
        slot::SlotKey,
    },
    server::controller::{loadout::get_loadout, util::credentials::TokenQuery},
};
use guildhall_test_utils::{
    fixtures::guild::data::{
        mock_equipped, mock_token_expired, mock_token_valid, G101, PLAYER_ID,
    },
    prelude::*,
};
use serde_json::json;

use super::sign_in_owner;
use crate::util::{json_body, TestContextExt};

fn token(token: &str) -> Query<TokenQuery> {
    Query(TokenQuery {
        token: Some(token.to_string()),
    })
}

#[tokio::test]
/// Expect 200 success with an editable loadout for the signed-in owner
async fn returns_loadout_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([mock_equipped(1, "weapon", G101)]), 1)
        .build()
        .await?;
    sign_in_owner(&test).await;

    let result = get_loadout(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let loadout: LoadoutDto = json_body(resp).await;
    assert!(loadout.can_edit);
    assert_eq!(loadout.drifters.len(), 3);
    let weapon = loadout.drifters[0]
        .slots
        .iter()
        .find(|s| s.key == SlotKey::Weapon)
        .and_then(|s| s.gear.as_ref())
        .map(|g| g.id);
    assert_eq!(weapon, Some(G101));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a valid profile link without a session
async fn returns_loadout_for_profile_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "link", 200, mock_token_valid(PLAYER_ID), 1)
        .with_loadout_endpoints(PLAYER_ID, json!([]), 1)
        .build()
        .await?;

    let result = get_loadout(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token("link"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 with the token expired category for an expired profile link
async fn fails_for_expired_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "old-link", 401, mock_token_expired(), 1)
        .with_loadout_endpoints(PLAYER_ID, json!([]), 0)
        .build()
        .await?;

    let result = get_loadout(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token("old-link"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::TokenExpired));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 access denied without a session or profile link
async fn fails_without_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([]), 0)
        .build()
        .await?;

    let result = get_loadout(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::AccessDenied));
    test.assert_mocks();

    Ok(())
}
