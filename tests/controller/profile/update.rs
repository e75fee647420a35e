use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use guildhall::{
    model::{
        api::{ApiErrorKind, ErrorDto, ProfileUpdateDto},
        player::PlayerDto,
    },
    server::controller::{profile::update_profile, util::credentials::TokenQuery},
};
use guildhall_test_utils::{
    fixtures::guild::data::{mock_error, mock_player, mock_token_valid, PLAYER_ID},
    prelude::*,
};
use serde_json::json;

use crate::util::{json_body, TestContextExt};

fn link() -> Query<TokenQuery> {
    Query(TokenQuery {
        token: Some("link".to_string()),
    })
}

#[tokio::test]
/// Expect 200 success with the updated player for a valid profile link
async fn updates_profile_with_link() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "link", 200, mock_token_valid(PLAYER_ID), 1)
        .build()
        .await?;
    let mut updated = mock_player(PLAYER_ID);
    updated["level"] = json!(42);
    let endpoint = test.guild().create_profile_endpoint(
        PLAYER_ID,
        200,
        json!({ "success": true, "player": updated }),
        1,
    );
    test.track(endpoint);

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        link(),
        Json(ProfileUpdateDto {
            level: Some(42),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let player: PlayerDto = json_body(resp).await;
    assert_eq!(player.level, 42);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 for an out of range level before access is checked
async fn rejects_invalid_level() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "link", 200, mock_token_valid(PLAYER_ID), 0)
        .build()
        .await?;

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        link(),
        Json(ProfileUpdateDto {
            level: Some(0),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::InvalidRequest));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 422 with the guild's message when it refuses the update
async fn surfaces_remote_rejection() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "link", 200, mock_token_valid(PLAYER_ID), 1)
        .build()
        .await?;
    let endpoint = test.guild().create_profile_endpoint(
        PLAYER_ID,
        200,
        mock_error("Name already taken"),
        1,
    );
    test.track(endpoint);

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        link(),
        Json(ProfileUpdateDto {
            name: Some("Kestrel".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::Rejected));
    assert_eq!(body.error, "Name already taken");
    test.assert_mocks();

    Ok(())
}
