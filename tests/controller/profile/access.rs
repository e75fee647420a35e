use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use guildhall::{
    model::{
        api::{ApiErrorKind, ErrorDto},
        auth::{AccessDto, ViewerDto},
    },
    server::{
        controller::{profile::get_access, util::credentials::TokenQuery},
        model::session::viewer::SessionViewer,
    },
};
use guildhall_test_utils::{
    fixtures::guild::data::{
        mock_token_invalid, mock_token_stale, mock_token_valid, mock_viewer, OTHER_PLAYER_ID,
        PLAYER_ID,
    },
    prelude::*,
};

use crate::util::{json_body, TestContextExt};

fn token(token: &str) -> Query<TokenQuery> {
    Query(TokenQuery {
        token: Some(token.to_string()),
    })
}

#[tokio::test]
/// Expect a valid profile link to grant edit access without a viewer
async fn grants_edit_access_for_valid_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "link", 200, mock_token_valid(PLAYER_ID), 1)
        .build()
        .await?;

    let result = get_access(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token("link"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let access: AccessDto = json_body(resp).await;
    assert!(access.granted);
    assert!(access.can_edit);
    assert_eq!(access.viewer, None);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a signed-in member who does not own the player to get read-only access
async fn grants_read_only_access_to_member() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let member: ViewerDto =
        serde_json::from_value(mock_viewer(4, false, Some(OTHER_PLAYER_ID))).unwrap();
    SessionViewer::insert(&test.session, member, "remote-token".to_string())
        .await
        .unwrap();

    let result = get_access(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let access: AccessDto = json_body(result.unwrap().into_response()).await;
    assert!(access.granted);
    assert!(!access.can_edit);

    Ok(())
}

#[tokio::test]
/// Expect a link past its expiry to report the token expired category
async fn reports_stale_link_as_expired() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "stale", 200, mock_token_stale(PLAYER_ID), 1)
        .build()
        .await?;

    let result = get_access(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token("stale"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::TokenExpired));

    Ok(())
}

#[tokio::test]
/// Expect an unrecognised link to be denied rather than reported as expired
async fn denies_invalid_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "bogus", 401, mock_token_invalid(), 1)
        .build()
        .await?;

    let result = get_access(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token("bogus"),
    )
    .await;

    assert!(result.is_err());
    let body: ErrorDto = json_body(result.err().unwrap().into_response()).await;
    assert_eq!(body.kind, Some(ApiErrorKind::AccessDenied));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an empty link to be denied without contacting the guild API
async fn denies_empty_link_locally() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(PLAYER_ID, "", 200, mock_token_valid(PLAYER_ID), 0)
        .build()
        .await?;

    let result = get_access(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        token(""),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
