use axum::{extract::State, http::StatusCode, response::IntoResponse};
use guildhall::{
    model::auth::ViewerDto,
    server::{controller::auth::get_viewer, model::session::viewer::SessionViewer},
};
use guildhall_test_utils::{
    fixtures::guild::data::{mock_error, mock_viewer, PLAYER_ID},
    prelude::*,
};

use crate::util::{json_body, TestContextExt};

fn viewer(player_id: Option<i64>) -> ViewerDto {
    serde_json::from_value(mock_viewer(3, false, player_id)).unwrap()
}

#[tokio::test]
/// Expect 200 success with the re-validated viewer
async fn returns_revalidated_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_viewer_endpoint("remote-token", 200, mock_viewer(3, false, Some(PLAYER_ID)), 1)
        .build()
        .await?;
    SessionViewer::insert(&test.session, viewer(Some(PLAYER_ID)), "remote-token".to_string())
        .await
        .unwrap();

    let result = get_viewer(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ViewerDto = json_body(resp).await;
    assert_eq!(body, viewer(Some(PLAYER_ID)));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the session copy to be refreshed when the guild API reports changed details
async fn refreshes_changed_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_viewer_endpoint("remote-token", 200, mock_viewer(3, false, Some(PLAYER_ID)), 1)
        .build()
        .await?;
    SessionViewer::insert(&test.session, viewer(None), "remote-token".to_string())
        .await
        .unwrap();

    let result = get_viewer(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let stored = SessionViewer::get(&test.session).await.unwrap().unwrap();
    assert_eq!(stored.viewer.player_id, Some(PLAYER_ID));

    Ok(())
}

#[tokio::test]
/// Expect 404 not found and a cleared session when the credential is rejected
async fn clears_session_for_rejected_credential() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_viewer_endpoint("remote-token", 401, mock_error("Token revoked"), 1)
        .build()
        .await?;
    SessionViewer::insert(&test.session, viewer(None), "remote-token".to_string())
        .await
        .unwrap();

    let result = get_viewer(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionViewer::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without contacting the guild API when nobody is signed in
async fn returns_not_found_without_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_viewer_endpoint("remote-token", 200, mock_viewer(3, false, None), 0)
        .build()
        .await?;

    let result = get_viewer(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}
