use axum::{http::StatusCode, response::IntoResponse};
use guildhall::{
    model::auth::ViewerDto,
    server::{controller::auth::logout, model::session::viewer::SessionViewer},
};
use guildhall_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect after logout with a viewer in session
async fn returns_redirect_on_logout_with_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let viewer = ViewerDto {
        id: 3,
        username: "viewer3".to_string(),
        is_staff: true,
        player_id: None,
    };
    SessionViewer::insert(&test.session, viewer, "remote-token".to_string())
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure viewer was cleared from session
    let stored = SessionViewer::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// Clearing a session without any data in it fails, so the endpoint only clears the session
/// when a viewer is present and redirects regardless.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
