use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use guildhall::{
    model::{
        api::{ApiErrorKind, ErrorDto},
        auth::{LoginDto, ViewerDto},
    },
    server::{controller::auth::login, model::session::viewer::SessionViewer},
};
use guildhall_test_utils::{
    fixtures::guild::data::{mock_error, mock_login, mock_viewer, PLAYER_ID},
    prelude::*,
};

use crate::util::{json_body, TestContextExt};

fn credentials(username: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 success with the viewer stored in session after a successful login
async fn stores_viewer_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(
            200,
            mock_login("remote-token", mock_viewer(3, false, Some(PLAYER_ID))),
            1,
        )
        .build()
        .await?;

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        credentials("viewer3", "hunter2"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let viewer: ViewerDto = json_body(resp).await;
    assert_eq!(viewer.player_id, Some(PLAYER_ID));

    let stored = SessionViewer::get(&test.session).await.unwrap().unwrap();
    assert_eq!(stored.viewer, viewer);
    assert_eq!(stored.token, "remote-token");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 invalid credentials when the guild API refuses the login
async fn fails_for_refused_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(401, mock_error("Bad credentials"), 1)
        .build()
        .await?;

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        credentials("viewer3", "wrong"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::InvalidCredentials));
    assert!(SessionViewer::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 for blank credentials without contacting the guild API
async fn rejects_blank_credentials_locally() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(200, mock_login("unused", mock_viewer(3, true, None)), 0)
        .build()
        .await?;

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        credentials("  ", ""),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
