//! Helpers wiring the shared test context into application state for controller tests.

use std::time::Duration;

use axum::{body::to_bytes, response::Response};
use guildhall::server::{model::app::AppState, remote::GuildApiClient};
use guildhall_test_utils::{constant::TEST_USER_AGENT, TestContext};
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState pointed at the mock guild API
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        let client = GuildApiClient::builder()
            .base_url(&self.api_url())
            .api_key(self.api_key())
            .user_agent(TEST_USER_AGENT)
            .max_attempts(1)
            .retry_backoff(Duration::ZERO)
            .build()
            .expect("Failed to build guild API client");

        AppState::from(client)
    }
}

/// Decodes the JSON body of a handler response.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to decode response body")
}
