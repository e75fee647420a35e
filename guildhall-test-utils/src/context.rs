//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the mock
//! guild API server, the mocks registered on it, and an in-memory session for testing login
//! flows.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_API_KEY, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_loadout_endpoints(7, 1)
///     .build()
///     .await?;
///
/// // Point a guild API client at the mock server
/// let client = GuildApiClient::builder()
///     .base_url(&test.api_url())
///     .api_key(test.api_key())
///     .build()?;
///
/// // Register further endpoints after the build
/// test.guild().create_catalog_endpoint(data::mock_catalog(), 1);
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session store for test login flows
    pub session: Session,

    /// Mock HTTP server standing in for the remote guild API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
    /// Mocks kept alive without call count assertions
    pub(crate) unasserted: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty mock server and in-memory session.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
            unasserted: Vec::new(),
        })
    }

    /// Base URL of the mock guild API server.
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// API key every fixture endpoint expects.
    pub fn api_key(&self) -> &'static str {
        TEST_API_KEY
    }

    /// Keep a mock created outside the fixtures alive and assert it with the rest.
    pub fn track(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
