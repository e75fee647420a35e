//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock guild API before a test
//! runs. Methods can be chained; all endpoints are queued and created during the final
//! `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::guild::data::{mock_catalog, mock_drifters, mock_player},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Every `with_*_endpoint` method takes the number of requests the endpoint must receive. A
/// count of 0 makes the endpoint a spy asserting the route is never contacted.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    player_endpoints: Vec<(i64, Value, usize)>,
    drifters_endpoints: Vec<(i64, Value, usize)>,
    catalog_endpoints: Vec<(Value, usize)>,
    equipped_endpoints: Vec<(i64, Value, usize)>,
    equip_endpoints: Vec<(i64, Value, usize, Value, usize)>, // (player_id, body, status, response, expected)
    unequip_endpoints: Vec<(i64, i64, usize, usize)>,        // (player_id, gear_id, status, expected)
    token_endpoints: Vec<(i64, String, usize, Value, usize)>, // (player_id, token, status, body, expected)
    login_endpoints: Vec<(usize, Value, usize)>,
    viewer_endpoints: Vec<(String, usize, Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            player_endpoints: Vec::new(),
            drifters_endpoints: Vec::new(),
            catalog_endpoints: Vec::new(),
            equipped_endpoints: Vec::new(),
            equip_endpoints: Vec::new(),
            unequip_endpoints: Vec::new(),
            token_endpoints: Vec::new(),
            login_endpoints: Vec::new(),
            viewer_endpoints: Vec::new(),
        }
    }

    /// Add the four read endpoints making up a loadout using the default fixtures.
    ///
    /// Serves the default player, drifters, and catalog, and `equipped` as equipped gear.
    ///
    /// # Arguments
    /// - `player_id` - Player the endpoints belong to
    /// - `equipped` - Equipped gear records to serve
    /// - `expected_requests` - Number of times each endpoint should be called
    pub fn with_loadout_endpoints(
        self,
        player_id: i64,
        equipped: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_player_endpoint(player_id, mock_player(player_id), expected_requests)
            .with_drifters_endpoint(player_id, mock_drifters(), expected_requests)
            .with_catalog_endpoint(mock_catalog(), expected_requests)
            .with_equipped_endpoint(player_id, equipped, expected_requests)
    }

    /// Add mock endpoint at `GET /players/{player_id}`.
    pub fn with_player_endpoint(
        mut self,
        player_id: i64,
        player: Value,
        expected_requests: usize,
    ) -> Self {
        self.player_endpoints
            .push((player_id, player, expected_requests));
        self
    }

    /// Add mock endpoint at `GET /players/{player_id}/drifters`.
    pub fn with_drifters_endpoint(
        mut self,
        player_id: i64,
        drifters: Value,
        expected_requests: usize,
    ) -> Self {
        self.drifters_endpoints
            .push((player_id, drifters, expected_requests));
        self
    }

    /// Add mock endpoint at `GET /gear`.
    pub fn with_catalog_endpoint(mut self, catalog: Value, expected_requests: usize) -> Self {
        self.catalog_endpoints.push((catalog, expected_requests));
        self
    }

    /// Add mock endpoint at `GET /players/{player_id}/equipped-gear`.
    ///
    /// Endpoints for the same player are matched in the order they were added, so queue one per
    /// expected fetch to serve a before and after state.
    pub fn with_equipped_endpoint(
        mut self,
        player_id: i64,
        equipped: Value,
        expected_requests: usize,
    ) -> Self {
        self.equipped_endpoints
            .push((player_id, equipped, expected_requests));
        self
    }

    /// Add mock endpoint at `POST /players/{player_id}/equipped-gear` matching `body`.
    pub fn with_equip_endpoint(
        mut self,
        player_id: i64,
        body: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.equip_endpoints
            .push((player_id, body, status, response, expected_requests));
        self
    }

    /// Add mock endpoint at `POST /players/{player_id}/equipped-gear/{gear_id}/unequip`.
    pub fn with_unequip_endpoint(
        mut self,
        player_id: i64,
        gear_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.unequip_endpoints
            .push((player_id, gear_id, status, expected_requests));
        self
    }

    /// Add mock endpoint at `GET /players/{player_id}/profile-token?token={token}`.
    pub fn with_token_endpoint(
        mut self,
        player_id: i64,
        token: impl Into<String>,
        status: usize,
        validation: Value,
        expected_requests: usize,
    ) -> Self {
        self.token_endpoints.push((
            player_id,
            token.into(),
            status,
            validation,
            expected_requests,
        ));
        self
    }

    /// Add mock endpoint at `POST /auth/login`.
    pub fn with_login_endpoint(
        mut self,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.login_endpoints
            .push((status, response, expected_requests));
        self
    }

    /// Add mock endpoint at `GET /auth/user` for the bearer token `auth_token`.
    pub fn with_viewer_endpoint(
        mut self,
        auth_token: impl Into<String>,
        status: usize,
        viewer: Value,
        expected_requests: usize,
    ) -> Self {
        self.viewer_endpoints
            .push((auth_token.into(), status, viewer, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for endpoints not covered by helper methods, such as error statuses.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating every queued mock endpoint.
    ///
    /// Custom endpoints are created first so a test can queue an error response ahead of the
    /// regular fixture for the same route.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (player_id, player, expected) in self.player_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_player_endpoint(player_id, player, expected),
            );
        }

        for (player_id, drifters, expected) in self.drifters_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_drifters_endpoint(player_id, drifters, expected),
            );
        }

        for (catalog, expected) in self.catalog_endpoints {
            mocks.push(setup.guild().create_catalog_endpoint(catalog, expected));
        }

        for (player_id, equipped, expected) in self.equipped_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_equipped_endpoint(player_id, equipped, expected),
            );
        }

        for (player_id, body, status, response, expected) in self.equip_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_equip_endpoint(player_id, body, status, response, expected),
            );
        }

        for (player_id, gear_id, status, expected) in self.unequip_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_unequip_endpoint(player_id, gear_id, status, expected),
            );
        }

        for (player_id, token, status, validation, expected) in self.token_endpoints {
            mocks.push(setup.guild().create_token_endpoint(
                player_id, &token, status, validation, expected,
            ));
        }

        for (status, response, expected) in self.login_endpoints {
            mocks.push(setup.guild().create_login_endpoint(status, response, expected));
        }

        for (auth_token, status, viewer, expected) in self.viewer_endpoints {
            mocks.push(
                setup
                    .guild()
                    .create_viewer_endpoint(&auth_token, status, viewer, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
