//! Guild API mock endpoint creation utilities.
//!
//! Every endpoint requires the test API key header and verifies it was called exactly
//! `expected_requests` times. An `expected_requests` of 0 asserts the route is never hit.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{API_KEY_HEADER, TEST_API_KEY},
    fixtures::guild::GuildFixtures,
};

impl<'a> GuildFixtures<'a> {
    fn json_endpoint(
        &mut self,
        method: &str,
        path: impl Into<Matcher>,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `GET /players/{player_id}`.
    pub fn create_player_endpoint(
        &mut self,
        player_id: i64,
        player: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}", player_id);
        self.json_endpoint("GET", url.as_str(), 200, &player, expected_requests)
    }

    /// Create a mock endpoint at `GET /players/{player_id}` answering with `status`.
    pub fn create_player_status_endpoint(
        &mut self,
        player_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}", player_id);
        let body = serde_json::json!({ "error": "status" });
        self.json_endpoint("GET", url.as_str(), status, &body, expected_requests)
    }

    /// Create a mock endpoint at `GET /players/{player_id}/drifters`.
    pub fn create_drifters_endpoint(
        &mut self,
        player_id: i64,
        drifters: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/drifters", player_id);
        self.json_endpoint("GET", url.as_str(), 200, &drifters, expected_requests)
    }

    /// Create a mock endpoint at `GET /gear`.
    pub fn create_catalog_endpoint(&mut self, catalog: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/gear", 200, &catalog, expected_requests)
    }

    /// Create a mock endpoint at `GET /gear` answering with `status`.
    pub fn create_catalog_status_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({ "error": "status" });
        self.json_endpoint("GET", "/gear", status, &body, expected_requests)
    }

    /// Create a mock endpoint at `GET /players/{player_id}/equipped-gear`.
    pub fn create_equipped_endpoint(
        &mut self,
        player_id: i64,
        equipped: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/equipped-gear", player_id);
        self.json_endpoint("GET", url.as_str(), 200, &equipped, expected_requests)
    }

    /// Create a mock endpoint at `POST /players/{player_id}/equipped-gear`.
    ///
    /// Only requests whose JSON body contains `body` match.
    pub fn create_equip_endpoint(
        &mut self,
        player_id: i64,
        body: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/equipped-gear", player_id);

        self.setup
            .server
            .mock("POST", url.as_str())
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .match_body(Matcher::PartialJson(body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `POST /players/{player_id}/equipped-gear/{gear_id}/unequip`.
    pub fn create_unequip_endpoint(
        &mut self,
        player_id: i64,
        gear_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/equipped-gear/{}/unequip", player_id, gear_id);
        let body = serde_json::json!({ "success": status < 400 });
        self.json_endpoint("POST", url.as_str(), status, &body, expected_requests)
    }

    /// Create a mock matching any mutation (`POST`) under `/players/{player_id}/equipped-gear`.
    ///
    /// Use with an `expected_requests` of 0 to assert no mutation is sent.
    pub fn create_any_mutation_endpoint(
        &mut self,
        player_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let pattern = format!(r"^/players/{}/equipped-gear(/.*)?$", player_id);
        let body = serde_json::json!({ "success": true });
        self.json_endpoint(
            "POST",
            Matcher::Regex(pattern),
            200,
            &body,
            expected_requests,
        )
    }

    /// Create a mock endpoint at `GET /players/{player_id}/profile-token?token={token}`.
    pub fn create_token_endpoint(
        &mut self,
        player_id: i64,
        token: &str,
        status: usize,
        validation: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/profile-token", player_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .match_query(Matcher::UrlEncoded("token".into(), token.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(validation.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `POST /players/{player_id}/profile`.
    pub fn create_profile_endpoint(
        &mut self,
        player_id: i64,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/{}/profile", player_id);
        self.json_endpoint("POST", url.as_str(), status, &response, expected_requests)
    }

    /// Create a mock endpoint at `POST /auth/login`.
    pub fn create_login_endpoint(
        &mut self,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("POST", "/auth/login", status, &response, expected_requests)
    }

    /// Create a mock endpoint at `GET /auth/user` for the bearer token `auth_token`.
    pub fn create_viewer_endpoint(
        &mut self,
        auth_token: &str,
        status: usize,
        viewer: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/auth/user")
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .match_header("authorization", format!("Bearer {}", auth_token).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(viewer.to_string())
            .expect(expected_requests)
            .create()
    }
}
