//! Test configuration constants for the remote guild API client.
//!
//! These values are placeholders, not real credentials.

/// User agent sent by the test guild API client.
pub static TEST_USER_AGENT: &str = "guildhall-tests/1.0 (contact@example.com)";

/// Key the test guild API client sends in the `x-api-key` header.
///
/// Every mock endpoint created by the fixtures requires this header, so a client configured
/// without it fails to match any mock.
pub static TEST_API_KEY: &str = "test-guild-api-key";

/// Header carrying [`TEST_API_KEY`].
pub static API_KEY_HEADER: &str = "x-api-key";
