//! HTTP controller endpoints for the Guildhall web API.
//!
//! This module contains Axum handlers for staff sessions, player loadouts, profile access, and
//! gear browsing. Controllers resolve the caller's credentials from the session or a profile
//! link token, hand them to the services, and return JSON responses. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod gear;
pub mod loadout;
pub mod profile;
pub mod util;
