//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, session handling, and error
//! categories for all API endpoints.

mod auth;
mod gear;
mod loadout;
mod profile;
