//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the credentials a
//! request carries and retrieving the signed-in viewer for session endpoints.

pub mod credentials;
pub mod get_viewer;
