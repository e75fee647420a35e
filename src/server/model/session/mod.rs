//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions (Redis-backed in production,
//! in memory in tests).

pub mod viewer;
