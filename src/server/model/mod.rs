//! Server application models and type definitions.
//!
//! Application state shared by every handler, the per-player operation guard, and session data
//! structures.

pub mod app;
pub mod catalog;
pub mod lock;
pub mod session;
