//! Data models shared between the web client and the server.
//!
//! Everything in this module compiles for both the `web` and `server` targets. It holds the
//! JSON shapes exchanged with the dashboard API as well as the pure loadout logic (slot
//! taxonomy, loadout state, catalog filtering) that does not depend on any runtime.

pub mod api;
pub mod auth;
pub mod filter;
pub mod gear;
pub mod loadout;
pub mod player;
pub mod slot;
pub mod view;
