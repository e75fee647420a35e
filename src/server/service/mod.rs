//! Service layer for business logic.
//!
//! Services coordinate the access gate and the remote guild API client. Reads go through the
//! retry logic in [`retry`]; mutations are sent once and reconciled by refetching.

pub mod access;
pub mod auth;
pub mod gear;
pub mod loadout;
pub mod profile;
pub mod retry;
