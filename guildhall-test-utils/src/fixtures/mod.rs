//! Test fixture modules for HTTP mock creation.
//!
//! - `guild` - players, drifters, gear, equipped gear, profile tokens, and staff logins served
//!   by the remote guild API

pub mod guild;
