//! Server application core modules.
//!
//! This module contains all server-side functionality for the Guildhall application: HTTP
//! routing, staff sessions and profile link access, the remote guild API client, and the
//! loadout services that apply equip and unequip requests against it.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod remote;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
