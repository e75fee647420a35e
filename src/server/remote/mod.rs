//! HTTP client for the remote guild API.
//!
//! The remote API owns every player, drifter, gear, and equipped gear record. The dashboard
//! never stores them; it reads through [`GuildApiClient`] on every request and forwards
//! mutations to it. Reads are retried on transient failures, mutations are sent exactly once.

pub mod client;
pub mod model;

pub use client::{GuildApiClient, GuildApiClientBuilder};
