//! Integration test utilities for the Sentree account service
//!
//! Spawns the real HTTP server against a PostgreSQL database and talks to
//! it over the network.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
