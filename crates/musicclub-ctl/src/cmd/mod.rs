//! CLI command modules.

pub mod auth;
pub mod client;
pub mod concerts;
pub mod participations;
pub mod songs;
pub mod users;
