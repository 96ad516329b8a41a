//! Policy layer (admin authorization).
//!
//! Compiled once from config at startup, then shared via `AppState`.

pub mod admin_token;

pub use admin_token::{AdminTokenPolicy, ADMIN_TOKEN_HEADER};
