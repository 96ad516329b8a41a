//! counterd gateway library entry.
//!
//! Wires config, the counter store, admin policy, and metrics into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
