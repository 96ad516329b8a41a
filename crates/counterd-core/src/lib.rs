//! counterd core: the error surface and the file-backed counter store.
//!
//! This crate carries no HTTP dependencies so the store can be driven from
//! the gateway, from tests, or from a one-off maintenance tool.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `CounterError`/`Result` so a bad disk never takes the
//! process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

pub use error::{ClientCode, CounterError, Result};
pub use store::CounterStore;
