//! Counter and admin HTTP handlers.
//!
//! - `GET /`             : increment, with a welcome message
//! - `GET /count`        : read only
//! - `POST /inc`         : increment
//! - `POST /admin/reset` : reset to 0 (requires `X-Admin-Token`)

pub mod admin;
pub mod counter;
