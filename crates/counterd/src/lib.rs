//! counterd: a file-backed counter served over HTTP.
//!
//! Depend on this crate alone to get the store (`core::CounterStore`) and
//! the axum gateway (`gateway::router::build_router`) without pulling in the
//! member crates by name.

pub mod core {
    pub use counterd_core::*;
}

pub mod gateway {
    pub use counterd_gateway::*;
}
