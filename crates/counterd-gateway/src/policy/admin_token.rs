use counterd_core::error::{CounterError, Result};

use crate::config::AdminSection;

/// Header carrying the admin shared secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Shared-secret check for destructive admin endpoints.
///
/// Fails closed: with no server-side token configured every request is
/// unauthorized. An empty configured token counts as "not configured".
#[derive(Debug, Clone)]
pub struct AdminTokenPolicy {
    token: Option<String>,
}

impl AdminTokenPolicy {
    pub fn new(cfg: &AdminSection) -> Self {
        Self {
            token: cfg.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Plain equality against the configured token.
    pub fn authorize(&self, presented: Option<&str>) -> Result<()> {
        match (self.token.as_deref(), presented) {
            (Some(expected), Some(got)) if expected == got => Ok(()),
            _ => Err(CounterError::Unauthorized),
        }
    }
}
