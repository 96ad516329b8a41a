//! Gateway config loader (strict parsing + environment overrides).
//!
//! Precedence: built-in defaults, then the YAML file named by
//! `COUNTERD_CONFIG` (if set), then `COUNTER_PATH`, `ADMIN_TOKEN` and
//! `COUNTERD_LISTEN`. The result is validated once and never re-read.
//! An empty `ADMIN_TOKEN=` unsets the admin token.

pub mod schema;

use std::fs;
use std::path::PathBuf;

use counterd_core::error::{CounterError, Result};

pub use schema::{AdminSection, CounterSection, GatewayConfig, GatewaySection};

pub const ENV_CONFIG_FILE: &str = "COUNTERD_CONFIG";
pub const ENV_COUNTER_PATH: &str = "COUNTER_PATH";
pub const ENV_ADMIN_TOKEN: &str = "ADMIN_TOKEN";
pub const ENV_LISTEN: &str = "COUNTERD_LISTEN";

/// Load config from the process environment (and the optional YAML file).
pub fn load() -> Result<GatewayConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Same as [`load`] but with an injectable environment lookup.
pub fn load_with<F>(lookup: F) -> Result<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = match lookup(ENV_CONFIG_FILE) {
        Some(path) => parse_str(&read_file(&path)?)?,
        None => GatewayConfig::default(),
    };
    let cfg = apply_env_with(cfg, lookup);
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Overlay environment values onto `cfg`.
///
/// Empty `COUNTER_PATH` / `COUNTERD_LISTEN` are ignored. An `ADMIN_TOKEN`
/// that is set but empty clears any token from the file, disabling reset.
pub fn apply_env_with<F>(mut cfg: GatewayConfig, lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = get(ENV_COUNTER_PATH) {
        cfg.counter.path = PathBuf::from(path);
    }
    if let Some(token) = lookup(ENV_ADMIN_TOKEN) {
        cfg.admin.token = Some(token).filter(|t| !t.is_empty());
    }
    if let Some(listen) = get(ENV_LISTEN) {
        cfg.gateway.listen = listen;
    }
    cfg
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CounterError::Internal(format!("read config failed: {e}")))
}

fn parse_str(s: &str) -> Result<GatewayConfig> {
    serde_yaml::from_str(s).map_err(|e| CounterError::BadRequest(format!("invalid yaml: {e}")))
}
