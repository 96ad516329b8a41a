use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use counterd_core::error::{CounterError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub counter: CounterSection,

    #[serde(default)]
    pub admin: AdminSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            counter: CounterSection::default(),
            admin: AdminSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CounterError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.counter.validate()?;

        Ok(())
    }

    /// Parsed listen address. Only valid after `validate`.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.gateway.listen.parse().map_err(|e| {
            CounterError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(CounterError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr, got {:?}",
                self.listen
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterSection {
    #[serde(default = "default_counter_path")]
    pub path: PathBuf,
}

impl Default for CounterSection {
    fn default() -> Self {
        Self {
            path: default_counter_path(),
        }
    }
}

impl CounterSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(CounterError::BadRequest("counter.path must not be empty".into()));
        }
        if self.path.file_name().is_none() {
            return Err(CounterError::BadRequest(format!(
                "counter.path must name a file, got {}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

/// Admin credentials. `token: None` means the reset endpoint rejects everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminSection {
    #[serde(default)]
    pub token: Option<String>,
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_counter_path() -> PathBuf {
    PathBuf::from("/data/counter.txt")
}
