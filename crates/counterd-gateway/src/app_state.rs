//! Shared application state for the counterd gateway.
//!
//! Built once from a validated `GatewayConfig`. Handlers only ever see the
//! store and policy through this type; nothing reads the environment after
//! startup.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use counterd_core::error::Result;
use counterd_core::CounterStore;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::policy::AdminTokenPolicy;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    store: CounterStore,
    admin: AdminTokenPolicy,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let store = CounterStore::new(cfg.counter.path.clone());
        let admin = AdminTokenPolicy::new(&cfg.admin);
        if !admin.is_configured() {
            tracing::warn!("no admin token configured; /admin/reset will reject every request");
        }

        Self {
            inner: Arc::new(AppStateInner { store, admin }),
            metrics: Arc::new(GatewayMetrics::default()),
        }
    }

    pub fn store(&self) -> &CounterStore {
        &self.inner.store
    }

    pub fn admin(&self) -> &AdminTokenPolicy {
        &self.inner.admin
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    /// Run a store operation, recording its latency and any failure under `op`.
    pub async fn timed<T, F>(&self, op: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let started = Instant::now();
        let res = fut.await;
        self.metrics.store_duration.observe(&[("op", op)], started.elapsed());
        if let Err(e) = &res {
            self.metrics.store_errors.inc(&[("op", op)]);
            tracing::error!(op, error = %e, "counter store operation failed");
        }
        res
    }

    /// Extra gauge lines for `/metrics`. The value is omitted when unreadable;
    /// the failure still lands in `store_errors`.
    pub async fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        match self.timed("read", self.store().read()).await {
            Ok(v) => vec![("counterd_counter_value", v)],
            Err(_) => Vec::new(),
        }
    }
}
