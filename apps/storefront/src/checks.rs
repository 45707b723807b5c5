//! # Startup Checks
//!
//! Drives the dashboard flags that the store cannot settle by itself.
//!
//! ```text
//! t = 0 ms ──────────── 1000 ms ──────────── 1500 ms
//!   │                      │                    │
//!   ├── GET /health        │                    │
//!   │   (logged only)      │                    │
//!   │                      ▼                    │
//!   │               styling = success           ▼
//!   │                                    routing = success
//!   │
//!   └── then GET /health every 5 s (spawn_health_monitor)
//! ```
//!
//! The three run concurrently; none holds a store lock while waiting.
//!
//! After startup, [`spawn_health_monitor`] keeps polling `/health` on a
//! fixed period and publishes whether the service is reachable.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, info, warn};

use storefront_auth::HealthStatus;
use storefront_core::flags::feature;
use storefront_core::{catalog, Product, ValidationStatus};

use crate::config::StartupConfig;
use crate::store::Store;

/// Runs the startup checks to completion.
///
/// Returns the auth service's health report, or `None` if the check failed.
/// A failed check is logged and leaves every flag as it was.
pub async fn run_startup_checks(store: &Store, config: &StartupConfig) -> Option<HealthStatus> {
    let styling = async {
        sleep(config.styling_delay()).await;
        store.update_validation_test(
            feature::STYLING,
            ValidationStatus::Success,
            "Responsive design working correctly",
        );
    };

    let routing = async {
        sleep(config.routing_delay()).await;
        store.update_validation_test(
            feature::ROUTING,
            ValidationStatus::Success,
            "Navigation working correctly",
        );
    };

    let health = async {
        match store.client().health().await {
            Ok(health) => {
                info!(
                    status = %health.status,
                    service = health.service.as_deref().unwrap_or("unknown"),
                    "Auth service health"
                );
                Some(health)
            }
            Err(e) => {
                warn!(error = %e, "Auth service health check failed");
                None
            }
        }
    };

    let ((), (), health) = tokio::join!(styling, routing, health);
    health
}

/// Background poll of the auth service's health endpoint.
///
/// The task is aborted when the monitor is dropped.
#[derive(Debug)]
pub struct HealthMonitor {
    connected: watch::Receiver<bool>,
    handle: JoinHandle<()>,
}

impl HealthMonitor {
    /// Whether the last poll found the service healthy.
    pub fn is_connected(&self) -> bool {
        *self.connected.borrow()
    }

    /// A receiver that wakes whenever connectivity flips.
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.connected.clone()
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Polls `/health` immediately and then every `period`.
///
/// Starts out disconnected. Only transitions are logged.
pub fn spawn_health_monitor(store: Arc<Store>, period: Duration) -> HealthMonitor {
    let (tx, connected) = watch::channel(false);

    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let healthy = match store.client().health().await {
                Ok(health) => health.is_healthy(),
                Err(e) => {
                    debug!(error = %e, "Health poll failed");
                    false
                }
            };

            tx.send_if_modified(|current| {
                if *current == healthy {
                    return false;
                }
                if healthy {
                    info!("Auth service connected");
                } else {
                    warn!("Auth service disconnected");
                }
                *current = healthy;
                true
            });
        }
    });

    HealthMonitor { connected, handle }
}

/// The landing page's featured products, after a simulated fetch delay.
pub async fn featured_products(delay: Duration) -> Vec<Product> {
    if !delay.is_zero() {
        sleep(delay).await;
    }
    catalog::featured()
}
