//! # Storefront Library
//!
//! Client-side state store for the demo storefront: auth session, shopping
//! cart, dashboard validation flags, and UI language.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (tracing setup & demo run)
//! ├── store/
//! │   ├── mod.rs      ◄─── Store, StoreSnapshot
//! │   ├── auth.rs     ◄─── login / logout
//! │   ├── cart.rs     ◄─── add_to_cart, remove_from_cart, ...
//! │   └── flags.rs    ◄─── validation flags, change_language
//! ├── state/
//! │   ├── mod.rs      ◄─── Slice<T> lock wrapper
//! │   └── events.rs   ◄─── StoreEvent broadcast bus
//! ├── checks.rs       ◄─── Startup checks, health monitor, featured products
//! ├── config.rs       ◄─── StoreConfig (file + env)
//! └── error.rs        ◄─── ApiError for the presentation layer
//! ```
//!
//! ## Sharing the Store
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Arc<Store> ──┬──► UI task:      add_to_cart, change_language         │
//! │                ├──► login task:   login(..).await                       │
//! │                └──► observer:     subscribe() → StoreEvent stream       │
//! │                                                                         │
//! │   There is no global instance; whoever builds the Store shares it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub use checks::{featured_products, run_startup_checks, spawn_health_monitor, HealthMonitor};
pub use config::{ConfigError, ConfigResult, StartupConfig, StoreConfig};
pub use error::{ApiError, ErrorCode};
pub use state::{EventBus, StoreEvent};
pub use store::{Store, StoreSnapshot};

/// Credentials the demo logs in with when none are given on the command line.
pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "securepassword123";

/// Runs the demo: loads config, settles the startup checks, fills the cart
/// with the featured products, and attempts one login.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (RUST_LOG, default info,storefront=debug)       │
/// │  2. Load StoreConfig (file → env → defaults)                           │
/// │  3. Build Store, attach an observer that logs every event              │
/// │     and start the /health monitor                                      │
/// │  4. Concurrently:                                                      │
/// │       • startup checks (styling, routing, /health)                     │
/// │       • featured products → add_to_cart                                │
/// │       • login(email, password)                                         │
/// │  5. change_language(config.language)                                   │
/// │  6. Print the final snapshot as JSON                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting storefront");

    let config = StoreConfig::load(None)?;
    let store = Arc::new(Store::new(&config)?);

    let mut events = store.subscribe();
    let observer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!(?event, "observed"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "observer lagging"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let health = spawn_health_monitor(Arc::clone(&store), config.startup.health_interval());

    let mut args = std::env::args().skip(1);
    let email = args.next().unwrap_or_else(|| DEMO_EMAIL.to_string());
    let password = args.next().unwrap_or_else(|| DEMO_PASSWORD.to_string());

    let shopping = async {
        for product in featured_products(config.startup.featured_delay()).await {
            store.add_to_cart(&product);
        }
    };

    let (_, (), login) = tokio::join!(
        run_startup_checks(&store, &config.startup),
        shopping,
        store.login(&email, &password),
    );

    match login {
        Ok(session) => info!(email = %session.user.email, "Demo login succeeded"),
        Err(e) => warn!(error = %ApiError::from(e), "Demo login failed"),
    }

    store.change_language(&config.language);
    info!(connected = health.is_connected(), "Auth service status");

    let snapshot = store.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    drop(health);
    observer.abort();
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Include every store event
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_lib=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
