//! # Storefront Demo Entry Point
//!
//! ```text
//! storefront [email] [password]
//! ```
//!
//! Builds a store, runs the startup checks, and logs in against the
//! configured auth service. The final state is printed as JSON.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    storefront_lib::run().await
}
