//! Common test utilities for catalog integration tests
//!
//! Provides tracing setup and a builder for small populated catalogs.

pub mod fixtures;

pub use fixtures::{CatalogBuilder, Seeded};

/// Install a fmt subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
