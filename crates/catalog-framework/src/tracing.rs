//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary built on the framework.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); records carry a `record_type` field instead.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//!
//! ## Usage Examples
//!
//! ```bash
//! # Catalog construction summary and fixture loading
//! RUST_LOG=info cargo run -p catalog-browser
//!
//! # Per-step filter counts and store building
//! RUST_LOG=debug cargo run -p catalog-browser
//!
//! # Filter to one module
//! RUST_LOG=catalog_browser::filter=debug cargo run -p catalog-browser
//! ```
//!
//! Without `RUST_LOG` only warnings are shown, so dangling references and duplicate ids in
//! the loaded fixtures are always reported.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Call once at program start. Logs are written to stderr so they never mix with
/// rendered output on stdout.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
