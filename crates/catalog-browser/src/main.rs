//! # Catalog Browser
//!
//! Prints the product catalog, filtered the way the browser's filter panel would.
//!
//! ```bash
//! # Everything, with the filter panel
//! cargo run -p catalog-browser -- --panel
//!
//! # Anna's fruit
//! cargo run -p catalog-browser -- --user Anna --category 3
//!
//! # Reproduce the original behaviour, with logs
//! RUST_LOG=debug cargo run -p catalog-browser -- --mode legacy -c 1 -c 1
//! ```

use catalog_browser::cli::{run, Cli};
use catalog_framework::tracing::setup_tracing;
use clap::Parser;
use tracing::error;

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to build catalog");
            Err(e.to_string())
        }
    }
}
