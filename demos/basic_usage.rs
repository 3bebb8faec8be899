// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for envcfg.
//!
//! This example demonstrates:
//! - Reading string and boolean values from the environment
//! - Falling back to defaults for unset variables
//! - What a malformed boolean looks like to the caller
//!
//! To run this example:
//! ```bash
//! export APP_NAME="MyApplication"
//! export ENABLE_DEBUG="true"
//! export ENABLE_CACHE="yes"   # not a JSON boolean, reported as an error
//!
//! cargo run --example basic_usage
//! ```

use envcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== envcfg: Basic Usage ===\n");

    println!("--- String Values ---");
    let app_name = string_config("APP_NAME");
    match app_name.get()? {
        Some(name) => println!("✓ APP_NAME found: {}", name),
        None => println!("✗ APP_NAME not set"),
    }

    let db_host = string_config("DB_HOST").get_or_else("localhost".to_string())?;
    println!("  DB_HOST (default localhost): {}", db_host);

    println!("\n--- Boolean Values ---");
    let debug = boolean_config("ENABLE_DEBUG").get_or_else(false)?;
    println!("  ENABLE_DEBUG (default false): {}", debug);

    match boolean_config("ENABLE_CACHE").get_or_else(true) {
        Ok(cache) => println!("  ENABLE_CACHE (default true): {}", cache),
        Err(e) => println!("✗ ENABLE_CACHE is misconfigured: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
