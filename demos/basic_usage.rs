// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration crate.
//!
//! This example demonstrates:
//! - Building the configuration for an explicit runtime mode
//! - Building it from `NODE_ENV`
//! - Rendering the result for the hosting framework
//!
//! To run this example:
//! ```bash
//! NODE_ENV=development cargo run --example basic_usage
//! NODE_ENV=production cargo run --example basic_usage
//! ```

use storecfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== storecfg: Basic Usage ===\n");

    println!("--- Explicit modes ---");
    for mode in ["development", "production", "test"] {
        let config = load_config(&RuntimeMode::from(mode));
        println!("{:<12} {}", mode, config.to_json()?);
    }

    println!("\n--- From NODE_ENV ---");
    let provider = DefaultConfigProvider::builder().with_env().build()?;
    let config = provider.load_config();
    println!("{}", config.to_json_pretty()?);

    if config.database_extra().is_empty() {
        println!("\nDatabase TLS settings left to the driver defaults.");
    } else {
        println!("\nDatabase connections use TLS without certificate verification.");
    }

    Ok(())
}
