// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension fragment example.
//!
//! Shows how settings beyond `database_extra` are supplied from a YAML file and from
//! code, and how a higher priority source wins.
//!
//! To run this example:
//! ```bash
//! cargo run --example with_fragments --features yaml
//! ```

use serde_json::json;
use std::io::Write;
use storecfg::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    writeln!(
        file,
        "projectConfig:\n  redis_url: redis://localhost:6379\n  store_cors: http://localhost:8000\nplugins:\n  - payment-manual"
    )?;

    let overrides = MemoryFragmentSource::new(
        "overrides",
        ExtensionFragments::new().with_project("store_cors", json!("https://shop.example.com")),
    )
    .with_priority(2);

    let provider = DefaultConfigProvider::builder()
        .with_mode("production")
        .with_yaml_file(file.path())?
        .with_fragment_source(Box::new(overrides))
        .build()?;

    let config = provider.load_config();
    println!("{}", config.to_yaml()?);

    Ok(())
}
