use colored::*;
use serde_json::{Value, json};
use tracing::warn;

use companion_common::boards::{self, Platform};
use companion_common::config::Config;

use crate::terminal::format::Detail;
use crate::terminal::print;

/// Clap guarantees at least one attribute is present.
pub fn identify(product: Option<String>, manufacturer: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let platform = boards::identify(product.as_deref(), manufacturer.as_deref());

    if cfg.json {
        println!("{}", to_json(platform));
        return Ok(());
    }

    print::header("Board Identification", cfg.quiet);
    let mut rows: Vec<Detail> = vec![
        ("Product".to_string(), product.as_deref().unwrap_or("-").normal()),
        ("Manufacturer".to_string(), manufacturer.as_deref().unwrap_or("-").normal()),
    ];
    if let Some(platform) = platform {
        rows.push(("Platform".to_string(), platform.to_string().bold().green()));
    }
    print::details(&rows);

    if platform.is_none() {
        warn!("No known board matches these attributes");
    }

    Ok(())
}

/// `{"platform": "Pixhawk4"}`, or `{"platform": null}` when nothing matched.
pub fn to_json(platform: Option<Platform>) -> Value {
    json!({ "platform": platform })
}
