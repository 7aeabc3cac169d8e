use colored::*;

use companion_common::config::Config;
use companion_common::services::{self, ServiceDescriptor, ServiceId};

use crate::terminal::{colors, format, print};

pub fn services(filter: Option<ServiceId>, cfg: &Config) -> anyhow::Result<()> {
    let descriptors: Vec<&ServiceDescriptor> = match filter {
        Some(id) => vec![id.descriptor()],
        None => services::catalog().iter().collect(),
    };

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&descriptors)?)?);
        return Ok(());
    }

    print::header("Companion Services", cfg.quiet);
    print::trees(
        descriptors.iter().map(|d| (d.name, format::descriptor_to_details(d))),
        cfg.quiet,
    );

    let count: ColoredString = format!("{} services", descriptors.len()).bold().green();
    let line = format!("Catalog lists {count}").color(colors::TEXT_DEFAULT).to_string();
    print::summary(&line, cfg.quiet);

    Ok(())
}

/// The persisted catalog format: an array of descriptor objects.
pub fn to_json(descriptors: &[&ServiceDescriptor]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(descriptors)
}
