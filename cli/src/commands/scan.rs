use std::time::{Duration, Instant};

use colored::*;
use tracing::{Instrument, info_span};

use companion_common::config::Config;
use companion_common::metadata::ServiceInfo;
use companion_core::scanner::ServiceScanner;

use crate::terminal::{colors, format, print, spinner};

pub async fn scan(cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("scan");
    spinner::attach_scan_spinner(&span);

    let progress_span = span.clone();
    let scanner = ServiceScanner::from_config(cfg)?.with_progress(Box::new(move |finished, total| {
        spinner::report_scan_progress(&progress_span, finished, total)
    }));

    let start_time: Instant = Instant::now();
    let services: Vec<ServiceInfo> = scanner.scan_ports().instrument(span.clone()).await?;
    drop(span);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&services)?)?);
        return Ok(());
    }

    scan_ends(&services, start_time.elapsed(), cfg);
    Ok(())
}

/// The array the scanner API answers with.
pub fn to_json(services: &[ServiceInfo]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(services)
}

fn scan_ends(services: &[ServiceInfo], total_time: Duration, cfg: &Config) {
    if services.is_empty() {
        print::header("ZERO SERVICES DETECTED", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("Web Services", cfg.quiet);
    // Titles keep the page's whitespace; only the terminal trims it.
    print::trees(
        services.iter().map(|s| (s.title.trim(), format::service_info_to_details(s))),
        cfg.quiet,
    );

    let found: ColoredString = format!("{} web services", services.len()).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let line = format!("Scan Complete: {found} identified in {elapsed}")
        .color(colors::TEXT_DEFAULT)
        .to_string();
    print::summary(&line, cfg.quiet);
}
