use std::sync::Arc;

use companion_common::config::Config;
use companion_core::scanner::ServiceScanner;
use companion_core::server;

use crate::terminal::print;

pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    print::header("Service Scanner API", cfg.quiet);
    for path in server::WEB_SERVICES_PATHS {
        print::status(format!("GET {path}"));
    }

    let scanner = Arc::new(ServiceScanner::from_config(cfg)?);
    server::serve(scanner, cfg.self_port).await
}
