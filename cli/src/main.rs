mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, identify, scan, serve, services};
use companion_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let mut cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        json: commands.json,
        ..Config::default()
    };

    if !cfg.json {
        print::banner(cfg.no_banner, cfg.quiet);
    }

    match commands.command {
        Commands::Services { service } => services::services(service, &cfg),
        Commands::Scan { timeout_ms, self_port } => {
            cfg.probe_timeout = Duration::from_millis(timeout_ms);
            cfg.self_port = self_port;
            scan::scan(&cfg).await
        }
        Commands::Serve { port, timeout_ms } => {
            cfg.probe_timeout = Duration::from_millis(timeout_ms);
            cfg.self_port = port;
            serve::serve(&cfg).await
        }
        Commands::Identify { product, manufacturer } => identify::identify(product, manufacturer, &cfg),
    }
}
