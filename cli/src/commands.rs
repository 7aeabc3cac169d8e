pub mod identify;
pub mod scan;
pub mod serve;
pub mod services;

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use companion_common::config::DEFAULT_SELF_PORT;
use companion_common::services::ServiceId;

#[derive(Parser)]
#[command(name = "companion")]
#[command(about = "Companion service catalog and web service scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to only print summaries
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the services that make up Companion
    #[command(alias = "ls")]
    Services {
        /// Only show this service (e.g. "wifi-manager")
        service: Option<ServiceId>,
    },
    /// Find web services listening on this device
    #[command(alias = "s")]
    Scan {
        /// Timeout of every HTTP request, in milliseconds
        #[arg(long, default_value_t = 200)]
        timeout_ms: u64,
        /// Port of the scanner itself, excluded from results
        #[arg(long, default_value_t = DEFAULT_SELF_PORT)]
        self_port: u16,
    },
    /// Serve scan results over HTTP for the frontend
    Serve {
        /// Port to listen on; also excluded from scan results
        #[arg(long, default_value_t = DEFAULT_SELF_PORT)]
        port: u16,
        /// Timeout of every HTTP request, in milliseconds
        #[arg(long, default_value_t = 200)]
        timeout_ms: u64,
    },
    /// Identify a flight controller from its USB serial attributes
    #[command(alias = "i")]
    #[command(group(
        ArgGroup::new("attributes")
            .required(true)
            .multiple(true)
            .args(["product", "manufacturer"])
    ))]
    Identify {
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        manufacturer: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
