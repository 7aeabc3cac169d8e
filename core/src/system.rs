use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use companion_common::network::listener::{self, ListeningSocket};

use crate::scanner::PortSource;

const PROC_NET_TCP: &str = "/proc/net/tcp";
const PROC_NET_TCP6: &str = "/proc/net/tcp6";

/// Reads listening TCP sockets from the kernel socket tables.
pub struct ProcNetPortSource {
    tables: Vec<PathBuf>,
}

impl ProcNetPortSource {
    pub fn new() -> Self {
        Self::with_tables(vec![PathBuf::from(PROC_NET_TCP), PathBuf::from(PROC_NET_TCP6)])
    }

    pub fn with_tables(tables: Vec<PathBuf>) -> Self {
        Self { tables }
    }
}

impl Default for ProcNetPortSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortSource for ProcNetPortSource {
    async fn listening_sockets(&self) -> anyhow::Result<Vec<ListeningSocket>> {
        let mut sockets = Vec::new();
        let mut tables_read = 0;

        for table in &self.tables {
            let contents = match tokio::fs::read_to_string(table).await {
                Ok(contents) => contents,
                // tcp6 is absent when IPv6 is disabled
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Socket table {} not present", table.display());
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to read {}", table.display()));
                }
            };

            tables_read += 1;
            sockets.extend(listener::parse_socket_table(&contents)?);
        }

        anyhow::ensure!(tables_read > 0, "no socket table available, is /proc mounted?");
        Ok(sockets)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
