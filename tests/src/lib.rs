//! Helpers shared by the workspace integration tests.

use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use companion_common::network::listener::ListeningSocket;
use companion_core::scanner::PortSource;

/// Reports a fixed set of listening sockets instead of reading the kernel tables.
pub struct FixedPortSource {
    sockets: Vec<ListeningSocket>,
}

impl FixedPortSource {
    pub fn new(sockets: Vec<ListeningSocket>) -> Self {
        Self { sockets }
    }

    /// Every port listening on `0.0.0.0`.
    pub fn reachable(ports: &[u16]) -> Self {
        Self::new(
            ports
                .iter()
                .map(|&port| ListeningSocket {
                    address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                    port,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl PortSource for FixedPortSource {
    async fn listening_sockets(&self) -> anyhow::Result<Vec<ListeningSocket>> {
        Ok(self.sockets.clone())
    }
}
