//! # Listening Sockets
//!
//! Parsing of the kernel's `/proc/net/tcp` and `/proc/net/tcp6` tables.
//!
//! Each row looks like:
//!
//! ```text
//!   sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid ...
//!    0: 00000000:0051 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0 ...
//! ```
//!
//! Addresses are printed as host-endian 32-bit words, ports as big-endian hex.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use thiserror::Error;

/// `st` column value of a socket in the `TCP_LISTEN` state.
const TCP_LISTEN: &str = "0A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListeningSocket {
    pub address: IpAddr,
    pub port: u16,
}

impl ListeningSocket {
    /// Bound to `0.0.0.0` or `::`, so other hosts can reach it.
    pub fn is_externally_reachable(&self) -> bool {
        self.address.is_unspecified()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed socket table row '{line}': {reason}")]
pub struct ListenerParseError {
    pub line: String,
    pub reason: &'static str,
}

impl ListenerParseError {
    fn new(line: &str, reason: &'static str) -> Self {
        Self {
            line: line.trim().to_string(),
            reason,
        }
    }
}

/// Returns every socket of the table that is in the listening state.
///
/// The header row and blank lines are skipped.
pub fn parse_socket_table(contents: &str) -> Result<Vec<ListeningSocket>, ListenerParseError> {
    let mut sockets = Vec::new();

    for line in contents.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(socket) = parse_row(line)? {
            sockets.push(socket);
        }
    }

    Ok(sockets)
}

fn parse_row(line: &str) -> Result<Option<ListeningSocket>, ListenerParseError> {
    let mut columns = line.split_whitespace();

    let _slot = columns.next();
    let local = columns
        .next()
        .ok_or_else(|| ListenerParseError::new(line, "missing local address"))?;
    let _remote = columns
        .next()
        .ok_or_else(|| ListenerParseError::new(line, "missing remote address"))?;
    let state = columns
        .next()
        .ok_or_else(|| ListenerParseError::new(line, "missing state"))?;

    if state != TCP_LISTEN {
        return Ok(None);
    }

    let (address, port) = local
        .split_once(':')
        .ok_or_else(|| ListenerParseError::new(line, "local address has no port"))?;

    let address = parse_address(address).ok_or_else(|| ListenerParseError::new(line, "bad address"))?;
    let port = u16::from_str_radix(port, 16).map_err(|_| ListenerParseError::new(line, "bad port"))?;

    Ok(Some(ListeningSocket { address, port }))
}

fn parse_address(hex: &str) -> Option<IpAddr> {
    match hex.len() {
        8 => {
            let word = u32::from_str_radix(hex, 16).ok()?;
            Some(IpAddr::V4(Ipv4Addr::from(word.to_ne_bytes())))
        }
        32 => {
            let mut octets = [0u8; 16];
            for (idx, chunk) in octets.chunks_mut(4).enumerate() {
                let word = u32::from_str_radix(hex.get(idx * 8..idx * 8 + 8)?, 16).ok()?;
                chunk.copy_from_slice(&word.to_ne_bytes());
            }
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
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
