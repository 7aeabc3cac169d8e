//! # Service Catalog
//!
//! Static descriptors of the services that make up Companion.
//!
//! Every descriptor is a compile-time constant; consumers read the fields and
//! render them (e.g. the frontend's list of available services). The JSON shape
//! produced by [`serde`] (`name`, `description`, `company`, `version`) is the
//! persisted format and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

const BLUE_ROBOTICS: &str = "Blue Robotics";

pub const SERVICE_SCANNER_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "Service Scanner",
    description: "Actual scanner for running services.",
    company: BLUE_ROBOTICS,
    version: "0.1.0",
};

pub const WIFI_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "Wifi Manager",
    description: "Service responsible for managing wifi configuration on Companion.",
    company: BLUE_ROBOTICS,
    version: "0.1.0",
};

pub const ETHERNET_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "Ethernet Manager",
    description: "Responsible for management of ethernet adapters configuration.",
    company: BLUE_ROBOTICS,
    version: "0.1.0",
};

static CATALOG: [ServiceDescriptor; 3] = [SERVICE_SCANNER_SERVICE, WIFI_SERVICE, ETHERNET_SERVICE];

/// Human readable metadata describing one manageable subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub company: &'static str,
    /// `MAJOR.MINOR.PATCH`
    pub version: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("descriptor field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("'{version}' is not a MAJOR.MINOR.PATCH version")]
    InvalidVersion { version: String },
}

impl ServiceDescriptor {
    /// Checks that every field is filled and the version is well formed.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let fields = [
            ("name", self.name),
            ("description", self.description),
            ("company", self.company),
            ("version", self.version),
        ];

        if let Some((field, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(DescriptorError::EmptyField { field });
        }

        self.semver().map(|_| ())
    }

    /// Splits the version into its numeric `(major, minor, patch)` parts.
    pub fn semver(&self) -> Result<(u64, u64, u64), DescriptorError> {
        parse_semver(self.version)
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} ({})", self.name, self.version, self.company)
    }
}

fn parse_semver(version: &str) -> Result<(u64, u64, u64), DescriptorError> {
    let invalid = || DescriptorError::InvalidVersion {
        version: version.to_string(),
    };

    let parts: Vec<u64> = version
        .split('.')
        .map(|part| {
            // `u64::from_str` would also accept a leading '+'
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u64>().map_err(|_| invalid())
        })
        .collect::<Result<_, _>>()?;

    match parts.as_slice() {
        [major, minor, patch] => Ok((*major, *minor, *patch)),
        _ => Err(invalid()),
    }
}

/// Identifies one entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceId {
    ServiceScanner,
    WifiManager,
    EthernetManager,
}

impl ServiceId {
    /// All identifiers, in catalog order.
    pub const ALL: [ServiceId; 3] = [
        ServiceId::ServiceScanner,
        ServiceId::WifiManager,
        ServiceId::EthernetManager,
    ];

    pub fn descriptor(self) -> &'static ServiceDescriptor {
        match self {
            ServiceId::ServiceScanner => &CATALOG[0],
            ServiceId::WifiManager => &CATALOG[1],
            ServiceId::EthernetManager => &CATALOG[2],
        }
    }
}

impl FromStr for ServiceId {
    type Err = String;

    /// Accepts the descriptor name in any case, with spaces, dashes or
    /// underscores between words (e.g. "wifi manager", "Wifi-Manager").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ServiceId::ALL
            .into_iter()
            .find(|id| normalize(id.descriptor().name) == wanted)
            .ok_or_else(|| format!("unknown service: {s}"))
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Every known descriptor, in declaration order.
pub fn catalog() -> &'static [ServiceDescriptor] {
    &CATALOG
}

/// Looks a descriptor up by its `name`, ignoring case.
pub fn find(name: &str) -> Option<&'static ServiceDescriptor> {
    CATALOG
        .iter()
        .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name.trim()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
