//! # Serial Board Identification
//!
//! Flight controllers attached over USB report a product and a manufacturer
//! string. This table maps those strings to a known [`Platform`].

use std::fmt;

use serde::Serialize;

/// Which USB serial attribute an identifier matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialAttr {
    Product,
    Manufacturer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Pixhawk1,
    Pixhawk4,
    CubeOrange,
    GenericSerial,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SerialBoardIdentifier {
    pub attribute: SerialAttr,
    pub id_value: &'static str,
    pub platform: Platform,
}

const fn product(id_value: &'static str, platform: Platform) -> SerialBoardIdentifier {
    SerialBoardIdentifier {
        attribute: SerialAttr::Product,
        id_value,
        platform,
    }
}

const fn manufacturer(id_value: &'static str) -> SerialBoardIdentifier {
    SerialBoardIdentifier {
        attribute: SerialAttr::Manufacturer,
        id_value,
        platform: Platform::GenericSerial,
    }
}

/// Ordered by priority: specific products first, generic manufacturers last.
pub static IDENTIFIERS: [SerialBoardIdentifier; 8] = [
    product("Pixhawk1", Platform::Pixhawk1),
    product("FMU v2.x", Platform::Pixhawk1),
    product("Pixhawk4", Platform::Pixhawk4),
    product("FMU v5.x", Platform::Pixhawk4),
    product("CubeOrange", Platform::CubeOrange),
    manufacturer("ArduPilot"),
    manufacturer("3D Robotics"),
    manufacturer("Hex/ProfiCNC"),
];

/// Returns the platform of the first identifier matching the reported attributes.
///
/// Matching is exact and case sensitive, as boards report these strings verbatim.
pub fn identify(product: Option<&str>, manufacturer: Option<&str>) -> Option<Platform> {
    IDENTIFIERS
        .iter()
        .find(|identifier| {
            let reported = match identifier.attribute {
                SerialAttr::Product => product,
                SerialAttr::Manufacturer => manufacturer,
            };
            reported == Some(identifier.id_value)
        })
        .map(|identifier| identifier.platform)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
