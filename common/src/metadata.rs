//! Models produced by the service scanner.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown";

/// Self description a web service publishes on `GET /register_service`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub company: String,
    pub version: String,
    pub webpage: String,
    pub api: String,
}

/// Everything the scanner learned about the web server on one port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// The port answered HTTP at all.
    pub valid: bool,
    pub title: String,
    /// Path of the interactive API docs, empty when none was found.
    pub documentation_url: String,
    /// API paths that serve a swagger-ui page.
    pub versions: Vec<String>,
    pub port: u16,
    pub metadata: Option<ServiceMetadata>,
}

impl ServiceInfo {
    pub fn unknown(port: u16) -> Self {
        Self {
            valid: false,
            title: UNKNOWN_TITLE.to_string(),
            documentation_url: String::new(),
            versions: Vec::new(),
            port,
            metadata: None,
        }
    }

    pub fn has_documentation(&self) -> bool {
        !self.documentation_url.is_empty()
    }
}
