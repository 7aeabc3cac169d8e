use colored::*;

use companion_common::metadata::ServiceInfo;
use companion_common::services::ServiceDescriptor;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn descriptor_to_details(descriptor: &ServiceDescriptor) -> Vec<Detail> {
    vec![
        ("About".to_string(), descriptor.description.normal()),
        ("Company".to_string(), descriptor.company.normal()),
        ("Version".to_string(), descriptor.version.color(colors::VERSION)),
    ]
}

pub fn service_info_to_details(info: &ServiceInfo) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Port".to_string(), info.port.to_string().color(colors::PORT))];

    if info.has_documentation() {
        details.push(("Docs".to_string(), info.documentation_url.color(colors::URL)));
    }

    if !info.versions.is_empty() {
        details.push(("APIs".to_string(), info.versions.join(", ").color(colors::URL)));
    }

    if let Some(metadata) = &info.metadata {
        details.push(("Service".to_string(), metadata.name.normal()));
        details.push(("About".to_string(), metadata.description.normal()));
        details.push(("Company".to_string(), metadata.company.normal()));
        details.push(("Version".to_string(), metadata.version.color(colors::VERSION)));
    }

    details
}
