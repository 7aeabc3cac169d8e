use std::collections::HashSet;

use companion_common::services::{self, ServiceId, ETHERNET_SERVICE, SERVICE_SCANNER_SERVICE, WIFI_SERVICE};

#[test]
fn catalog_is_exactly_the_three_companion_services() {
    let names: HashSet<&str> = services::catalog().iter().map(|d| d.name).collect();
    let expected: HashSet<&str> = ["Service Scanner", "Wifi Manager", "Ethernet Manager"].into();
    assert_eq!(names, expected);
    assert_eq!(services::catalog().len(), 3);
}

#[test]
fn every_field_is_filled_and_versioned() {
    for descriptor in services::catalog() {
        for field in [descriptor.name, descriptor.description, descriptor.company, descriptor.version] {
            assert!(!field.is_empty(), "{descriptor:?} has an empty field");
        }

        let parts: Vec<&str> = descriptor.version.split('.').collect();
        assert_eq!(parts.len(), 3, "{}", descriptor.version);
        assert!(parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())));
    }
}

#[test]
fn named_constants_match_catalog_entries() {
    assert_eq!(ServiceId::ServiceScanner.descriptor(), &SERVICE_SCANNER_SERVICE);
    assert_eq!(ServiceId::WifiManager.descriptor(), &WIFI_SERVICE);
    assert_eq!(ServiceId::EthernetManager.descriptor(), &ETHERNET_SERVICE);
    assert_eq!(
        WIFI_SERVICE.description,
        "Service responsible for managing wifi configuration on Companion."
    );
}

#[test]
fn json_is_the_frontend_format() {
    let value = serde_json::to_value(services::catalog()).unwrap();
    assert_eq!(
        value[0],
        serde_json::json!({
            "name": "Service Scanner",
            "description": "Actual scanner for running services.",
            "company": "Blue Robotics",
            "version": "0.1.0",
        })
    );
}

#[test]
fn concurrent_readers_see_the_same_values() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| services::catalog().to_vec()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), services::catalog());
    }
}
