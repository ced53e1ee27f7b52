//! Tests for configuration module.

use salvo::Depot;

use super::*;
use vcardgen_core::constants::DEFAULT_MAX_REQUEST_BYTES;

fn sample_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        vcard: VCardConfig::default(),
    }
}

#[test_log::test]
fn missing_config_is_an_error() {
    let depot = Depot::new();
    assert!(get_config_from_depot(&depot).is_err());
}

#[test_log::test]
fn injected_config_is_shared() {
    let handler = ConfigHandler::new(sample_settings());
    let mut depot = Depot::new();
    depot.inject(Arc::clone(&handler.settings));

    let settings = get_config_from_depot(&depot);
    assert!(settings.is_ok_and(|s| Arc::ptr_eq(&s, &handler.settings)));
}

#[test]
fn max_request_bytes_converts() {
    assert_eq!(max_request_bytes(&sample_settings()), 8 * 1024 * 1024);
}
