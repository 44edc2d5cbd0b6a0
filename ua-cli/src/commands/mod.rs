//! CLI command implementations.

pub mod devices;
pub mod feedback;
pub mod push;

use ua_api::AirshipClient;
use ua_core::config::AppConfig;
use ua_core::error::UaResult;

/// Helper to create an API client from config.
pub fn create_client(config: &AppConfig) -> UaResult<AirshipClient> {
    AirshipClient::from_config(&config.airship)
}

/// Print a JSON value for scripting output.
pub fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
