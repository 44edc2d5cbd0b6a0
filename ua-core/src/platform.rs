//! Mobile platforms and the wire vocabulary each one uses.
//!
//! The provider proxies two incompatible push services, so URL segments,
//! payload containers and response field names all depend on the platform.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UaError, UaResult};

/// Target mobile platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple devices, addressed by APNs device token.
    #[default]
    Ios,
    /// Android devices, addressed by APID.
    Android,
}

impl Platform {
    /// Lowercase name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// URL path segment of the device collection.
    pub fn collection_segment(&self) -> &'static str {
        match self {
            Platform::Ios => "device_tokens",
            Platform::Android => "apids",
        }
    }

    /// Device page field holding the collection's total count.
    pub fn count_field(&self) -> &'static str {
        match self {
            Platform::Ios => "device_tokens_count",
            Platform::Android => "apids_count",
        }
    }

    /// Device page field holding the identifiers.
    pub fn list_field(&self) -> &'static str {
        match self {
            Platform::Ios => "device_tokens",
            Platform::Android => "apids",
        }
    }

    /// Top-level push key selecting devices by identifier.
    pub fn selector_key(&self) -> &'static str {
        match self {
            Platform::Ios => "device_tokens",
            Platform::Android => "apids",
        }
    }

    /// Push payload key wrapping the notification fields.
    pub fn container_key(&self) -> &'static str {
        match self {
            Platform::Ios => "aps",
            Platform::Android => "android",
        }
    }

    /// Field naming the device in per-device records (device objects, feedback).
    pub fn identifier_field(&self) -> &'static str {
        match self {
            Platform::Ios => "device_token",
            Platform::Android => "apid",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(UaError::UnrecognizedPlatform(s.to_string())),
        }
    }
}

/// Anything a caller may hand to a platform-taking operation.
///
/// Resolution happens before a request is built, so an unknown value
/// never reaches the network.
pub trait IntoPlatform {
    /// Resolve into a known platform or fail with `UnrecognizedPlatform`.
    fn into_platform(self) -> UaResult<Platform>;
}

impl IntoPlatform for Platform {
    fn into_platform(self) -> UaResult<Platform> {
        Ok(self)
    }
}

impl IntoPlatform for &str {
    fn into_platform(self) -> UaResult<Platform> {
        self.parse()
    }
}

impl IntoPlatform for String {
    fn into_platform(self) -> UaResult<Platform> {
        self.parse()
    }
}

impl IntoPlatform for &String {
    fn into_platform(self) -> UaResult<Platform> {
        self.parse()
    }
}
