//! Response types.
//!
//! The provider does not wrap its bodies in an envelope: the HTTP status
//! decides success and the body is either the JSON result or an error text.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use ua_core::constants::wire;
use ua_core::error::{UaError, UaResult};
use ua_core::platform::Platform;

/// Status and fully-read body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

impl RawResponse {
    /// Pass the response through if its status is accepted, else fail with
    /// `ProviderFailure` carrying status and body.
    pub fn expect_status(self, accepted: &[StatusCode]) -> UaResult<Self> {
        if accepted.contains(&self.status) {
            Ok(self)
        } else {
            Err(self.into_failure())
        }
    }

    /// Convert into a `ProviderFailure`.
    pub fn into_failure(self) -> UaError {
        warn!("unexpected status {} from provider", self.status.as_u16());
        UaError::ProviderFailure {
            status: self.status.as_u16(),
            body: self.body,
        }
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> UaResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| UaError::Serialization(format!("failed to parse response: {e}")))
    }
}

/// One page of the device listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePage {
    /// Total size of the whole collection as of this fetch.
    pub count: u64,
    /// Identifiers on this page, in server order.
    pub identifiers: Vec<String>,
    /// Link to the following page.
    pub next_page: Option<String>,
}

impl DevicePage {
    /// Extract a page using the platform's field names.
    ///
    /// List entries may be bare identifiers or device objects carrying the
    /// identifier field (`device_token` / `apid`).
    pub fn parse(page: &Value, platform: Platform) -> UaResult<Self> {
        let entries = page
            .get(platform.list_field())
            .and_then(Value::as_array)
            .ok_or_else(|| {
                UaError::Serialization(format!(
                    "device page is missing the '{}' list",
                    platform.list_field()
                ))
            })?;

        let identifiers = entries
            .iter()
            .map(|entry| match entry {
                Value::String(id) => Ok(id.clone()),
                Value::Object(record) => record
                    .get(platform.identifier_field())
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        UaError::Serialization(format!(
                            "device record without '{}'",
                            platform.identifier_field()
                        ))
                    }),
                other => Err(UaError::Serialization(format!(
                    "unexpected device entry: {other}"
                ))),
            })
            .collect::<UaResult<Vec<_>>>()?;

        let count = page
            .get(platform.count_field())
            .and_then(Value::as_u64)
            .unwrap_or(identifiers.len() as u64);

        let next_page = page
            .get(wire::NEXT_PAGE)
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
            .map(str::to_owned);

        Ok(Self {
            count,
            identifiers,
            next_page,
        })
    }
}
