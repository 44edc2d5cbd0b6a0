//! Device registration endpoints.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use ua_core::error::UaResult;
use ua_core::platform::IntoPlatform;

use crate::client::AirshipClient;
use crate::device_list::DeviceList;

/// Optional registration fields. Absent fields are left out of the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

impl RegisterOptions {
    /// Whether no field is set, in which case no body is sent.
    pub fn is_empty(&self) -> bool {
        self.alias.is_none() && self.tags.is_none() && self.badge.is_none()
    }
}

impl AirshipClient {
    /// Register a device identifier.
    ///
    /// Returns `true` when the provider created a new registration (201)
    /// and `false` when it updated an existing one (200).
    pub fn register(
        &self,
        identifier: &str,
        options: &RegisterOptions,
        platform: impl IntoPlatform,
    ) -> UaResult<bool> {
        let platform = platform.into_platform()?;
        let url = self.endpoints().device(platform, identifier)?;

        let response = if options.is_empty() {
            self.request(Method::PUT, url, None)?
        } else {
            self.send_json(Method::PUT, url, options)?
        };
        let response = response.expect_status(&[StatusCode::OK, StatusCode::CREATED])?;

        let created = response.status == StatusCode::CREATED;
        debug!("registered {platform} device (created={created})");
        Ok(created)
    }

    /// Mark a device identifier as inactive.
    pub fn deregister(&self, identifier: &str, platform: impl IntoPlatform) -> UaResult<()> {
        let platform = platform.into_platform()?;
        let url = self.endpoints().device(platform, identifier)?;
        self.request(Method::DELETE, url, None)?
            .expect_status(&[StatusCode::NO_CONTENT])?;
        Ok(())
    }

    /// Look up a device. `None` when the provider does not know it (404).
    pub fn get_device_info(
        &self,
        identifier: &str,
        platform: impl IntoPlatform,
    ) -> UaResult<Option<Value>> {
        let platform = platform.into_platform()?;
        let url = self.endpoints().device(platform, identifier)?;
        let response = self.request(Method::GET, url, None)?;
        if response.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.expect_status(&[StatusCode::OK])?;
        Ok(Some(response.json()?))
    }

    /// Lazily list every registered identifier of a platform.
    ///
    /// The first page is fetched before this returns.
    pub fn get_device_list(&self, platform: impl IntoPlatform) -> UaResult<DeviceList<'_>> {
        DeviceList::new(self, platform.into_platform()?)
    }
}
