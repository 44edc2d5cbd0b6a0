//! Endpoint table and the operations grouped by category.
//!
//! Each submodule adds typed methods on `AirshipClient` for a group of
//! related endpoints.

pub mod devices;
pub mod feedback;
pub mod push;

use reqwest::Url;

use ua_core::config::AirshipConfig;
use ua_core::error::{UaError, UaResult};
use ua_core::platform::Platform;

/// Every URL the client talks to, derived once from the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
    device_tokens: Url,
    apids: Url,
    push: Url,
    batch_push: Url,
    broadcast: Url,
    device_token_feedback: Url,
    apid_feedback: Url,
}

impl Endpoints {
    /// Build the table from an API root such as `https://go.urbanairship.com/api/`.
    pub fn new(base_url: &str) -> UaResult<Self> {
        let sanitized = AirshipConfig::sanitize_base_url(base_url);
        let base = Url::parse(&sanitized)
            .map_err(|e| UaError::Config(format!("invalid base url {sanitized}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(UaError::Config(format!(
                "base url must be http or https: {sanitized}"
            )));
        }

        let join = |path: &str| {
            base.join(path)
                .map_err(|e| UaError::Config(format!("invalid endpoint {path}: {e}")))
        };

        let collection = |platform: Platform| join(&format!("{}/", platform.collection_segment()));
        let feedback =
            |platform: Platform| join(&format!("{}/feedback/", platform.collection_segment()));

        Ok(Self {
            device_tokens: collection(Platform::Ios)?,
            apids: collection(Platform::Android)?,
            push: join("push/")?,
            batch_push: join("push/batch/")?,
            broadcast: join("push/broadcast/")?,
            device_token_feedback: feedback(Platform::Ios)?,
            apid_feedback: feedback(Platform::Android)?,
            base,
        })
    }

    /// The API root.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Device collection of a platform; also the first page of the listing.
    pub fn device_collection(&self, platform: Platform) -> &Url {
        match platform {
            Platform::Ios => &self.device_tokens,
            Platform::Android => &self.apids,
        }
    }

    /// A single device. The identifier is escaped as one path segment.
    pub fn device(&self, platform: Platform, identifier: &str) -> UaResult<Url> {
        let mut url = self.device_collection(platform).clone();
        url.path_segments_mut()
            .map_err(|_| UaError::Config("device url cannot take path segments".into()))?
            .pop_if_empty()
            .push(identifier);
        Ok(url)
    }

    /// Single push.
    pub fn push(&self) -> &Url {
        &self.push
    }

    /// Batch push.
    pub fn batch_push(&self) -> &Url {
        &self.batch_push
    }

    /// Broadcast push.
    pub fn broadcast(&self) -> &Url {
        &self.broadcast
    }

    /// Inactive-device feedback of a platform.
    pub fn feedback(&self, platform: Platform) -> &Url {
        match platform {
            Platform::Ios => &self.device_token_feedback,
            Platform::Android => &self.apid_feedback,
        }
    }

    /// Resolve a link returned by the server against the page it came from.
    ///
    /// Every request carries the account credentials, so links leaving the
    /// API root's origin (scheme, host and port) are refused.
    pub fn resolve(&self, link: &str, page: &Url) -> UaResult<Url> {
        let url = page
            .join(link)
            .map_err(|e| UaError::Serialization(format!("invalid link {link}: {e}")))?;
        if url.origin() != self.base.origin() {
            return Err(UaError::Serialization(format!(
                "link {url} leaves the API host {}",
                self.base.origin().ascii_serialization()
            )));
        }
        Ok(url)
    }
}
