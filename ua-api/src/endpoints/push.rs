//! Push, batch push and broadcast endpoints.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use ua_core::constants::wire;
use ua_core::error::UaResult;
use ua_core::platform::IntoPlatform;

use crate::client::AirshipClient;
use crate::payload::{PushOptions, PushPayload};

impl AirshipClient {
    /// Build a push payload, resolving the platform first.
    pub fn build_push_payload(
        &self,
        alert: &str,
        options: &PushOptions,
        platform: impl IntoPlatform,
    ) -> UaResult<PushPayload> {
        Ok(PushPayload::build(alert, options, platform.into_platform()?))
    }

    /// Push a notification to the selected devices, aliases and tags.
    pub fn push(
        &self,
        alert: &str,
        options: &PushOptions,
        platform: impl IntoPlatform,
    ) -> UaResult<()> {
        let payload = self.build_push_payload(alert, options, platform)?;
        self.send_json(Method::POST, self.endpoints().push().clone(), &payload)?
            .expect_status(&[StatusCode::OK])?;
        Ok(())
    }

    /// Send several pre-built payloads in one request.
    ///
    /// One status governs the whole batch.
    pub fn push_batch(&self, payloads: &[PushPayload]) -> UaResult<()> {
        debug!("batch push of {} payloads", payloads.len());
        self.send_json(Method::POST, self.endpoints().batch_push().clone(), payloads)?
            .expect_status(&[StatusCode::OK])?;
        Ok(())
    }

    /// Push to every registered device, minus `exclude_identifiers`.
    pub fn broadcast(&self, payload: &PushPayload, exclude_identifiers: &[String]) -> UaResult<()> {
        let body = broadcast_body(payload, exclude_identifiers)?;
        self.send_json(Method::POST, self.endpoints().broadcast().clone(), &body)?
            .expect_status(&[StatusCode::OK])?;
        Ok(())
    }
}

/// Merge exclusions into the payload under the reserved key.
fn broadcast_body(payload: &PushPayload, exclude_identifiers: &[String]) -> UaResult<Value> {
    let mut body = serde_json::to_value(payload)?;
    if !exclude_identifiers.is_empty() {
        if let Value::Object(map) = &mut body {
            map.insert(
                wire::EXCLUDE_TOKENS.to_string(),
                Value::from(exclude_identifiers.to_vec()),
            );
        }
    }
    Ok(body)
}
