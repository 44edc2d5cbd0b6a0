//! Feedback endpoints.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use tracing::debug;

use ua_core::constants::wire;
use ua_core::error::UaResult;
use ua_core::platform::{IntoPlatform, Platform};

use crate::client::AirshipClient;
use crate::feedback::{format_since, FeedbackRecord, WireFeedback};

impl AirshipClient {
    /// iOS device tokens marked inactive since `since`, in response order.
    pub fn feedback(&self, since: DateTime<Utc>) -> UaResult<Vec<FeedbackRecord>> {
        self.feedback_for(Platform::Ios, since)
    }

    /// Devices of `platform` marked inactive since `since`.
    pub fn feedback_for(
        &self,
        platform: impl IntoPlatform,
        since: DateTime<Utc>,
    ) -> UaResult<Vec<FeedbackRecord>> {
        let platform = platform.into_platform()?;
        let mut url = self.endpoints().feedback(platform).clone();
        url.query_pairs_mut()
            .append_pair(wire::SINCE, &format_since(&since));

        let response = self
            .request(Method::GET, url, None)?
            .expect_status(&[StatusCode::OK])?;
        let records: Vec<WireFeedback> = response.json()?;

        debug!("{} inactive {platform} devices since {since}", records.len());
        Ok(records.into_iter().map(FeedbackRecord::from).collect())
    }
}
