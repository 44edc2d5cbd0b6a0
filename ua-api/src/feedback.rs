//! Inactive-device feedback records.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Layouts tried after RFC 3339; all are taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// When a device was marked inactive.
///
/// Values the parser does not understand are kept verbatim instead of
/// failing the whole report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl Timestamp {
    /// Parse a provider timestamp, falling back to the raw text.
    pub fn parse(raw: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Parsed(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| Timestamp::Parsed(naive.and_utc()))
            .unwrap_or_else(|| Timestamp::Raw(raw.to_string()))
    }

    /// The parsed instant, if parsing succeeded.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Timestamp::Parsed(dt) => Some(dt),
            Timestamp::Raw(_) => None,
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Parsed(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Timestamp::Raw(raw) => f.write_str(raw),
        }
    }
}

/// One device reported as permanently undeliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub device_identifier: String,
    pub marked_inactive_on: Timestamp,
    pub alias: Option<String>,
}

impl FeedbackRecord {
    /// `(identifier, timestamp, alias)` view of the record.
    pub fn as_tuple(&self) -> (&str, &Timestamp, Option<&str>) {
        (
            &self.device_identifier,
            &self.marked_inactive_on,
            self.alias.as_deref(),
        )
    }
}

/// Record as sent by the provider; Android reports use `apid`.
#[derive(Debug, Deserialize)]
pub(crate) struct WireFeedback {
    #[serde(alias = "apid")]
    device_token: String,
    /// Usually a string, but anything the provider sends is kept.
    #[serde(default)]
    marked_inactive_on: Value,
    #[serde(default)]
    alias: Option<String>,
}

impl From<WireFeedback> for FeedbackRecord {
    fn from(wire: WireFeedback) -> Self {
        Self {
            marked_inactive_on: match wire.marked_inactive_on {
                Value::String(raw) => Timestamp::parse(&raw),
                other => Timestamp::Raw(other.to_string()),
            },
            device_identifier: wire.device_token,
            alias: wire.alias,
        }
    }
}

/// `since` as sent in the query string: RFC 3339 in UTC. Fractional
/// seconds are written only when present.
pub(crate) fn format_since(since: &DateTime<Utc>) -> String {
    since.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
