//! Push payloads.
//!
//! The two proxied push services use incompatible wire formats. A payload
//! is modelled as a tagged union over the platform notification, each
//! variant carrying only the fields its service understands, and is
//! flattened to the matching schema on serialization:
//!
//! ```json
//! {"aps":{"alert":"hi","sound":"default","badge":3},"device_tokens":["..."],"d":{"k":"v"}}
//! {"android":{"alert":"hi","extra":{"k":"v"}},"apids":["..."]}
//! ```

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use ua_core::constants::wire;
use ua_core::platform::Platform;

/// Optional push parameters.
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Custom key/value data delivered with the notification.
    pub extra: Map<String, Value>,
    /// Target device identifiers (device tokens or APIDs).
    pub device_identifiers: Vec<String>,
    /// Target aliases.
    pub aliases: Vec<String>,
    /// Target tags.
    pub tags: Vec<String>,
    /// Badge number (iOS only).
    pub badge: Option<u32>,
    /// Sound file name (iOS only).
    pub sound: Option<String>,
}

/// iOS notification, sent under `aps`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IosNotification {
    pub alert: Option<String>,
    pub sound: Option<String>,
    pub badge: Option<u32>,
    /// Serialized as the top-level `d` object, outside `aps`.
    pub extra: Map<String, Value>,
}

/// Android notification, sent under `android`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidNotification {
    pub alert: Option<String>,
    pub extra: Map<String, Value>,
}

/// Platform-specific notification body.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Ios(IosNotification),
    Android(AndroidNotification),
}

impl Notification {
    /// Platform this notification is shaped for.
    pub fn platform(&self) -> Platform {
        match self {
            Notification::Ios(_) => Platform::Ios,
            Notification::Android(_) => Platform::Android,
        }
    }

    /// Alert text, if any.
    pub fn alert(&self) -> Option<&str> {
        match self {
            Notification::Ios(n) => n.alert.as_deref(),
            Notification::Android(n) => n.alert.as_deref(),
        }
    }
}

/// A complete push request body.
#[derive(Debug, Clone, PartialEq)]
pub struct PushPayload {
    pub notification: Notification,
    pub device_identifiers: Vec<String>,
    pub aliases: Vec<String>,
    pub tags: Vec<String>,
}

impl PushPayload {
    /// Build the payload for `platform` from an alert and options.
    ///
    /// An empty alert is left out. Sound and badge only exist for iOS and
    /// are dropped for Android.
    pub fn build(alert: &str, options: &PushOptions, platform: Platform) -> Self {
        let alert = Some(alert).filter(|a| !a.is_empty()).map(str::to_owned);

        let notification = match platform {
            Platform::Ios => Notification::Ios(IosNotification {
                alert,
                sound: options.sound.clone(),
                badge: options.badge,
                extra: options.extra.clone(),
            }),
            Platform::Android => {
                if options.sound.is_some() || options.badge.is_some() {
                    debug!("sound/badge have no android equivalent, dropping");
                }
                Notification::Android(AndroidNotification {
                    alert,
                    extra: options.extra.clone(),
                })
            }
        };

        Self {
            notification,
            device_identifiers: options.device_identifiers.clone(),
            aliases: options.aliases.clone(),
            tags: options.tags.clone(),
        }
    }

    /// Platform the payload targets.
    pub fn platform(&self) -> Platform {
        self.notification.platform()
    }
}

#[derive(Serialize)]
struct ApsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<u32>,
}

#[derive(Serialize)]
struct AndroidBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_map")]
    extra: &'a Map<String, Value>,
}

fn is_empty_map(map: &&Map<String, Value>) -> bool {
    map.is_empty()
}

impl Serialize for PushPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let platform = self.platform();
        let mut map = serializer.serialize_map(None)?;

        match &self.notification {
            Notification::Ios(n) => map.serialize_entry(
                platform.container_key(),
                &ApsBody {
                    alert: n.alert.as_deref(),
                    sound: n.sound.as_deref(),
                    badge: n.badge,
                },
            )?,
            Notification::Android(n) => map.serialize_entry(
                platform.container_key(),
                &AndroidBody {
                    alert: n.alert.as_deref(),
                    extra: &n.extra,
                },
            )?,
        }

        if !self.device_identifiers.is_empty() {
            map.serialize_entry(platform.selector_key(), &self.device_identifiers)?;
        }
        if !self.aliases.is_empty() {
            map.serialize_entry("aliases", &self.aliases)?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }
        if let Notification::Ios(n) = &self.notification {
            if !n.extra.is_empty() {
                map.serialize_entry(wire::IOS_EXTRA, &n.extra)?;
            }
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extra() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("article".into(), json!(42));
        map
    }

    #[test]
    fn test_ios_payload_shape() {
        let options = PushOptions {
            sound: Some("default".into()),
            badge: Some(3),
            ..Default::default()
        };
        let payload = PushPayload::build("hi", &options, Platform::Ios);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"aps": {"alert": "hi", "sound": "default", "badge": 3}})
        );
        assert!(value.get("android").is_none());
    }

    #[test]
    fn test_ios_payload_with_targets_and_extra() {
        let options = PushOptions {
            extra: extra(),
            device_identifiers: vec!["TOKEN1".into()],
            aliases: vec!["user-1".into()],
            tags: vec!["sports".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(PushPayload::build("goal", &options, Platform::Ios)).unwrap();
        assert_eq!(
            value,
            json!({
                "aps": {"alert": "goal"},
                "device_tokens": ["TOKEN1"],
                "aliases": ["user-1"],
                "tags": ["sports"],
                "d": {"article": 42}
            })
        );
    }

    #[test]
    fn test_android_payload_shape() {
        let options = PushOptions {
            extra: extra(),
            device_identifiers: vec!["apid-1".into(), "apid-2".into()],
            sound: Some("chime".into()),
            badge: Some(9),
            ..Default::default()
        };
        let value =
            serde_json::to_value(PushPayload::build("hello", &options, Platform::Android)).unwrap();
        assert_eq!(
            value,
            json!({
                "android": {"alert": "hello", "extra": {"article": 42}},
                "apids": ["apid-1", "apid-2"]
            })
        );
        assert!(value.get("aps").is_none());
        assert!(value.get("d").is_none());
    }

    #[test]
    fn test_empty_alert_keeps_container() {
        let payload = PushPayload::build("", &PushOptions::default(), Platform::Android);
        assert_eq!(payload.notification.alert(), None);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"android":{}}"#);
    }

    #[test]
    fn test_serialization_is_compact_utf8() {
        let payload = PushPayload::build("héllo ✓", &PushOptions::default(), Platform::Ios);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"aps":{"alert":"héllo ✓"}}"#
        );
    }

    #[test]
    fn test_badge_zero_is_sent() {
        let options = PushOptions {
            badge: Some(0),
            ..Default::default()
        };
        let value = serde_json::to_value(PushPayload::build("x", &options, Platform::Ios)).unwrap();
        assert_eq!(value["aps"]["badge"], 0);
    }
}
