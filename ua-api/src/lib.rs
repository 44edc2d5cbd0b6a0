//! Urban Airship API - blocking HTTP client for the push provider's REST API.
//!
//! Covers device registration and lookup for iOS device tokens and Android
//! APIDs, single, batch and broadcast pushes, and the inactive-device
//! feedback report. Every operation is one authenticated HTTP call whose
//! status code decides success.

pub mod client;
pub mod device_list;
pub mod endpoints;
pub mod feedback;
pub mod payload;
pub mod response;

// Re-export key types
pub use client::{AirshipClient, Credentials};
pub use device_list::DeviceList;
pub use endpoints::devices::RegisterOptions;
pub use endpoints::Endpoints;
pub use feedback::{FeedbackRecord, Timestamp};
pub use payload::{AndroidNotification, IosNotification, Notification, PushOptions, PushPayload};
pub use response::{DevicePage, RawResponse};
pub use ua_core::{IntoPlatform, Platform, UaError, UaResult};
