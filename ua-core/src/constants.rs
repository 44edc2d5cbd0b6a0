//! Application-wide constants.

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API root. The trailing slash matters: endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://go.urbanairship.com/api/";

/// Directory name under the platform config/data dirs.
pub const CONFIG_DIR_NAME: &str = "urbanairship";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Rolling log file name.
pub const LOG_FILE_NAME: &str = "airship.log";

/// Wire keys that are not tied to a platform.
pub mod wire {
    /// Broadcast key listing identifiers that must not receive the push.
    pub const EXCLUDE_TOKENS: &str = "exclude_tokens";
    /// Link to the following device page; absent or null on the last page.
    pub const NEXT_PAGE: &str = "next_page";
    /// Query parameter carrying the feedback lower bound.
    pub const SINCE: &str = "since";
    /// Top-level iOS key for extra (custom) data.
    pub const IOS_EXTRA: &str = "d";
}
