//! Global error types for the Urban Airship client.
//!
//! Every failure a client operation can surface is a variant of `UaError`,
//! with conversions from the underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using UaError.
pub type UaResult<T> = Result<T, UaError>;

/// Unified error type covering all error categories.
#[derive(Error, Debug)]
pub enum UaError {
    // -- Caller errors --
    /// A platform value outside {ios, android} was supplied.
    #[error("unrecognized mobile platform: {0}")]
    UnrecognizedPlatform(String),

    // -- Provider errors --
    /// The provider answered 401. Carries the raw response body.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The provider answered with a status the operation does not accept.
    #[error("provider failure (status {status}): {body}")]
    ProviderFailure {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    // -- Network errors --
    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UaError {
    /// Whether the provider rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, UaError::Unauthorized(_))
    }

    /// HTTP status carried by provider errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            UaError::Unauthorized(_) => Some(401),
            UaError::ProviderFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for UaError {
    fn from(e: serde_json::Error) -> Self {
        UaError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for UaError {
    fn from(e: toml::de::Error) -> Self {
        UaError::Config(e.to_string())
    }
}
