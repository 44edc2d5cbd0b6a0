//! Urban Airship Core - Foundation types shared by the API client and CLI.
//!
//! This crate provides:
//! - The unified error type for every client operation
//! - The mobile platform enum and its wire vocabulary
//! - TOML configuration (credentials, base URL, logging)
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{UaError, UaResult};
pub use logging::init_logging;
pub use platform::{IntoPlatform, Platform};
