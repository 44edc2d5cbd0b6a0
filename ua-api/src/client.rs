//! Blocking HTTP client for the Urban Airship REST API.
//!
//! Handles Basic authentication, JSON bodies, and the status check shared
//! by every operation (401 is always `Unauthorized`). Operation-specific
//! status handling lives in the `endpoints` modules.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, warn};

use ua_core::config::AirshipConfig;
use ua_core::constants;
use ua_core::error::{UaError, UaResult};

use crate::endpoints::Endpoints;
use crate::response::RawResponse;

/// Application key and secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The application key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Basic <base64(key:secret)>`, standard alphabet, no line breaks.
    pub fn basic_auth(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.key, self.secret));
        format!("Basic {token}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the push provider.
///
/// Holds immutable credentials, the derived auth header and the endpoint
/// table. Each operation issues exactly one request and blocks until the
/// response body has been read. There is no retry and no timeout beyond
/// the transport default.
#[derive(Clone)]
pub struct AirshipClient {
    inner: Client,
    endpoints: Endpoints,
    credentials: Credentials,
    /// Computed once at construction.
    auth_header: HeaderValue,
}

impl AirshipClient {
    /// Create a client against the production API root.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> UaResult<Self> {
        let endpoints = Endpoints::new(constants::DEFAULT_BASE_URL)?;
        Self::build(Credentials::new(key, secret), endpoints)
    }

    /// Create a client from the `[airship]` configuration section.
    pub fn from_config(config: &AirshipConfig) -> UaResult<Self> {
        if !config.is_configured() {
            return Err(UaError::MissingConfig(
                "airship.key and airship.secret are required".into(),
            ));
        }
        let endpoints = Endpoints::new(&config.base_url)?;
        Self::build(
            Credentials::new(config.key.clone(), config.secret.clone()),
            endpoints,
        )
    }

    fn build(credentials: Credentials, endpoints: Endpoints) -> UaResult<Self> {
        let inner = Client::builder()
            .build()
            .map_err(|e| UaError::Http(format!("failed to build HTTP client: {e}")))?;

        let mut auth_header = HeaderValue::from_str(&credentials.basic_auth())
            .map_err(|e| UaError::Config(format!("invalid credentials: {e}")))?;
        auth_header.set_sensitive(true);

        debug!("airship client ready for key {} at {}", credentials.key(), endpoints.base());

        Ok(Self {
            inner,
            endpoints,
            credentials,
            auth_header,
        })
    }

    /// Point the client at another API root (sandbox, mock server).
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The endpoint table in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The credential pair in use.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The `authorization` header value sent with every request.
    pub fn auth_header(&self) -> &HeaderValue {
        &self.auth_header
    }

    // --- Request dispatch ---

    /// Issue one request and read the whole response.
    ///
    /// `content-type` is only set when a body is present. A 401 becomes
    /// `Unauthorized` here, before any operation looks at the status.
    pub(crate) fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> UaResult<RawResponse> {
        debug!("{} {}", method, url.path());

        let mut builder = self
            .inner
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, self.auth_header.clone());
        if let Some(bytes) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let response = builder.send().map_err(Self::classify_error)?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| UaError::Http(format!("failed to read response body: {e}")))?;

        debug!("{} {} -> {}", method, url.path(), status.as_u16());

        if status == StatusCode::UNAUTHORIZED {
            warn!("{} {} rejected: unauthorized", method, url.path());
            return Err(UaError::Unauthorized(body));
        }

        Ok(RawResponse { status, body })
    }

    /// Serialize `payload` as compact JSON and issue the request.
    pub(crate) fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        payload: &T,
    ) -> UaResult<RawResponse> {
        let body = serde_json::to_vec(payload)?;
        self.request(method, url, Some(body))
    }

    /// Classify a reqwest error into a UaError variant.
    fn classify_error(e: reqwest::Error) -> UaError {
        if e.is_connect() {
            UaError::Http(format!("connection failed: {e}"))
        } else {
            UaError::Http(e.to_string())
        }
    }
}

impl std::fmt::Debug for AirshipClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirshipClient")
            .field("endpoints", &self.endpoints)
            .field("credentials", &self.credentials)
            .finish()
    }
}
