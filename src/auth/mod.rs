use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::DEFAULT_API_URL;
use crate::error::{DailyError, Result};

/// API key and base URL used for every call.
///
/// Immutable once built; cloned freely into concurrent tasks.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_url: String,
}

impl Credentials {
    /// Only checks that the key is non-empty; the platform validates it for real.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(DailyError::InvalidCredentials);
        }

        Ok(Self {
            api_key,
            api_url: api_url.into(),
        })
    }

    /// Credentials against the public Daily API
    pub fn with_default_url(api_key: impl Into<String>) -> Result<Self> {
        Self::new(api_key, DEFAULT_API_URL)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Bearer auth and JSON content-type headers sent with every request
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| DailyError::InvalidCredentials)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
