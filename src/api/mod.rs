pub mod batch;
pub mod endpoint;
pub mod pagination;
pub mod rooms;

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::Credentials;
use crate::config::Config;
use crate::error::{DailyError, Result};
use crate::security::DEFAULT_SUFFIX_LEN;

/// Tunables for [`DailyClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Lifetime given to created rooms that carry no explicit expiry.
    pub default_room_expiry: Duration,
    /// Length of the random part of prefix-generated room names.
    pub name_suffix_len: usize,
    /// Maximum number of deletes in flight during a batch delete.
    pub delete_concurrency: usize,
    /// Per-request timeout; `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            default_room_expiry: Duration::from_secs(24 * 60 * 60),
            name_suffix_len: DEFAULT_SUFFIX_LEN,
            delete_concurrency: 8,
            request_timeout: None,
        }
    }
}

impl From<&Config> for ClientOptions {
    fn from(config: &Config) -> Self {
        Self {
            default_room_expiry: Duration::from_secs(config.room_expiry_seconds),
            name_suffix_len: config.name_suffix_length,
            delete_concurrency: config.delete_concurrency,
            request_timeout: config.request_timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// Client for the room resource of the Daily REST API.
///
/// Cheap to clone: the HTTP connection pool is shared and the credentials
/// are immutable.
#[derive(Debug, Clone)]
pub struct DailyClient {
    http: Client,
    creds: Credentials,
    options: ClientOptions,
}

impl DailyClient {
    pub fn new(creds: Credentials) -> Result<Self> {
        Self::with_options(creds, ClientOptions::default())
    }

    pub fn with_options(creds: Credentials, options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().map_err(DailyError::ClientBuild)?,
            creds,
            options,
        })
    }

    /// Build a client from environment-derived configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let creds = Credentials::new(config.api_key.clone(), config.api_url.clone())?;
        Self::with_options(creds, ClientOptions::from(config))
    }

    pub fn with_default_room_expiry(mut self, expiry: Duration) -> Self {
        self.options.default_room_expiry = expiry;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Build a room resource URL against the configured base.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        endpoint::rooms_endpoint(self.creds.api_url(), segments, query)
    }

    /// Issue a request and return the raw body of a `200 OK` response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String> {
        tracing::debug!(method = %method, url = %url, "Calling Daily API");

        let mut request = self
            .http
            .request(method, url)
            .headers(self.creds.headers()?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let res = request.send().await.map_err(DailyError::Transport)?;
        let status = res.status();
        let body = res.text().await.map_err(DailyError::BodyRead)?;

        if status != StatusCode::OK {
            tracing::debug!(status = %status, "Daily API call failed");
            return Err(DailyError::ApiCall { status, body });
        }

        Ok(body)
    }

    /// Issue a request and decode a `200 OK` JSON body into `T`.
    async fn request<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, url, body).await?;
        Ok(serde_json::from_str(&text)?)
    }
}
