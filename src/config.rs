use std::env;

pub const DEFAULT_API_URL: &str = "https://api.daily.co/v1/";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub room_expiry_seconds: u64,
    pub name_suffix_length: usize,
    pub delete_concurrency: usize,
    pub request_timeout_seconds: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_key: env::var("DAILY_API_KEY").map_err(|_| ConfigError::MissingApiKey)?,
            api_url: env::var("DAILY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            room_expiry_seconds: env::var("DAILY_ROOM_EXPIRY_SECONDS")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .unwrap_or(86400),
            name_suffix_length: env::var("DAILY_NAME_SUFFIX_LENGTH")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
            delete_concurrency: env::var("DAILY_DELETE_CONCURRENCY")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8),
            request_timeout_seconds: env::var("DAILY_REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DAILY_API_KEY environment variable is required")]
    MissingApiKey,
}
