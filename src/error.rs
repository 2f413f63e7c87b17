use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DailyError {
    #[error("API key is invalid")]
    InvalidCredentials,

    #[error("Failed to deduce Daily API endpoint from '{url}': {reason}")]
    EndpointConstruction { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Daily API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read Daily API response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Daily API call failed with status code {status}; body: {body}")]
    ApiCall { status: StatusCode, body: String },

    #[error("Failed to unmarshal Daily API response body: {0}")]
    Unmarshal(#[from] serde_json::Error),

    #[error("Failed to delete room '{requested}': {}", describe_mismatch(.deleted, .reported))]
    RoomDeleteMismatch {
        requested: String,
        deleted: bool,
        reported: Option<String>,
    },

    #[error("Invalid room name pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("Room name prefix '{prefix}' is too long, must be up to {max} characters")]
    PrefixTooLong { prefix: String, max: usize },

    #[error("Room task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl DailyError {
    /// HTTP status of a failed API call, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DailyError::ApiCall { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_mismatch(deleted: &bool, reported: &Option<String>) -> String {
    match (*deleted, reported) {
        (false, _) => "room not deleted".to_string(),
        (true, Some(other)) => format!("server reported deleting '{}' instead", other),
        (true, None) => "server did not report which room was deleted".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, DailyError>;
