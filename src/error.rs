use thiserror::Error;

/// Everything that can stop an odds fetch from producing a table
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid date '{0}', expected YYYYMMDD")]
    InvalidDate(String),

    #[error("API credentials are missing")]
    MissingCredentials,

    #[error("A fetch is already in progress")]
    Busy,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Odds API returned HTTP {0}")]
    Status(u16),

    #[error("Odds API reported status {status_code}: {message}")]
    Provider { status_code: i64, message: String },

    #[error("Failed to parse odds response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Message safe to show an end user
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::InvalidDate(_) => "Please enter a valid date in YYYYMMDD format.",
            FetchError::MissingCredentials => {
                "API credentials are missing. Please check your environment variables."
            }
            FetchError::Busy => "A fetch is already in progress.",
            FetchError::Http(_)
            | FetchError::Status(_)
            | FetchError::Provider { .. }
            | FetchError::Decode(_) => "Failed to fetch data. Please try again.",
        }
    }

    /// True for failures on the wire or in the provider's reply
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Http(_)
                | FetchError::Status(_)
                | FetchError::Provider { .. }
                | FetchError::Decode(_)
        )
    }
}
