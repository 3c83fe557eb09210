use thiserror::Error;

/// Everything that can go wrong while fetching current weather.
///
/// Nothing is retried internally: each variant is handed straight back to
/// the caller, who decides whether to retry, fall back or give up.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Missing or invalid credentials. Never transient.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be built or sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status (401 bad key, 404 unknown city, ...).
    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The body did not match the expected JSON shape.
    #[error("failed to decode weather response: {0}")]
    Decode(String),

    /// Well-formed response without any condition entry.
    #[error("weather condition not found in response")]
    NoData,
}

impl WeatherError {
    /// HTTP status of an upstream failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Only network-level failures may go away on their own.
    pub fn is_transient(&self) -> bool {
        matches!(self, WeatherError::Transport(_))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err.to_string())
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
