use thiserror::Error;

/// Why loading the wedding document failed.
///
/// All variants collapse into the single error screen; the variant only
/// reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connectivity, DNS, CORS...).
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// A response arrived but its status is not 2xx.
    #[error("{url} answered with status {status}")]
    Http { url: String, status: u16 },

    /// The body is not valid JSON or does not match the document shape.
    #[error("could not decode wedding document: {message}")]
    Parse { message: String },

    /// The body decoded but a field holds an unusable value.
    #[error("invalid wedding document: {0}")]
    Validation(#[from] DateError),
}

impl FetchError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not an ISO-8601 date")]
    Invalid(String),
}
