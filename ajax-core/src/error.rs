use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Client creation
    #[error(transparent)]
    Url(#[from] url::ParseError),

    // Transport
    #[error("HTTP GET failed: {0}")]
    HttpGet(String),
    #[error("HTTP POST failed: {0}")]
    HttpPost(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
    #[error("server responded with status {0}")]
    Status(u16),

    // Payloads
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Date(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The single failure surfaced by [`crate::RequestClient`].
///
/// Non-success statuses, transport failures and undecodable bodies all
/// collapse into this error and display the same fixed message. The
/// underlying cause stays reachable through [`std::error::Error::source`]
/// so it can be logged.
#[derive(Debug, Error)]
#[error("Network response was not ok")]
pub struct RequestError {
    #[source]
    cause: Error,
}

impl RequestError {
    pub const MESSAGE: &'static str = "Network response was not ok";

    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl From<Error> for RequestError {
    fn from(cause: Error) -> Self {
        RequestError { cause }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e).into()
    }
}

impl From<url::ParseError> for RequestError {
    fn from(e: url::ParseError) -> Self {
        Error::Url(e).into()
    }
}
