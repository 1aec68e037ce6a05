use thiserror::Error;

/// Everything that can go wrong while talking to the market-data provider.
#[derive(Debug, Error)]
pub enum YfError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body was not JSON, or not the envelope the endpoint documents.
    #[error("could not decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx answer.
    #[error("provider returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The payload decoded but carried an error node or lacked a required part.
    #[error("unusable provider payload: {0}")]
    Data(String),

    /// The cookie/crumb handshake failed.
    #[error("session handshake failed: {0}")]
    Auth(String),

    /// The requested period ends before it starts.
    #[error("empty date range: start is not before end")]
    InvalidDates,
}
