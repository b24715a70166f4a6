#[derive(Debug, thiserror::Error)]
pub enum UltraError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("upstream error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
