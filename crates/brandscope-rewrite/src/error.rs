use thiserror::Error;

/// Errors raised while talking to the rewrite service.
///
/// Only client construction surfaces these to callers; request failures are
/// folded into [`crate::RewriteResponse::warnings`].
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("rewrite service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The messages envelope could not be decoded.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
