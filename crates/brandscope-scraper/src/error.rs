use thiserror::Error;

/// Failures raised by a [`crate::Renderer`] or a live [`crate::RenderedPage`].
///
/// A failure from `Renderer::render` aborts the whole scrape. Failures from
/// page queries only cost the stage that issued them.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid page URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("navigation to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("style query for \"{selector}\" failed: {reason}")]
    Evaluate { selector: String, reason: String },

    #[error("failed to read page content: {0}")]
    Content(String),
}
