//! Tone- and language-aware rewriting of landing-page copy through an
//! Anthropic-style messages API.
//!
//! [`RewriteClient::rewrite`] degrades instead of failing: any transport,
//! status or parse problem comes back as an empty rewrite set plus a
//! warning, so callers always keep the original copy.

pub mod client;
pub mod error;
pub mod merge;
pub mod prompt;
pub mod types;

pub use client::RewriteClient;
pub use error::RewriteError;
pub use merge::merge_rewrites;
pub use types::{RewriteRequest, RewriteResponse};
