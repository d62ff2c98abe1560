//! The rendering seam: a browser that turns a URL into a live page.

mod chromium;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::RenderError;

pub use chromium::{ChromiumPage, ChromiumRenderer};

/// Resolved style properties of the first element matching a selector group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputedStyle {
    pub background_color: String,
    pub color: String,
    pub font_family: String,
}

/// Starts a render session for a URL.
pub trait Renderer {
    type Page: RenderedPage;

    /// Navigate to `url` and wait until the network is idle.
    ///
    /// # Errors
    ///
    /// Any error here is fatal to the scrape invocation.
    fn render(&self, url: &str) -> impl Future<Output = Result<Self::Page, RenderError>> + Send;
}

/// A live, fully rendered page.
///
/// The page holds OS-level browser resources until [`RenderedPage::close`]
/// is awaited.
pub trait RenderedPage: Send + Sync {
    /// Final URL after redirects. Relative asset URLs resolve against it.
    fn url(&self) -> &str;

    /// Serialized DOM after scripts have run.
    fn content(&self) -> impl Future<Output = Result<String, RenderError>> + Send;

    /// Computed style of the first element matching `selector`, or `None`
    /// when nothing matches.
    fn computed_style(
        &self,
        selector: &str,
    ) -> impl Future<Output = Result<Option<ComputedStyle>, RenderError>> + Send;

    /// Release the render session.
    fn close(self) -> impl Future<Output = ()> + Send
    where
        Self: Sized;
}

/// Browser settings for [`ChromiumRenderer`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub chrome_path: Option<PathBuf>,
    pub nav_timeout: Duration,
    /// Quiet period after the load event before the page counts as idle.
    pub network_idle: Duration,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chrome_path: None,
            nav_timeout: Duration::from_secs(30),
            network_idle: Duration::from_millis(500),
            viewport_width: 1280,
            viewport_height: 800,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn from_app_config(config: &brandscope_core::AppConfig) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            nav_timeout: Duration::from_secs(config.nav_timeout_secs),
            network_idle: Duration::from_millis(config.network_idle_ms),
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
        }
    }
}
