//! Headless Chromium renderer driven over CDP.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use super::{ComputedStyle, RenderOptions, RenderedPage, Renderer};
use crate::error::RenderError;

/// Launches a dedicated headless browser for every render.
///
/// Sessions never share a browser process, so concurrent scrapes stay
/// isolated; the caller bounds how many run at once.
#[derive(Debug, Clone, Default)]
pub struct ChromiumRenderer {
    options: RenderOptions,
}

impl ChromiumRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    async fn launch(&self) -> Result<(Browser, JoinHandle<()>), RenderError> {
        let mut builder = BrowserConfig::builder()
            .window_size(self.options.viewport_width, self.options.viewport_height)
            .request_timeout(self.options.nav_timeout)
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--mute-audio")
            .arg("--hide-scrollbars");

        if let Some(path) = &self.options.chrome_path {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(RenderError::Launch)?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!(error = %e, "browser handler error");
                }
            }
        });

        Ok((browser, handler))
    }
}

impl Renderer for ChromiumRenderer {
    type Page = ChromiumPage;

    async fn render(&self, url: &str) -> Result<ChromiumPage, RenderError> {
        let target = reqwest::Url::parse(url).map_err(|e| RenderError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(RenderError::InvalidUrl {
                url: url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", target.scheme()),
            });
        }

        let (browser, handler) = self.launch().await?;

        let navigation =
            tokio::time::timeout(self.options.nav_timeout, navigate(&browser, target.as_str()))
                .await;
        let page = match navigation {
            Ok(Ok(page)) => page,
            Ok(Err(e)) => {
                shutdown(browser, handler).await;
                return Err(RenderError::Navigation {
                    url: url.to_owned(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                shutdown(browser, handler).await;
                return Err(RenderError::Timeout {
                    url: url.to_owned(),
                    timeout_secs: self.options.nav_timeout.as_secs(),
                });
            }
        };

        // CDP has no single network-idle event; wait out a quiet period after load.
        tokio::time::sleep(self.options.network_idle).await;

        let final_url = match page.url().await {
            Ok(Some(u)) => u,
            Ok(None) => target.to_string(),
            Err(e) => {
                tracing::debug!(url, error = %e, "could not read final page URL");
                target.to_string()
            }
        };

        Ok(ChromiumPage {
            browser,
            page,
            handler,
            url: final_url,
        })
    }
}

async fn navigate(browser: &Browser, url: &str) -> Result<Page, CdpError> {
    let page = browser.new_page(url).await?;
    page.wait_for_navigation().await?;
    Ok(page)
}

async fn shutdown(mut browser: Browser, handler: JoinHandle<()>) {
    if let Err(e) = browser.close().await {
        tracing::warn!(error = %e, "failed to close browser");
    }
    if let Err(e) = browser.wait().await {
        tracing::warn!(error = %e, "failed to reap browser process");
    }
    handler.abort();
}

/// A page inside its own browser process.
pub struct ChromiumPage {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    url: String,
}

impl RenderedPage for ChromiumPage {
    fn url(&self) -> &str {
        &self.url
    }

    async fn content(&self) -> Result<String, RenderError> {
        self.page
            .content()
            .await
            .map_err(|e| RenderError::Content(e.to_string()))
    }

    async fn computed_style(&self, selector: &str) -> Result<Option<ComputedStyle>, RenderError> {
        let evaluate_err = |reason: String| RenderError::Evaluate {
            selector: selector.to_owned(),
            reason,
        };

        let result = self
            .page
            .evaluate(computed_style_script(selector))
            .await
            .map_err(|e| evaluate_err(e.to_string()))?;
        let raw: String = result
            .into_value()
            .map_err(|e| evaluate_err(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| evaluate_err(e.to_string()))
    }

    async fn close(self) {
        let Self {
            browser,
            page,
            handler,
            url,
        } = self;
        if let Err(e) = page.close().await {
            tracing::warn!(url = %url, error = %e, "failed to close page");
        }
        shutdown(browser, handler).await;
    }
}

/// Script returning the computed style of the first match as a JSON string
/// (`"null"` when nothing matches).
fn computed_style_script(selector: &str) -> String {
    // A JSON string literal is also a valid JS string literal.
    let literal = serde_json::Value::String(selector.to_owned()).to_string();
    format!(
        "(() => {{ \
            const el = document.querySelector({literal}); \
            if (!el) return JSON.stringify(null); \
            const s = window.getComputedStyle(el); \
            return JSON.stringify({{ backgroundColor: s.backgroundColor, color: s.color, fontFamily: s.fontFamily }}); \
        }})()"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_selector_as_escaped_literal() {
        let script = computed_style_script(r#"[class*="logo"]"#);
        assert!(script.contains(r#"document.querySelector("[class*=\"logo\"]")"#));
        assert!(script.contains("getComputedStyle"));
    }

    #[test]
    fn default_options_match_documented_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.nav_timeout.as_secs(), 30);
        assert_eq!(opts.network_idle.as_millis(), 500);
        assert_eq!((opts.viewport_width, opts.viewport_height), (1280, 800));
    }
}
