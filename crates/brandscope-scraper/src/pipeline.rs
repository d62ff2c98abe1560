//! One scrape invocation: render, extract every signal, release the page.

use brandscope_core::{BrandProfile, Language, StyleNotes};
use scraper::Html;

use crate::assets::{document_base_url, locate_assets_with_base, BrandAssets};
use crate::color::extract_colors;
use crate::error::RenderError;
use crate::fonts::{extract_fonts, web_font_families};
use crate::language::detect_language;
use crate::render::{RenderedPage, Renderer};
use crate::style::analyze_style;
use crate::text::visible_text;

/// Outcome of [`scrape_brand`].
///
/// `profile` is always complete. When the page could not be rendered it is
/// [`BrandProfile::fallback`] and `render_failure` holds the cause.
#[derive(Debug)]
pub struct BrandScrape {
    pub url: String,
    pub profile: BrandProfile,
    pub render_failure: Option<RenderError>,
}

impl BrandScrape {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.render_failure.is_some()
    }
}

/// Signals computed from the serialized DOM alone.
struct DocumentSignals {
    assets: BrandAssets,
    web_fonts: Vec<String>,
    language: Language,
    style_notes: StyleNotes,
}

impl DocumentSignals {
    fn from_html(html: &str, page_url: &str) -> Self {
        let document = Html::parse_document(html);

        let (assets, web_fonts) = match document_base_url(&document, page_url) {
            Some(base) => (
                locate_assets_with_base(&document, &base),
                web_font_families(&document, &base),
            ),
            None => {
                tracing::warn!(page_url, "page URL is not absolute; skipping asset and font links");
                (BrandAssets::default(), Vec::new())
            }
        };
        let text = visible_text(&document);
        tracing::debug!(chars = text.chars().count(), "collected visible text");

        Self {
            assets,
            web_fonts,
            language: detect_language(&text),
            style_notes: analyze_style(&text),
        }
    }
}

/// Scrapes the brand signals of `url`.
///
/// Never fails: a render failure yields the fallback profile, and a failing
/// extraction stage only loses its own fields. The page is closed before
/// this returns on every path that opened one.
#[tracing::instrument(skip(renderer))]
pub async fn scrape_brand<R: Renderer>(renderer: &R, url: &str) -> BrandScrape {
    tracing::info!("scrape started");

    let page = match renderer.render(url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(error = %e, "render failed; returning fallback profile");
            return BrandScrape {
                url: url.to_owned(),
                profile: BrandProfile::fallback(),
                render_failure: Some(e),
            };
        }
    };
    let page_url = page.url().to_owned();

    let html = match page.content().await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(error = %e, "page content unavailable; text signals use defaults");
            String::new()
        }
    };
    let signals = DocumentSignals::from_html(&html, &page_url);

    let colors = extract_colors(&page).await;
    let font_families = extract_fonts(&page, signals.web_fonts).await;
    page.close().await;

    let profile = BrandProfile {
        primary_color: colors.primary,
        secondary_color: colors.secondary,
        accent_color: colors.accent,
        font_families,
        logo_url: signals.assets.logo_url,
        favicon_url: signals.assets.favicon_url,
        language_detected: signals.language,
        style_notes: signals.style_notes,
    };
    tracing::info!(
        language = %profile.language_detected,
        fonts = profile.font_families.len(),
        has_logo = profile.logo_url.is_some(),
        "scrape finished"
    );

    BrandScrape {
        url: url.to_owned(),
        profile,
        render_failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_font_links_resolve_against_base_href_like_assets() {
        let html = r#"<html><head>
            <base href="https://static.bank.example/site/">
            <link rel="icon" href="favicon.ico">
            <link rel="stylesheet" href="//fonts.googleapis.com/css2?family=Lato">
        </head><body><p>Welcome to the bank.</p></body></html>"#;

        let signals = DocumentSignals::from_html(html, "about:blank");

        assert_eq!(
            signals.assets.favicon_url.as_deref(),
            Some("https://static.bank.example/site/favicon.ico")
        );
        assert_eq!(signals.web_fonts, vec!["Lato"]);
    }

    #[test]
    fn relative_page_url_yields_no_links() {
        let html = r#"<head><link rel="icon" href="/f.ico">
            <link href="https://fonts.googleapis.com/css?family=Lato"></head>"#;

        let signals = DocumentSignals::from_html(html, "/relative");

        assert_eq!(signals.assets, BrandAssets::default());
        assert!(signals.web_fonts.is_empty());
    }
}
