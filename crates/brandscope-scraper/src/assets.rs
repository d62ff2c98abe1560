//! Logo and favicon lookup against the parsed document.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid asset selector")
}

static IMG_WITH_ALT: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));

/// Container-based logo selectors, tried after the alt-text match.
static LOGO_CONTAINER_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".logo img",
        r#"[class*="logo"] img"#,
        "header img:first-child",
        ".header img:first-child",
    ]
    .into_iter()
    .map(selector)
    .collect()
});

static FAVICON_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        r#"link[rel="icon"]"#,
        r#"link[rel="shortcut icon"]"#,
        r#"link[rel="apple-touch-icon"]"#,
    ]
    .into_iter()
    .map(selector)
    .collect()
});

static BASE_HREF: LazyLock<Selector> = LazyLock::new(|| selector("base[href]"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandAssets {
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
}

/// Finds the logo and favicon, resolved to absolute URLs.
///
/// Returns no assets when `page_url` itself is not an absolute URL.
#[must_use]
pub fn locate_assets(document: &Html, page_url: &str) -> BrandAssets {
    let Some(base) = document_base_url(document, page_url) else {
        tracing::warn!(page_url, "page URL is not absolute; skipping asset lookup");
        return BrandAssets::default();
    };
    locate_assets_with_base(document, &base)
}

pub(crate) fn locate_assets_with_base(document: &Html, base: &Url) -> BrandAssets {
    BrandAssets {
        logo_url: find_logo(document, base),
        favicon_url: find_favicon(document, base),
    }
}

/// The URL relative references resolve against: a `<base href>` when the
/// document declares a usable one, otherwise the page URL.
pub(crate) fn document_base_url(document: &Html, page_url: &str) -> Option<Url> {
    let page = Url::parse(page_url).ok()?;
    let declared = document
        .select(&BASE_HREF)
        .next()
        .and_then(|el| el.value().attr("href"))
        .and_then(|href| page.join(href.trim()).ok());
    Some(declared.unwrap_or(page))
}

fn find_logo(document: &Html, base: &Url) -> Option<String> {
    let by_alt = document.select(&IMG_WITH_ALT).filter(|img| {
        img.value()
            .attr("alt")
            .is_some_and(|alt| alt.to_lowercase().contains("logo"))
    });
    if let Some(url) = first_resolvable(by_alt, "src", base) {
        return Some(url);
    }

    LOGO_CONTAINER_SELECTORS
        .iter()
        .find_map(|sel| first_resolvable(document.select(sel), "src", base))
}

fn find_favicon(document: &Html, base: &Url) -> Option<String> {
    FAVICON_SELECTORS
        .iter()
        .find_map(|sel| first_resolvable(document.select(sel), "href", base))
}

/// First element whose `attr` resolves to an absolute URL. Elements with a
/// missing, empty or malformed value are passed over.
fn first_resolvable<'a>(
    elements: impl Iterator<Item = ElementRef<'a>>,
    attr: &str,
    base: &Url,
) -> Option<String> {
    elements
        .filter_map(|el| el.value().attr(attr))
        .find_map(|raw| absolutize_url(base, raw))
}

fn absolutize_url(base: &Url, candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    match base.join(candidate) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!(candidate, error = %e, "skipping malformed asset URL");
            None
        }
    }
}
