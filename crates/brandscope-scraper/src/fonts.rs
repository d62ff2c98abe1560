//! Font families from computed styles and linked web-font stylesheets.

use std::sync::LazyLock;

use brandscope_core::FALLBACK_FONT_FAMILIES;
use reqwest::Url;
use scraper::{Html, Selector};

use crate::render::RenderedPage;

/// Selector groups queried for `font-family`: body, headings, header, logo.
pub const FONT_SELECTORS: [&str; 4] = [
    "body",
    "h1, h2, h3",
    "header, .header",
    r#".logo, [class*="logo"]"#,
];

const MAX_FONT_FAMILIES: usize = 3;

const GENERIC_FAMILIES: [&str; 2] = ["serif", "sans-serif"];

static WEB_FONT_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[href*="fonts.googleapis"]"#).expect("valid web font selector")
});

/// Families requested by `fonts.googleapis.com` stylesheet links.
///
/// Reads every `family` query parameter (`css2` repeats it, the legacy API
/// separates families with `|`), drops the `:wght@…` suffix, and decodes
/// `+` as a space. Links that do not resolve to a URL are skipped.
#[must_use]
pub fn web_font_families(document: &Html, base: &Url) -> Vec<String> {
    let mut families = Vec::new();

    for link in document.select(&WEB_FONT_LINK) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(href, error = %e, "skipping unparseable web font link");
                continue;
            }
        };

        for (key, value) in url.query_pairs() {
            if key != "family" {
                continue;
            }
            families.extend(
                value
                    .split('|')
                    .filter_map(|spec| spec.split(':').next())
                    .map(|name| name.replace('+', " ").trim().to_owned())
                    .filter(|name| !name.is_empty()),
            );
        }
    }

    families
}

/// Reduces raw font stacks to at most three distinct family names.
///
/// Stacks are split on commas, names are trimmed of whitespace and quotes,
/// the `serif`/`sans-serif` keywords are dropped, and duplicates keep their
/// first position. An empty result becomes `["Inter", "system-ui"]`.
#[must_use]
pub fn normalize_font_families<I, S>(stacks: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut families: Vec<String> = Vec::new();

    for stack in stacks {
        for part in stack.as_ref().split(',') {
            let name = part.trim().trim_matches(['"', '\'']).trim();
            if name.is_empty()
                || GENERIC_FAMILIES
                    .iter()
                    .any(|g| name.eq_ignore_ascii_case(g))
                || families.iter().any(|f| f == name)
            {
                continue;
            }
            families.push(name.to_owned());
            if families.len() == MAX_FONT_FAMILIES {
                return families;
            }
        }
    }

    if families.is_empty() {
        return FALLBACK_FONT_FAMILIES.map(str::to_owned).to_vec();
    }
    families
}

/// Computed font stacks first, then linked web fonts, normalized.
pub async fn extract_fonts<P: RenderedPage>(page: &P, web_fonts: Vec<String>) -> Vec<String> {
    let mut stacks = Vec::with_capacity(FONT_SELECTORS.len() + web_fonts.len());

    for selector in FONT_SELECTORS {
        match page.computed_style(selector).await {
            Ok(Some(style)) if !style.font_family.trim().is_empty() => {
                stacks.push(style.font_family);
            }
            Ok(_) => tracing::debug!(selector, "no font stack for selector"),
            Err(e) => tracing::warn!(selector, error = %e, "font query failed"),
        }
    }

    stacks.extend(web_fonts);
    normalize_font_families(stacks)
}
