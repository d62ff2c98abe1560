//! End-to-end pipeline runs against an in-memory renderer.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use brandscope_core::{BrandProfile, Formality, Language, Tone};
use brandscope_scraper::{
    scrape_brand, ComputedStyle, RenderError, RenderedPage, Renderer,
};

const HEADER: &str = "header, .header, nav";
const BUTTON: &str = r#"button, .btn, .button, [class*="primary"]"#;
const ACCENT: &str = r#".cta, [class*="accent"], [class*="highlight"]"#;
const BODY: &str = "body";
const HEADINGS: &str = "h1, h2, h3";

fn style(background: &str, color: &str, font_family: &str) -> ComputedStyle {
    ComputedStyle {
        background_color: background.to_owned(),
        color: color.to_owned(),
        font_family: font_family.to_owned(),
    }
}

#[derive(Default)]
struct FakeRenderer {
    fail_render: bool,
    final_url: Option<String>,
    html: String,
    styles: HashMap<String, ComputedStyle>,
    failing_selectors: HashSet<String>,
    content_fails: bool,
    closed: Arc<AtomicBool>,
}

struct FakePage {
    url: String,
    html: String,
    styles: HashMap<String, ComputedStyle>,
    failing_selectors: HashSet<String>,
    content_fails: bool,
    closed: Arc<AtomicBool>,
}

impl Renderer for FakeRenderer {
    type Page = FakePage;

    async fn render(&self, url: &str) -> Result<FakePage, RenderError> {
        if self.fail_render {
            return Err(RenderError::Timeout {
                url: url.to_owned(),
                timeout_secs: 30,
            });
        }
        Ok(FakePage {
            url: self.final_url.clone().unwrap_or_else(|| url.to_owned()),
            html: self.html.clone(),
            styles: self.styles.clone(),
            failing_selectors: self.failing_selectors.clone(),
            content_fails: self.content_fails,
            closed: Arc::clone(&self.closed),
        })
    }
}

impl RenderedPage for FakePage {
    fn url(&self) -> &str {
        &self.url
    }

    async fn content(&self) -> Result<String, RenderError> {
        if self.content_fails {
            return Err(RenderError::Content("target closed".to_owned()));
        }
        Ok(self.html.clone())
    }

    async fn computed_style(&self, selector: &str) -> Result<Option<ComputedStyle>, RenderError> {
        if self.failing_selectors.contains(selector) {
            return Err(RenderError::Evaluate {
                selector: selector.to_owned(),
                reason: "execution context destroyed".to_owned(),
            });
        }
        Ok(self.styles.get(selector).cloned())
    }

    async fn close(self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

fn bank_page() -> FakeRenderer {
    let html = r#"<html>
        <head>
            <link rel="icon" href="/favicon.ico">
            <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Lato:wght@400&amp;display=swap">
        </head>
        <body>
            <header><div class="logo"><img src="img/logo.svg"></div></header>
            <p>Envía dinero a tu familia. Es rápido y seguro para ti y los tuyos.</p>
            <p>La mejor forma de enviar dinero con el banco de la comunidad.</p>
            <script>var ignored = "the the the";</script>
        </body>
    </html>"#;

    FakeRenderer {
        html: html.to_owned(),
        styles: HashMap::from([
            (HEADER.to_owned(), style("rgba(10, 20, 30, 1)", "rgb(255, 255, 255)", "")),
            (BUTTON.to_owned(), style("rgba(255, 0, 0, 1)", "rgb(255, 255, 255)", "")),
            (ACCENT.to_owned(), style("rgb(0, 255, 0)", "rgb(0, 0, 0)", "")),
            (
                BODY.to_owned(),
                style("rgba(0, 0, 0, 0)", "rgba(0, 0, 0, 0)", r#""Open Sans", Arial, sans-serif"#),
            ),
            (HEADINGS.to_owned(), style("", "", "'Playfair Display', serif")),
        ]),
        ..FakeRenderer::default()
    }
}

#[tokio::test]
async fn full_scrape_fills_every_signal() {
    let renderer = bank_page();
    let outcome = scrape_brand(&renderer, "https://bank.example/es/inicio").await;

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.url, "https://bank.example/es/inicio");

    let profile = outcome.profile;
    assert_eq!(profile.primary_color.as_ref().map(|c| c.as_str()), Some("#0a141e"));
    assert_eq!(profile.secondary_color.as_ref().map(|c| c.as_str()), Some("#ff0000"));
    assert_eq!(profile.accent_color.as_ref().map(|c| c.as_str()), Some("#00ff00"));
    assert_eq!(profile.font_families, vec!["Open Sans", "Arial", "Playfair Display"]);
    assert_eq!(profile.logo_url.as_deref(), Some("https://bank.example/es/img/logo.svg"));
    assert_eq!(profile.favicon_url.as_deref(), Some("https://bank.example/favicon.ico"));
    assert_eq!(profile.language_detected, Language::Es);
    assert_eq!(profile.style_notes.formality, Formality::Casual);
    assert_eq!(profile.style_notes.tone, Tone::Neutral);
    assert!(profile.style_notes.avg_sentence_length > 0);

    assert!(renderer.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn render_failure_returns_fallback_and_reports_cause() {
    let renderer = FakeRenderer {
        fail_render: true,
        ..FakeRenderer::default()
    };
    let outcome = scrape_brand(&renderer, "https://slow.example").await;

    assert!(outcome.is_fallback());
    assert!(matches!(
        outcome.render_failure,
        Some(RenderError::Timeout { timeout_secs: 30, .. })
    ));
    assert_eq!(outcome.profile, BrandProfile::fallback());
    assert_eq!(outcome.profile.font_families, vec!["Inter", "system-ui"]);
}

#[tokio::test]
async fn failing_color_query_only_drops_its_swatch() {
    let mut renderer = bank_page();
    renderer.failing_selectors.insert(HEADER.to_owned());

    let profile = scrape_brand(&renderer, "https://bank.example/").await.profile;

    assert_eq!(profile.primary_color.as_ref().map(|c| c.as_str()), Some("#ff0000"));
    assert_eq!(profile.secondary_color.as_ref().map(|c| c.as_str()), Some("#00ff00"));
    assert!(profile.accent_color.is_none());
    assert_eq!(profile.language_detected, Language::Es);
    assert!(renderer.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn unreadable_content_keeps_computed_signals() {
    let mut renderer = bank_page();
    renderer.content_fails = true;

    let profile = scrape_brand(&renderer, "https://bank.example/").await.profile;

    assert_eq!(profile.primary_color.as_ref().map(|c| c.as_str()), Some("#0a141e"));
    assert_eq!(profile.font_families, vec!["Open Sans", "Arial", "Playfair Display"]);
    assert!(profile.logo_url.is_none());
    assert!(profile.favicon_url.is_none());
    assert_eq!(profile.language_detected, Language::En);
    assert_eq!(profile.style_notes.avg_sentence_length, 0);
    assert!(renderer.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn assets_resolve_against_final_url_after_redirect() {
    let mut renderer = bank_page();
    renderer.final_url = Some("https://www.bank.example/landing/".to_owned());

    let outcome = scrape_brand(&renderer, "http://bank.example").await;

    assert_eq!(outcome.url, "http://bank.example");
    assert_eq!(
        outcome.profile.logo_url.as_deref(),
        Some("https://www.bank.example/landing/img/logo.svg")
    );
}

#[tokio::test]
async fn bare_page_yields_font_fallback_and_no_colors() {
    let renderer = FakeRenderer {
        html: "<html><body></body></html>".to_owned(),
        ..FakeRenderer::default()
    };
    let outcome = scrape_brand(&renderer, "https://empty.example/").await;

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.profile, BrandProfile::fallback());
    assert!(renderer.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn web_fonts_fill_remaining_slots() {
    let mut renderer = bank_page();
    renderer.styles.remove(HEADINGS);
    renderer.styles.insert(BODY.to_owned(), style("rgb(255, 255, 255)", "rgb(0, 0, 0)", "Georgia, serif"));

    let profile = scrape_brand(&renderer, "https://bank.example/").await.profile;

    assert_eq!(profile.font_families, vec!["Georgia", "Lato"]);
    assert_eq!(profile.accent_color.as_ref().map(|c| c.as_str()), Some("#00ff00"));
}
