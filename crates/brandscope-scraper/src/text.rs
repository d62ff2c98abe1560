//! Visible page copy shared by the language and style analyzers.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Analyzers only look at the start of the page copy.
pub const MAX_TEXT_CHARS: usize = 1000;

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements whose boundaries separate words when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Text rendered inside `<body>`, whitespace-collapsed and truncated to
/// [`MAX_TEXT_CHARS`] characters.
///
/// Text nodes are concatenated as-is, so inline markup inside a word
/// (`<b>Hel</b>lo`) does not split it. Block elements add a separator.
#[must_use]
pub fn visible_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY).next() else {
        return String::new();
    };

    let mut raw = String::new();
    push_text(body, &mut raw);

    collapse_whitespace(&raw).chars().take(MAX_TEXT_CHARS).collect()
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if HIDDEN_ELEMENTS.contains(&name) {
            continue;
        }
        let is_block = BLOCK_ELEMENTS.contains(&name);
        if is_block {
            out.push(' ');
        }
        push_text(child, out);
        if is_block {
            out.push(' ');
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased word tokens; any non-alphanumeric character separates words.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Occurrences of any word from `vocabulary` in `text`.
pub(crate) fn count_words(text: &str, vocabulary: &[&str]) -> usize {
    words(text)
        .filter(|w| vocabulary.contains(&w.as_str()))
        .count()
}
