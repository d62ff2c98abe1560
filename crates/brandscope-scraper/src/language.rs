//! Three-way English / Spanish / Portuguese guess from stopword frequency.

use brandscope_core::Language;

use crate::text::count_words;

const SPANISH_STOPWORDS: &[&str] = &[
    "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le", "da",
    "su", "por", "son", "con", "para", "una", "sus", "al", "como", "del", "tu", "él", "si", "yo",
    "más", "pero", "ser", "ha", "me", "mi",
];

const PORTUGUESE_STOPWORDS: &[&str] = &[
    "o", "a", "de", "que", "e", "do", "da", "em", "um", "para", "é", "com", "não", "uma", "os",
    "no", "se", "na", "por", "mais", "as", "dos", "como", "mas", "foi", "ao", "ele", "das", "tem",
    "à", "seu", "sua", "ou", "ser", "quando", "muito", "há", "nos", "já", "está",
];

/// More matches than this switch the verdict away from English.
const STOPWORD_THRESHOLD: usize = 5;

/// Classifies `text` by counting Spanish and Portuguese stopwords.
///
/// Spanish is checked first: a text over the threshold in both languages is
/// Spanish no matter which count is larger. Anything else is English.
#[must_use]
pub fn detect_language(text: &str) -> Language {
    let spanish = count_words(text, SPANISH_STOPWORDS);
    let portuguese = count_words(text, PORTUGUESE_STOPWORDS);
    tracing::debug!(spanish, portuguese, "stopword counts");

    if spanish > STOPWORD_THRESHOLD {
        Language::Es
    } else if portuguese > STOPWORD_THRESHOLD {
        Language::Pt
    } else {
        Language::En
    }
}
