//! Writing-style heuristics: sentence length, formality and tone.

use brandscope_core::{Formality, StyleNotes, Tone};

use crate::text::count_words;

const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "furthermore",
    "moreover",
    "consequently",
    "nevertheless",
    "however",
];

const CASUAL_MARKERS: &[&str] = &["awesome", "great", "cool", "amazing", "fantastic", "wonderful"];

/// More marker hits than this set the tone.
const TONE_THRESHOLD: usize = 2;

/// Derives [`StyleNotes`] from page copy.
///
/// Formality ties go to casual. Tone checks friendly before corporate, so
/// copy that crosses both thresholds reads as friendly.
#[must_use]
pub fn analyze_style(text: &str) -> StyleNotes {
    let formal = count_words(text, FORMAL_MARKERS);
    let casual = count_words(text, CASUAL_MARKERS);

    let formality = if formal > casual {
        Formality::Formal
    } else {
        Formality::Casual
    };

    let tone = if casual > TONE_THRESHOLD {
        Tone::Friendly
    } else if formal > TONE_THRESHOLD {
        Tone::Corporate
    } else {
        Tone::Neutral
    };

    StyleNotes {
        avg_sentence_length: average_sentence_length(text),
        formality,
        tone,
    }
}

/// Mean character length of the sentences in `text`, rounded half up.
///
/// Sentences end at `.`, `!` or `?`; blank fragments are not sentences.
fn average_sentence_length(text: &str) -> u32 {
    let (count, total) = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .fold((0usize, 0usize), |(count, total), s| {
            (count + 1, total + s.chars().count())
        });

    if count == 0 {
        return 0;
    }
    let rounded = (2 * total + count) / (2 * count);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
