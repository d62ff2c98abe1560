//! The brand profile produced by one scrape of a client website.

use serde::{Deserialize, Serialize};

/// Font families reported when nothing usable was extracted.
pub const FALLBACK_FONT_FAMILIES: [&str; 2] = ["Inter", "system-ui"];

/// A `#rrggbb` color with lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Parses `#rrggbb` in either case. Shorthand `#rgb` is not accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn channels(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }

    /// HSL saturation in `[0.0, 1.0]`.
    #[must_use]
    pub fn saturation(&self) -> f64 {
        let (r, g, b) = self.channels();
        let [r, g, b] = [r, g, b].map(|c| f64::from(c) / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if (max - min).abs() < f64::EPSILON {
            return 0.0;
        }

        let lightness = (max + min) / 2.0;
        if lightness > 0.5 {
            (max - min) / (2.0 - max - min)
        } else {
            (max - min) / (max + min)
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid hex color \"{value}\""))
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    #[default]
    Casual,
}

impl std::fmt::Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formality::Formal => write!(f, "formal"),
            Formality::Casual => write!(f, "casual"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Corporate,
    Friendly,
    #[default]
    Neutral,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Corporate => write!(f, "corporate"),
            Tone::Friendly => write!(f, "friendly"),
            Tone::Neutral => write!(f, "neutral"),
        }
    }
}

/// Writing-style summary of the page copy.
///
/// The default (`0`, casual, neutral) is what an empty text analyzes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleNotes {
    pub avg_sentence_length: u32,
    pub formality: Formality,
    pub tone: Tone,
}

/// Structured brand signals extracted from a single rendered page.
///
/// Colors and assets are best-effort and may be absent; language and style
/// notes are always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<HexColor>,
    pub font_families: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    pub language_detected: Language,
    pub style_notes: StyleNotes,
}

impl BrandProfile {
    /// Profile returned when the page could not be rendered at all.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            primary_color: None,
            secondary_color: None,
            accent_color: None,
            font_families: FALLBACK_FONT_FAMILIES.map(str::to_owned).to_vec(),
            logo_url: None,
            favicon_url: None,
            language_detected: Language::En,
            style_notes: StyleNotes::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_pads_and_lowercases() {
        assert_eq!(HexColor::from_rgb(10, 20, 30).as_str(), "#0a141e");
        assert_eq!(HexColor::from_rgb(255, 0, 171).as_str(), "#ff00ab");
    }

    #[test]
    fn parse_normalizes_case() {
        let color = HexColor::parse("#FF00aB").unwrap();
        assert_eq!(color.as_str(), "#ff00ab");
        assert_eq!(color.channels(), (255, 0, 171));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(HexColor::parse("ff0000").is_none());
        assert!(HexColor::parse("#fff").is_none());
        assert!(HexColor::parse("#gg0000").is_none());
        assert!(HexColor::parse("#ff00000").is_none());
    }

    #[test]
    fn saturation_of_grey_is_zero() {
        assert_eq!(HexColor::from_rgb(128, 128, 128).saturation(), 0.0);
        assert_eq!(HexColor::from_rgb(0, 0, 0).saturation(), 0.0);
    }

    #[test]
    fn saturation_of_pure_red_is_one() {
        let s = HexColor::parse("#ff0000").unwrap().saturation();
        assert!((s - 1.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn saturation_uses_light_branch_above_half_lightness() {
        // max 1.0, min 0.6 → l = 0.8, s = 0.4 / (2 - 1.6) = 1.0
        let s = HexColor::from_rgb(255, 153, 153).saturation();
        assert!((s - 1.0).abs() < 1e-9, "got {s}");

        // #e0d0d0: max .878, min .816 → l > .5, s ≈ 0.205
        let s = HexColor::parse("#e0d0d0").unwrap().saturation();
        assert!(s > 0.2 && s < 0.21, "got {s}");
    }

    #[test]
    fn fallback_profile_has_default_fonts_and_english() {
        let profile = BrandProfile::fallback();
        assert_eq!(profile.font_families, vec!["Inter", "system-ui"]);
        assert_eq!(profile.language_detected, Language::En);
        assert!(profile.primary_color.is_none());
        assert!(profile.logo_url.is_none());
        assert_eq!(profile.style_notes, StyleNotes::default());
    }

    #[test]
    fn profile_serializes_with_camel_case_and_omits_absent_fields() {
        let mut profile = BrandProfile::fallback();
        profile.primary_color = HexColor::parse("#112233");
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["primaryColor"], "#112233");
        assert!(json.get("secondaryColor").is_none());
        assert_eq!(json["languageDetected"], "en");
        assert_eq!(json["styleNotes"]["avgSentenceLength"], 0);
        assert_eq!(json["styleNotes"]["formality"], "casual");
        assert_eq!(json["styleNotes"]["tone"], "neutral");
    }

    #[test]
    fn profile_deserialization_rejects_bad_color() {
        let raw = r#"{
            "primaryColor": "red",
            "fontFamilies": [],
            "languageDetected": "es",
            "styleNotes": {"avgSentenceLength": 3, "formality": "formal", "tone": "corporate"}
        }"#;
        assert!(serde_json::from_str::<BrandProfile>(raw).is_err());
    }
}
