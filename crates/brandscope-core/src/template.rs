//! Template catalog and the heuristic that picks a template from a profile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::profile::{BrandProfile, Formality, Tone};

/// Primary colors more saturated than this read as "bold".
const VIBRANT_SATURATION: f64 = 0.4;

/// A presentation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    Modern,
    Bold,
    Friendly,
    Premium,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Classic,
        Template::Modern,
        Template::Bold,
        Template::Friendly,
        Template::Premium,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Bold => "bold",
            Template::Friendly => "friendly",
            Template::Premium => "premium",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Template::Classic => "Classic - Professional",
            Template::Modern => "Modern - Minimalist",
            Template::Bold => "Bold - Dynamic",
            Template::Friendly => "Friendly - Approachable",
            Template::Premium => "Premium - Sophisticated",
        }
    }

    /// Identifier used by the first generation of stored projects.
    #[must_use]
    pub fn legacy_key(self) -> &'static str {
        match self {
            Template::Classic => "tpl-1",
            Template::Modern => "tpl-2",
            Template::Bold => "tpl-3",
            Template::Friendly => "tpl-4",
            Template::Premium => "tpl-5",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A requested template: an explicit choice or the `auto` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKey {
    #[default]
    Auto,
    Explicit(Template),
}

impl TemplateKey {
    pub const AUTO_DISPLAY_NAME: &'static str = "Auto-Select Best Match";

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateKey::Auto => Self::AUTO_DISPLAY_NAME,
            TemplateKey::Explicit(t) => t.display_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template key \"{0}\"; expected auto, classic, modern, bold, friendly or premium")]
pub struct ParseTemplateKeyError(pub String);

impl FromStr for TemplateKey {
    type Err = ParseTemplateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "auto" {
            return Ok(TemplateKey::Auto);
        }
        Template::ALL
            .into_iter()
            .find(|t| t.key() == key || t.legacy_key() == key)
            .map(TemplateKey::Explicit)
            .ok_or_else(|| ParseTemplateKeyError(s.to_owned()))
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKey::Auto => f.write_str("auto"),
            TemplateKey::Explicit(t) => f.write_str(t.key()),
        }
    }
}

/// Resolves the requested key against a profile.
///
/// An explicit key always wins. For `auto` the rules are tried in order:
/// formal copy, friendly tone, vibrant primary color, casual copy, and
/// finally the premium fallback. The formal and casual rules test the same
/// field, so the casual rule is only reached when the copy is not formal.
#[must_use]
pub fn select_template(requested: TemplateKey, profile: &BrandProfile) -> Template {
    if let TemplateKey::Explicit(template) = requested {
        return template;
    }

    let notes = &profile.style_notes;
    if notes.formality == Formality::Formal {
        return Template::Classic;
    }
    if notes.tone == Tone::Friendly {
        return Template::Friendly;
    }
    if profile
        .primary_color
        .as_ref()
        .is_some_and(|c| c.saturation() > VIBRANT_SATURATION)
    {
        return Template::Bold;
    }
    if notes.formality == Formality::Casual {
        return Template::Modern;
    }
    Template::Premium
}
