//! `sections` command: personalized default copy, optionally rewritten.

use std::path::Path;

use brandscope_core::{
    apply_field_updates, load_default_sections, personalize_sections, rewritable_fields,
    AppConfig, BrandProfile, Formality, Language, Tone,
};
use brandscope_rewrite::{merge_rewrites, RewriteClient, RewriteRequest};
use serde::Serialize;

use crate::profile_file::read_profile_file;

#[derive(Debug, Serialize)]
struct SectionsOutput {
    sections: serde_json::Value,
    warnings: Vec<String>,
}

/// # Errors
///
/// Returns an error if the sections file or profile cannot be read, or the
/// rewrite client cannot be built. Rewrite failures only add warnings.
pub(crate) async fn run_sections(
    config: &AppConfig,
    client_name: &str,
    profile_path: Option<&Path>,
    rewrite: bool,
) -> anyhow::Result<()> {
    let mut sections = load_default_sections(&config.sections_path)?;
    personalize_sections(&mut sections, client_name);

    let profile = profile_path.map(read_profile_file).transpose()?;
    let mut warnings = Vec::new();

    if rewrite {
        match RewriteClient::from_config(config)? {
            Some(client) => {
                let request = rewrite_request(&sections, client_name, profile.as_ref());
                let fields = request.fields.clone();
                let merged = merge_rewrites(&fields, client.rewrite(&request).await);
                let applied = apply_field_updates(&mut sections, &merged.rewrites);
                tracing::info!(fields = fields.len(), applied, "sections rewritten");
                warnings = merged.warnings;
            }
            None => {
                tracing::warn!("ANTHROPIC_API_KEY is not set; printing copy without rewrite");
                warnings.push("Rewrite skipped: no API key configured".to_owned());
            }
        }
    }

    let output = SectionsOutput { sections, warnings };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Builds the rewrite request for every copy field, voiced after `profile`
/// (neutral English without one).
pub(crate) fn rewrite_request(
    sections: &serde_json::Value,
    client_name: &str,
    profile: Option<&BrandProfile>,
) -> RewriteRequest {
    let (tone, language) = profile.map_or((Tone::Neutral, Language::En), |p| {
        (p.style_notes.tone, p.language_detected)
    });

    RewriteRequest {
        tone,
        language,
        fields: rewritable_fields(sections),
        style_hints: profile.and_then(style_hints),
        client_name: Some(client_name.to_owned()),
    }
}

fn style_hints(profile: &BrandProfile) -> Option<String> {
    let notes = &profile.style_notes;
    if notes.avg_sentence_length == 0 {
        return None;
    }
    let register = match notes.formality {
        Formality::Formal => "a formal register",
        Formality::Casual => "a casual register",
    };
    Some(format!(
        "Match the client's site: sentences average about {} characters, written in {register}.",
        notes.avg_sentence_length
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sections() -> serde_json::Value {
        json!({
            "hero": { "headline": "Send money with Banco Azul", "ctaHref": "/start" },
            "footer": { "disclaimer": "Fees may apply." }
        })
    }

    #[test]
    fn request_without_profile_is_neutral_english() {
        let request = rewrite_request(&sections(), "Banco Azul", None);
        assert_eq!(request.tone, Tone::Neutral);
        assert_eq!(request.language, Language::En);
        assert!(request.style_hints.is_none());
        assert_eq!(request.client_name.as_deref(), Some("Banco Azul"));
        let paths: Vec<&str> = request.fields.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"hero.headline"));
        assert!(!paths.contains(&"hero.ctaHref"));
    }

    #[test]
    fn request_takes_voice_from_profile() {
        let mut profile = BrandProfile::fallback();
        profile.language_detected = Language::Es;
        profile.style_notes.tone = Tone::Friendly;
        profile.style_notes.avg_sentence_length = 48;

        let request = rewrite_request(&sections(), "Banco Azul", Some(&profile));

        assert_eq!(request.tone, Tone::Friendly);
        assert_eq!(request.language, Language::Es);
        let hints = request.style_hints.unwrap();
        assert!(hints.contains("48 characters"));
        assert!(hints.contains("casual register"));
    }
}
