use std::path::Path;

use anyhow::Context;
use brandscope_core::BrandProfile;

/// Reads a profile from a JSON file.
///
/// Accepts a bare profile or any document wrapping one under `profile`,
/// which covers both `scrape` reports and stored project records.
pub(crate) fn read_profile_file(path: &Path) -> anyhow::Result<BrandProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile file {}", path.display()))?;
    parse_profile_document(&raw)
        .with_context(|| format!("{} does not contain a brand profile", path.display()))
}

pub(crate) fn parse_profile_document(raw: &str) -> anyhow::Result<BrandProfile> {
    let mut doc: serde_json::Value = serde_json::from_str(raw)?;
    let profile = match doc.get_mut("profile") {
        Some(inner) => inner.take(),
        None => doc,
    };
    Ok(serde_json::from_value(profile)?)
}
