//! Default landing-page copy and the helpers that personalize it.
//!
//! The copy lives in a versioned YAML file rather than in code. Sections are
//! handled as an untyped JSON tree so the file can grow new blocks without a
//! release.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;

const CLIENT_PLACEHOLDER: &str = "{Bank}";

/// One addressable string inside the sections tree.
///
/// `path` uses dot-separated segments; array elements are addressed by
/// index, e.g. `why.bullets.0.body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyField {
    pub path: String,
    pub text: String,
}

/// Load the default sections from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, or if the
/// top level is not a mapping.
pub fn load_default_sections(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SectionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sections: Value = serde_yaml::from_str(&content)?;
    if !sections.is_object() {
        return Err(ConfigError::Validation(format!(
            "sections file {} must contain a mapping at the top level",
            path.display()
        )));
    }

    Ok(sections)
}

/// Replace every `{Bank}` placeholder with the client's name.
///
/// Other placeholders such as `{Country}` are left untouched.
pub fn personalize_sections(sections: &mut Value, client_name: &str) {
    match sections {
        Value::String(s) if s.contains(CLIENT_PLACEHOLDER) => {
            *s = s.replace(CLIENT_PLACEHOLDER, client_name);
        }
        Value::Array(items) => {
            for item in items {
                personalize_sections(item, client_name);
            }
        }
        Value::Object(map) => {
            for value in map.values_mut() {
                personalize_sections(value, client_name);
            }
        }
        _ => {}
    }
}

/// Flatten every non-empty string leaf into a [`CopyField`].
///
/// Links (`*Href`, `*Url`, `href`) and the destination country list are
/// skipped; they are data, not copy.
#[must_use]
pub fn rewritable_fields(sections: &Value) -> Vec<CopyField> {
    let mut fields = Vec::new();
    collect_fields(sections, "", &mut fields);
    fields
}

fn collect_fields(value: &Value, prefix: &str, out: &mut Vec<CopyField>) {
    match value {
        Value::String(text) if !text.trim().is_empty() => {
            out.push(CopyField {
                path: prefix.to_owned(),
                text: text.clone(),
            });
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect_fields(item, &join_path(prefix, &idx.to_string()), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                if is_non_copy_key(key) {
                    continue;
                }
                collect_fields(item, &join_path(prefix, key), out);
            }
        }
        _ => {}
    }
}

fn is_non_copy_key(key: &str) -> bool {
    key.ends_with("Href") || key.ends_with("Url") || key == "href" || key == "countries"
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Write field texts back into the tree by path.
///
/// Only existing string leaves are replaced; unknown paths are ignored.
/// Returns the number of fields applied.
pub fn apply_field_updates(sections: &mut Value, fields: &[CopyField]) -> usize {
    fields
        .iter()
        .filter(|field| match lookup_mut(sections, &field.path) {
            Some(Value::String(slot)) => {
                slot.clone_from(&field.text);
                true
            }
            _ => false,
        })
        .count()
}

fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |idx| items.get_mut(idx)),
        _ => None,
    })
}
