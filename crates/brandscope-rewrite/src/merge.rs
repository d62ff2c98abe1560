//! Reconciles model rewrites with the fields that were asked for.

use std::collections::{HashMap, HashSet};

use brandscope_core::CopyField;

use crate::types::RewriteResponse;

/// Returns exactly `fields`, in order, with rewritten text substituted where
/// the response supplied a non-blank rewrite for that path.
///
/// Rewrites for paths that were not requested are dropped. Each dropped or
/// missing path adds a warning to those already in `response`. A response
/// with no rewrites at all (a degraded reply) adds no per-path warnings.
#[must_use]
pub fn merge_rewrites(fields: &[CopyField], response: RewriteResponse) -> RewriteResponse {
    let RewriteResponse {
        rewrites,
        mut warnings,
    } = response;

    let requested: HashSet<&str> = fields.iter().map(|f| f.path.as_str()).collect();
    let any_rewrites = !rewrites.is_empty();

    let mut by_path: HashMap<String, String> = HashMap::with_capacity(rewrites.len());
    for rewrite in rewrites {
        if !requested.contains(rewrite.path.as_str()) {
            warnings.push(format!("Ignored rewrite for unknown field \"{}\"", rewrite.path));
            continue;
        }
        if rewrite.text.trim().is_empty() {
            continue;
        }
        by_path.entry(rewrite.path).or_insert(rewrite.text);
    }

    let merged = fields
        .iter()
        .map(|field| match by_path.get(&field.path) {
            Some(text) => CopyField {
                path: field.path.clone(),
                text: text.clone(),
            },
            None => {
                if any_rewrites {
                    warnings.push(format!(
                        "No rewrite returned for \"{}\"; kept original",
                        field.path
                    ));
                }
                field.clone()
            }
        })
        .collect();

    RewriteResponse {
        rewrites: merged,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(path: &str, text: &str) -> CopyField {
        CopyField {
            path: path.to_owned(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn keeps_request_order_and_substitutes_rewrites() {
        let fields = [field("a", "one"), field("b", "two"), field("c", "three")];
        let response = RewriteResponse {
            rewrites: vec![field("c", "THREE"), field("a", "ONE")],
            warnings: vec!["model note".to_owned()],
        };

        let merged = merge_rewrites(&fields, response);

        assert_eq!(
            merged.rewrites,
            vec![field("a", "ONE"), field("b", "two"), field("c", "THREE")]
        );
        assert_eq!(merged.warnings[0], "model note");
        assert_eq!(merged.warnings.len(), 2);
        assert!(merged.warnings[1].contains("\"b\""));
    }

    #[test]
    fn unknown_paths_are_dropped_with_warning() {
        let fields = [field("hero.headline", "Hi")];
        let response = RewriteResponse {
            rewrites: vec![field("hero.headline", "Hola"), field("hero.invented", "x")],
            warnings: Vec::new(),
        };

        let merged = merge_rewrites(&fields, response);

        assert_eq!(merged.rewrites, vec![field("hero.headline", "Hola")]);
        assert_eq!(merged.warnings.len(), 1);
        assert!(merged.warnings[0].contains("hero.invented"));
    }

    #[test]
    fn blank_rewrite_keeps_original() {
        let fields = [field("a", "keep me")];
        let response = RewriteResponse {
            rewrites: vec![field("a", "   ")],
            warnings: Vec::new(),
        };

        let merged = merge_rewrites(&fields, response);

        assert_eq!(merged.rewrites, vec![field("a", "keep me")]);
        assert_eq!(merged.warnings.len(), 1);
    }

    #[test]
    fn degraded_response_keeps_originals_and_single_warning() {
        let fields = [field("a", "x"), field("b", "y")];
        let merged = merge_rewrites(
            &fields,
            RewriteResponse::degraded("AI rewrite service temporarily unavailable"),
        );

        assert_eq!(merged.rewrites, fields.to_vec());
        assert_eq!(merged.warnings, vec!["AI rewrite service temporarily unavailable"]);
    }

    #[test]
    fn first_rewrite_wins_for_duplicate_paths() {
        let fields = [field("a", "x")];
        let response = RewriteResponse {
            rewrites: vec![field("a", "first"), field("a", "second")],
            warnings: Vec::new(),
        };
        assert_eq!(merge_rewrites(&fields, response).rewrites, vec![field("a", "first")]);
    }
}
