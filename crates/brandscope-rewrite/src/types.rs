use brandscope_core::{CopyField, Language, Tone};
use serde::{Deserialize, Serialize};

/// Copy to rewrite, with the voice it should be rewritten in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub tone: Tone,
    pub language: Language,
    pub fields: Vec<CopyField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_hints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// Rewritten copy keyed by the request's field paths.
///
/// Both lists default to empty when the model omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    #[serde(default)]
    pub rewrites: Vec<CopyField>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl RewriteResponse {
    pub(crate) fn degraded(warning: &str) -> Self {
        Self {
            rewrites: Vec::new(),
            warnings: vec![warning.to_owned()],
        }
    }
}

// ---------------------------------------------------------------------------
// Messages API wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}
