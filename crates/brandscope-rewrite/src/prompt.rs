//! Prompt text sent with every rewrite request.

use crate::types::RewriteRequest;

const DEFAULT_CLIENT_NAME: &str = "Financial Institution";

const SYSTEM_PROMPT: &str = "\
You are a brand-safe copy editor specializing in financial services marketing.

CRITICAL RULES:
- Keep the meaning and promises identical
- Preserve all product names, fees, ETAs, and legal wording exactly
- Never add new claims or promises
- Maintain the same call-to-action intent
- Replace {Bank} with the actual client name when provided
- Preserve {Country} and other template variables exactly

Rewrite the provided strings to match the requested tone and language.

TONE GUIDELINES:
- corporate: professional, authoritative, third-person, formal language
- neutral: clear, straightforward, balanced between formal and casual
- friendly: warm, conversational, first/second person, approachable

LANGUAGE REQUIREMENTS:
- en: American English, financial services terminology
- es: Latin American Spanish, appropriate for the US Hispanic market
- pt: Brazilian Portuguese, appropriate for the Brazilian community in the US";

const OUTPUT_FORMAT: &str = "\
Output format: return only JSON with a \"rewrites\" array of objects with \"path\" and \"text\" keys, \
using the paths exactly as given. Include a \"warnings\" array if any content could not be safely rewritten.";

/// System prompt, with style hints appended when present.
#[must_use]
pub fn system_prompt(style_hints: Option<&str>) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);
    if let Some(hints) = style_hints.map(str::trim).filter(|h| !h.is_empty()) {
        prompt.push_str("\n\nSTYLE HINTS: ");
        prompt.push_str(hints);
    }
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT);
    prompt
}

/// User turn: client, tone, language and the fields as pretty JSON.
#[must_use]
pub fn user_prompt(request: &RewriteRequest) -> String {
    let client = request
        .client_name
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CLIENT_NAME);
    // Serializing a Vec of string pairs cannot fail.
    let fields = serde_json::to_string_pretty(&request.fields).unwrap_or_default();

    format!(
        "Client: {client}\nTone: {}\nLanguage: {}\n\nFields to rewrite:\n{fields}",
        request.tone, request.language
    )
}
