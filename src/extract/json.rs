use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());
static BRACED_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());
static BRACKETED_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Finds a JSON value embedded in free-form model output: a ```json
/// fenced block first, then the outermost brace-delimited object, then
/// the outermost bracket-delimited array. Returns the first candidate
/// that parses, or `None`.
#[must_use]
pub fn extract_json_block(text: &str) -> Option<Value> {
    let candidates = [
        FENCED_JSON
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()),
        BRACED_OBJECT.find(text).map(|m| m.as_str()),
        BRACKETED_ARRAY.find(text).map(|m| m.as_str()),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| serde_json::from_str(candidate.trim()).ok())
}
