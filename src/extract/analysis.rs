//! Best-effort recovery of a content analysis from raw model text.
//!
//! JSON tier first, then keyword-anchored section regions, then fixed
//! per-section defaults. The caller always receives three non-empty
//! lists.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::core::models::ContentAnalysis;
use crate::extract::json::extract_json_block;

const MAX_SECTION_ITEMS: usize = 5;

pub const DEFAULT_STRENGTH: &str = "内容结构清晰";
pub const DEFAULT_WEAKNESS: &str = "可以增加更多互动元素";
pub const DEFAULT_SUGGESTION: &str = "考虑添加号召性用语";

static STRENGTH_ANCHOR: Lazy<Regex> = Lazy::new(|| anchor(r"优势|优点|内容优势|strengths?"));
static WEAKNESS_ANCHOR: Lazy<Regex> =
    Lazy::new(|| anchor(r"缺点|不足|需要改进|weakness(?:es)?|shortcomings?"));
static SUGGESTION_ANCHOR: Lazy<Regex> =
    Lazy::new(|| anchor(r"建议|改进建议|suggestions?|improvements?"));

static NUMERIC_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[.)]\s*([^\n]+)").unwrap());
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-*]\s*([^\n]+)").unwrap());
static LETTERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z][.)]\s*([^\n]+)").unwrap());
static SEPARATOR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[#\-*=]+$").unwrap());

fn anchor(pattern: &str) -> Regex {
    RegexBuilder::new(&format!("(?:{pattern})[：:]?"))
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// Recovers a strengths/weaknesses/suggestions breakdown from model
/// output. Parse failures fall through the tiers; the result always has
/// three non-empty sections.
#[must_use]
pub fn parse_analysis(text: &str) -> ContentAnalysis {
    let analysis = from_json(text).unwrap_or_else(|| from_labeled_sections(text));
    fill_section_defaults(analysis)
}

/// JSON tier: accepted only when all three section fields are present as
/// string arrays.
fn from_json(text: &str) -> Option<ContentAnalysis> {
    let value = extract_json_block(text)?;
    serde_json::from_value(value).ok()
}

/// Region tier: each section runs from its keyword anchor to the next
/// section's anchor, the suggestion section to end of text. Anchors are
/// located in order, so a later keyword inside an earlier section's
/// items cannot terminate it early.
fn from_labeled_sections(text: &str) -> ContentAnalysis {
    let strength = STRENGTH_ANCHOR.find(text);
    let after_strength = strength.map_or(0, |m| m.end());
    let weakness = WEAKNESS_ANCHOR.find_at(text, after_strength);
    let after_weakness = weakness.map_or(after_strength, |m| m.end());
    let suggestion = SUGGESTION_ANCHOR.find_at(text, after_weakness);

    let strengths_end = weakness
        .map(|m| m.start())
        .or_else(|| suggestion.map(|m| m.start()))
        .unwrap_or(text.len());
    let weaknesses_end = suggestion.map_or(text.len(), |m| m.start());

    let strengths =
        strength.map_or_else(Vec::new, |m| section_items(&text[m.end()..strengths_end]));
    let weaknesses =
        weakness.map_or_else(Vec::new, |m| section_items(&text[m.end()..weaknesses_end]));
    let suggestions = suggestion.map_or_else(Vec::new, |m| section_items(&text[m.end()..]));

    ContentAnalysis {
        strengths,
        weaknesses,
        suggestions,
    }
}

/// Collects list items within one section region, deduplicated and
/// capped.
fn section_items(region: &str) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in extract_list_items(region) {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique.truncate(MAX_SECTION_ITEMS);
    unique
}

/// Tries the three list-marker patterns in order (numeric, bullet,
/// lettered); falls back to non-empty, non-separator lines when no
/// marker matched.
pub fn extract_list_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for pattern in [&NUMERIC_ITEM, &BULLET_ITEM, &LETTERED_ITEM] {
        for caps in pattern.captures_iter(text) {
            let item = caps[1].trim();
            if !item.is_empty() {
                items.push(item.to_string());
            }
        }
    }

    if items.is_empty() {
        items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !SEPARATOR_LINE.is_match(line))
            .map(str::to_string)
            .collect();
    }

    items
}

/// Any section still empty gets its fixed single default item.
fn fill_section_defaults(mut analysis: ContentAnalysis) -> ContentAnalysis {
    if analysis.strengths.is_empty() {
        warn!("No strengths extracted from model output, using section default");
        analysis.strengths.push(DEFAULT_STRENGTH.to_string());
    }
    if analysis.weaknesses.is_empty() {
        analysis.weaknesses.push(DEFAULT_WEAKNESS.to_string());
    }
    if analysis.suggestions.is_empty() {
        analysis.suggestions.push(DEFAULT_SUGGESTION.to_string());
    }
    analysis
}
