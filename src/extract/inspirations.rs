//! Best-effort recovery of inspiration suggestions from raw model text.
//!
//! Two entry points: [`parse_inspirations`] for replies that were asked
//! to produce a suggestion list (JSON tier, then numbered-list tier,
//! then the fixed fallback), and [`extract_inspirations`] for ordinary
//! chat replies, which mines advice-flavored sentences and may yield
//! nothing. Neither ever fails: a parse error just drops to the next
//! tier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::core::models::InspirationSuggestion;
use crate::extract::json::extract_json_block;
use crate::extract::tags::{MAX_TAGS, extract_tags};

pub const MAX_TITLE_CHARS: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Numbered-list tier stops after this many suggestions.
const MAX_PARSED_SUGGESTIONS: usize = 5;
/// Numbered segments at or below this byte length are treated as noise.
const MIN_SEGMENT_BYTES: usize = 20;

/// Chat-path titles are cut to this many characters.
const CHAT_TITLE_CHARS: usize = 30;
/// Chat-path sentences at or below this byte length are ignored.
const MIN_SENTENCE_BYTES: usize = 15;
const MAX_CHAT_SUGGESTIONS: usize = 3;

/// Keywords marking a chat sentence as advice worth surfacing.
const ADVICE_KEYWORDS: [&str; 7] = ["建议", "可以尝试", "推荐", "灵感", "创意", "方法", "技巧"];

const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

static NUMBERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[.)]").unwrap());
static TITLE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:#\-*]").unwrap());

/// Recovers a suggestion list from model output, in priority order:
/// embedded JSON, then numbered-list heuristics, then the fixed
/// fallback list.
#[must_use]
pub fn parse_inspirations(text: &str) -> Vec<InspirationSuggestion> {
    from_json(text)
        .or_else(|| from_numbered_list(text))
        .unwrap_or_else(|| {
            warn!("No structured suggestions found in model output, using fallback list");
            fallback_inspirations()
        })
}

/// Mines a chat reply for advice-flavored sentences. Returns up to three
/// suggestions; an empty result just means the reply carried no advice.
#[must_use]
pub fn extract_inspirations(text: &str) -> Vec<InspirationSuggestion> {
    let mut suggestions = Vec::new();

    for sentence in text.split(&SENTENCE_TERMINATORS[..]) {
        let sentence = sentence.trim();
        if sentence.len() <= MIN_SENTENCE_BYTES {
            continue;
        }
        if !ADVICE_KEYWORDS.iter().any(|kw| sentence.contains(kw)) {
            continue;
        }

        let mut title: String = sentence.chars().take(CHAT_TITLE_CHARS).collect();
        if sentence.chars().count() > CHAT_TITLE_CHARS {
            title.push_str("...");
        }

        suggestions.push(InspirationSuggestion {
            title,
            description: sentence.to_string(),
            tags: extract_tags(sentence),
        });

        if suggestions.len() >= MAX_CHAT_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

/// The fixed suggestion list substituted when nothing can be extracted.
#[must_use]
pub fn fallback_inspirations() -> Vec<InspirationSuggestion> {
    vec![
        InspirationSuggestion {
            title: "如何制作吸引人的视频开场".to_string(),
            description: "开场白对于吸引观众至关重要，建议使用悬念或有趣的问题开场。".to_string(),
            tags: vec![
                "视频制作".to_string(),
                "内容创作".to_string(),
                "开场技巧".to_string(),
            ],
        },
        InspirationSuggestion {
            title: "视频内容结构优化".to_string(),
            description: "使用三段式结构：引入问题、展示解决方案、总结关键点。".to_string(),
            tags: vec![
                "内容结构".to_string(),
                "视频脚本".to_string(),
                "叙事技巧".to_string(),
            ],
        },
        InspirationSuggestion {
            title: "增加观众互动的方法".to_string(),
            description: "在视频中提出问题，鼓励观众在评论区分享看法。".to_string(),
            tags: vec![
                "观众互动".to_string(),
                "社区建设".to_string(),
                "评论引导".to_string(),
            ],
        },
    ]
}

/// JSON tier: accepts a bare array, or an object exposing an
/// `inspirations` or `suggestions` array field. Unknown fields are
/// ignored, missing fields default.
fn from_json(text: &str) -> Option<Vec<InspirationSuggestion>> {
    let value = extract_json_block(text)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map
            .remove("inspirations")
            .or_else(|| map.remove("suggestions"))?
        {
            Value::Array(items) => items,
            _ => return None,
        },
        _ => return None,
    };

    let suggestions: Vec<InspirationSuggestion> = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .ok()?;

    Some(suggestions.into_iter().map(normalize).collect())
}

/// Numbered-list tier: split on `N.` / `N)` markers, one suggestion per
/// long-enough segment. First line becomes the title, the rest the
/// description.
fn from_numbered_list(text: &str) -> Option<Vec<InspirationSuggestion>> {
    let mut suggestions = Vec::new();

    for segment in NUMBERED_MARKER.split(text).skip(1) {
        if suggestions.len() >= MAX_PARSED_SUGGESTIONS {
            break;
        }

        let segment = segment.trim();
        if segment.len() <= MIN_SEGMENT_BYTES {
            continue;
        }

        let lines: Vec<&str> = segment
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some((first, rest)) = lines.split_first() else {
            continue;
        };

        let title = TITLE_NOISE.replace_all(first, "").trim().to_string();
        let description = if rest.is_empty() {
            title.clone()
        } else {
            rest.join(" ")
        };

        suggestions.push(InspirationSuggestion {
            title: truncate_chars(&title, MAX_TITLE_CHARS),
            description: truncate_chars(&description, MAX_DESCRIPTION_CHARS),
            tags: extract_tags(segment),
        });
    }

    if suggestions.is_empty() {
        None
    } else {
        Some(suggestions)
    }
}

/// Applies the title/description/tag bounds to a suggestion regardless of
/// which tier produced it.
fn normalize(suggestion: InspirationSuggestion) -> InspirationSuggestion {
    InspirationSuggestion {
        title: truncate_chars(&suggestion.title, MAX_TITLE_CHARS),
        description: truncate_chars(&suggestion.description, MAX_DESCRIPTION_CHARS),
        tags: suggestion.tags.into_iter().take(MAX_TAGS).collect(),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
