//! Best-effort extraction of structured data from free-form model
//! output. Every path ends in a fixed fallback; nothing in this module
//! returns an error.

pub mod analysis;
pub mod inspirations;
pub mod json;
pub mod tags;

pub use analysis::parse_analysis;
pub use inspirations::{extract_inspirations, fallback_inspirations, parse_inspirations};
pub use json::extract_json_block;
pub use tags::extract_tags;
