//! Creator Center AI service — the chat-driven suggestion engine behind
//! the creator dashboard.
//!
//! This crate implements the AI slice of the Creator Center product:
//! 1. A completion gateway that forwards a structured prompt (system
//!    instruction + history + user message) to an external
//!    chat-completions provider, or answers from canned replies when no
//!    credential is configured
//! 2. A post-processor that recovers structured suggestions and content
//!    analyses from the model's free-form text, falling back to fixed
//!    results when nothing can be extracted
//!
//! The dashboard's HTTP routes, auth, upload, and persistence live
//! elsewhere; they consume [`ai::AiService`] and serialize what it
//! returns.
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for the outbound provider call
//! - serde/serde_json for the wire format and embedded-JSON extraction
//! - regex for the list and section heuristics
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use creator_center::ai::AiService;
//! use creator_center::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), creator_center::AiError> {
//!     // Set up structured logging
//!     creator_center::setup_logging();
//!
//!     // With no AI_API_KEY in the environment the service runs in
//!     // canned-response mode, so this works offline.
//!     let service = AiService::new(&AppConfig::from_env());
//!
//!     let reply = service
//!         .generate_chat_response("有什么视频创作灵感？", &[])
//!         .await?;
//!     println!("{}", reply.response);
//!     for suggestion in &reply.inspiration {
//!         println!("- {} [{}]", suggestion.title, suggestion.tags.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod extract;

pub use ai::AiService;
pub use errors::AiError;

/// Configure structured logging for the host process.
///
/// Sets up tracing-subscriber with the plain formatter. Call once at
/// startup, before constructing services.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
