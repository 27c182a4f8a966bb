//! Summarization pipeline for meeting transcripts.
//!
//! Wraps an OpenAI-compatible chat-completions API behind the [`ChatModel`]
//! trait, renders prompt templates from disk, writes a per-call audit log,
//! and post-processes responses into structured meeting summaries.

pub mod logger;
pub mod model;
pub mod prompts;
pub mod summarizer;

pub use logger::CallLogger;
pub use model::{ChatModel, LlmError, OpenAiChatModel};
pub use prompts::PromptStore;
pub use summarizer::{Enrichment, Summarizer};
