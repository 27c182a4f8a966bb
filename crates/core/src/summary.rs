//! Meeting summary document and response parsing.
//!
//! The external model is asked to answer with a JSON object of four fields.
//! Models routinely wrap that object in a markdown code fence, so the raw
//! response is unfenced before parsing. Malformed output never raises: it
//! degrades into a fallback document that preserves the raw text for
//! debugging.

use serde::{Deserialize, Serialize};

/// Sentiment used by the fallback document when parsing fails.
pub const SENTIMENT_AMBER: &str = "amber";

/// Structured summary of a meeting transcript.
///
/// `sentiment` is a coarse traffic-light classification (`"green"`,
/// `"amber"`, `"red"`); it is kept as a plain string because the stored
/// payload is opaque and the model is the authority on its vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub tldr: String,
    #[serde(default)]
    pub action_items: Vec<String>,
    pub sentiment: String,
    pub sentiment_explanation: String,
    /// Only present on the fallback variant: the unparsed model response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl MeetingSummary {
    /// Build the fallback document for a response that failed to parse.
    pub fn parse_failure(raw: &str, error: &str) -> Self {
        Self {
            tldr: "Error: Could not parse model response".to_string(),
            action_items: Vec::new(),
            sentiment: SENTIMENT_AMBER.to_string(),
            sentiment_explanation: format!("JSON parsing error: {error}"),
            raw_response: Some(raw.to_string()),
        }
    }

    /// Whether this is the fallback variant rather than a parsed summary.
    pub fn is_fallback(&self) -> bool {
        self.raw_response.is_some()
    }
}

/// Strip an optional markdown code fence from a model response.
///
/// Handles a leading ```` ``` ```` with or without a language tag (e.g.
/// ```` ```json ````) and a trailing ```` ``` ````. Text without a fence is
/// returned unchanged apart from surrounding whitespace.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // Drop only the language tag itself; content sharing the fence line
        // must survive.
        body = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(inner) = body.trim_end().strip_suffix("```") {
            body = inner;
        }
        body = body.trim();
    }
    body
}

/// Parse a raw model response into a [`MeetingSummary`].
///
/// Never fails: unparseable responses yield the fallback document with the
/// raw text preserved.
pub fn parse_summary_response(raw: &str) -> MeetingSummary {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<MeetingSummary>(cleaned) {
        Ok(summary) => summary,
        Err(err) => MeetingSummary::parse_failure(raw, &err.to_string()),
    }
}
