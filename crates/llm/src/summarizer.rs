//! Pipeline orchestration: transcript in, structured summary out.

use std::sync::Arc;

use pony_core::summary::{parse_summary_response, MeetingSummary};
use pony_core::types::DbId;

use crate::logger::CallLogger;
use crate::model::{ChatModel, LlmError};
use crate::prompts::{self, PromptStore};

/// Outcome of a best-effort enrichment step during meeting creation.
///
/// Creation-time enrichment (participant extraction, summary generation) must
/// never fail the creation itself, so failures are carried as a value rather
/// than an error. Callers and tests can assert on which path was taken.
#[derive(Debug)]
pub enum Enrichment<T> {
    /// The step ran and produced a value.
    Applied(T),
    /// The step did not apply (e.g. no transcript, or the field was already
    /// supplied by the caller).
    Skipped,
    /// The step ran and failed; the failure was logged and swallowed.
    Failed(LlmError),
}

/// Single-shot summarization pipeline.
///
/// Holds the model client, the prompt store, and the audit logger.
/// Constructed once at startup and shared by reference; there is no retry,
/// no caching, and no deduplication of identical transcripts.
pub struct Summarizer {
    model: Arc<dyn ChatModel>,
    prompts: PromptStore,
    logger: CallLogger,
}

impl Summarizer {
    pub fn new(model: Arc<dyn ChatModel>, prompts: PromptStore, logger: CallLogger) -> Self {
        Self {
            model,
            prompts,
            logger,
        }
    }

    /// Extract a flat participant list from a transcript.
    ///
    /// Returns the trimmed raw response text; no structured parsing is
    /// applied. Callers treat this as best-effort.
    pub async fn extract_participants(&self, transcript: &str) -> Result<String, LlmError> {
        let prompt = self
            .prompts
            .render(prompts::EXTRACT_PARTICIPANTS, transcript)
            .await?;
        let response = self.model.complete(&prompt).await?;
        let response = response.trim().to_string();

        self.audit(
            &prompt,
            &response,
            serde_json::json!({"operation": "extract_participants"}),
        )
        .await;

        Ok(response)
    }

    /// Summarize a meeting transcript into a [`MeetingSummary`].
    ///
    /// `event_id` is only used to tag the audit log entry. An `Err` here
    /// means the external call itself failed; malformed model output is not
    /// an error and yields the fallback document instead.
    pub async fn summarize_meeting(
        &self,
        transcript: &str,
        event_id: Option<DbId>,
    ) -> Result<MeetingSummary, LlmError> {
        let prompt = self
            .prompts
            .render(prompts::MEETING_SUMMARY, transcript)
            .await?;
        let response = self.model.complete(&prompt).await?;

        let metadata = match event_id {
            Some(id) => serde_json::json!({"event_id": id}),
            None => serde_json::json!({}),
        };
        self.audit(&prompt, &response, metadata).await;

        Ok(parse_summary_response(&response))
    }

    /// Write the audit log entry. Log failures must not fail the call.
    async fn audit(&self, prompt: &str, response: &str, metadata: serde_json::Value) {
        if let Err(err) = self
            .logger
            .log_call(prompt, response, self.model.name(), &metadata)
            .await
        {
            tracing::warn!(error = %err, "Failed to write model call audit log");
        }
    }
}
