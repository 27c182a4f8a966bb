//! Prompt template store.
//!
//! Templates are plain text files under a configurable directory, named
//! `<name>.txt`, each containing a single `{transcript}` substitution point.
//! They are treated as opaque external configuration and re-read on every
//! call so edits take effect without a restart.

use std::path::PathBuf;

use crate::model::LlmError;

/// Template name for participant extraction.
pub const EXTRACT_PARTICIPANTS: &str = "extract_participants";

/// Template name for meeting summarization.
pub const MEETING_SUMMARY: &str = "meeting_summary";

/// Loads and renders prompt templates from a directory.
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the raw template text for `name`.
    pub async fn load(&self, name: &str) -> Result<String, LlmError> {
        let path = self.dir.join(format!("{name}.txt"));
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            LlmError::Template(format!("failed to read {}: {e}", path.display()))
        })
    }

    /// Load the template for `name` and substitute the transcript.
    pub async fn render(&self, name: &str, transcript: &str) -> Result<String, LlmError> {
        let template = self.load(name).await?;
        Ok(template.replace("{transcript}", transcript))
    }
}
