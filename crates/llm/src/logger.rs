//! Append-only audit log for model calls.
//!
//! Every external call is written to its own plain-text file under the log
//! directory, named by timestamp and model. The files are never read back by
//! the system; they exist for later inspection.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

const SEPARATOR: &str =
    "================================================================================";

/// Writes one file per model call.
pub struct CallLogger {
    log_dir: PathBuf,
}

impl CallLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a prompt/response pair to a new log file, returning its path.
    ///
    /// The file name is `YYYYmmdd_HHMMSS_micros_<model>.txt` so entries sort
    /// chronologically.
    pub async fn log_call(
        &self,
        prompt: &str,
        response: &str,
        model: &str,
        metadata: &serde_json::Value,
    ) -> io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.log_dir).await?;

        let now = Utc::now();
        let filename = format!("{}_{model}.txt", now.format("%Y%m%d_%H%M%S_%6f"));
        let path = self.log_dir.join(filename);

        let mut content = format!(
            "{SEPARATOR}\nMODEL CALL LOG\n{SEPARATOR}\nTimestamp: {}\nModel: {model}\n",
            now.to_rfc3339()
        );
        if !metadata.is_null()
            && metadata.as_object().map(|m| !m.is_empty()).unwrap_or(true)
        {
            content.push_str(&format!(
                "\nMetadata:\n{}\n",
                serde_json::to_string_pretty(metadata).unwrap_or_else(|_| metadata.to_string())
            ));
        }
        content.push_str(&format!(
            "\n{SEPARATOR}\nPROMPT\n{SEPARATOR}\n{prompt}\n\n{SEPARATOR}\nRESPONSE\n{SEPARATOR}\n{response}\n\n{SEPARATOR}\n"
        ));

        tokio::fs::write(&path, content).await?;
        Ok(path)
    }
}
