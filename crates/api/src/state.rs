use std::sync::Arc;

use pony_llm::Summarizer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pony_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Summarization pipeline (model client, prompt store, audit logger).
    pub summarizer: Arc<Summarizer>,
}
