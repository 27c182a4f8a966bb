/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// External model configuration.
    pub llm: LlmConfig,
}

/// Configuration for the external text-generation API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token for the model API.
    pub api_key: String,
    /// API base URL (default: `https://api.openai.com/v1`).
    pub base_url: String,
    /// Model identifier (default: `gpt-4o-mini`).
    pub model: String,
    /// Directory holding prompt template files (default: `prompts`).
    pub prompts_dir: String,
    /// Directory for per-call audit log files (default: `llm-logs`).
    pub log_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `OPENAI_API_KEY`       | (empty)                     |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1` |
    /// | `LLM_MODEL`            | `gpt-4o-mini`               |
    /// | `PROMPTS_DIR`          | `prompts`                   |
    /// | `LLM_LOG_DIR`          | `llm-logs`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let llm = LlmConfig {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            prompts_dir: std::env::var("PROMPTS_DIR").unwrap_or_else(|_| "prompts".into()),
            log_dir: std::env::var("LLM_LOG_DIR").unwrap_or_else(|_| "llm-logs".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            llm,
        }
    }
}
