use anyhow::Context;
use serde::Deserialize;

/// Which kind of log entries to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogKind {
    All,
    Build,
    Error,
    Query,
}

impl LogKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Build => "build",
            Self::Error => "error",
            Self::Query => "query",
        }
    }
}

/// One access-log record as returned by the logs endpoint. The rendering
/// pipeline treats it as immutable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub method: String,
    pub answer_code: String,
    pub query_body: String,
    pub answer: String,
    pub url: String,
    pub query_headers: String,
    pub query_params: Option<String>,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub sha1: String,
    pub nb_api_calls: Option<String>,
    pub processing_time_ms: Option<String>,
    pub query_nb_hits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct LogsResponse {
    logs: Vec<LogEntry>,
}

/// Thin client for the `/1/logs` endpoint. One fetch per run, no retries;
/// any failure aborts before rendering starts.
pub struct LogsClient {
    http: reqwest::Client,
    app_id: String,
    api_key: String,
}

impl LogsClient {
    pub fn new(app_id: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            app_id,
            api_key,
        }
    }

    pub async fn fetch(
        &self,
        kind: LogKind,
        length: usize,
        offset: usize,
    ) -> anyhow::Result<Vec<LogEntry>> {
        let endpoint = format!("https://{}.algolia.net/1/logs", self.app_id);
        let response = self
            .http
            .get(&endpoint)
            .header("X-Algolia-Application-Id", &self.app_id)
            .header("X-Algolia-API-Key", &self.api_key)
            .query(&[
                ("offset", offset.to_string()),
                ("length", length.to_string()),
                ("type", kind.as_str().to_string()),
            ])
            .send()
            .await
            .context("failed to reach the logs endpoint")?
            .error_for_status()
            .context("logs endpoint rejected the request")?;

        let payload: LogsResponse = response
            .json()
            .await
            .context("failed to decode the logs payload")?;
        Ok(payload.logs)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
