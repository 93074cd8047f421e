/// Best-effort client for the remote analytics table.
///
/// Each finished quiz is appended as one JSON row via `POST {endpoint}`. The request is made
/// exactly once: failures are logged and dropped, never retried, and never reach the visitor.
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::CommonError;

const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

#[derive(Clone, Debug)]
pub struct AnalyticsClientConfig {
    /// Full URL of the table endpoint, e.g. `https://db.example/rest/v1/team_dna_results`.
    /// `None` disables recording.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl AnalyticsClientConfig {
    /// Optional:
    /// - `TEAM_DNA_ANALYTICS_URL`
    /// - `TEAM_DNA_ANALYTICS_KEY`
    /// - `TEAM_DNA_ANALYTICS_TIMEOUT_SECS` (default: 5)
    pub fn from_env() -> Self {
        let endpoint = std::env::var("TEAM_DNA_ANALYTICS_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let api_key = std::env::var("TEAM_DNA_ANALYTICS_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout = std::env::var("TEAM_DNA_ANALYTICS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(5));

        Self {
            endpoint,
            api_key,
            timeout,
        }
    }

    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone)]
pub struct AnalyticsClient {
    config: AnalyticsClientConfig,
    http: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(config: AnalyticsClientConfig) -> Result<Self, CommonError> {
        let http = reqwest::Client::builder()
            .user_agent("team-dna/analytics")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.endpoint.is_some()
    }

    /// Append one row. Single attempt, no retry.
    pub async fn insert_row<T: Serialize + ?Sized>(&self, row: &T) -> Result<(), CommonError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or(CommonError::AnalyticsDisabled)?;
        let body = serde_json::to_value(row)?;

        let mut request = self
            .http
            .post(endpoint)
            .timeout(self.config.timeout)
            .header("Prefer", "return=minimal")
            .json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let resp = request.send().await?;
        if resp.status().is_success() {
            return Ok(());
        }

        let status = resp.status();
        let body = read_limited_text(resp, MAX_ERROR_BODY_BYTES).await;
        Err(CommonError::AnalyticsRejected { status, body })
    }

    /// Fire-and-forget variant of [`insert_row`](Self::insert_row).
    ///
    /// Returns `None` when recording is disabled or the row cannot be serialized; otherwise
    /// the handle of the spawned task, which never fails.
    pub fn record_detached<T: Serialize + ?Sized>(&self, row: &T) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            debug!("analytics disabled, skipping row");
            return None;
        }
        let body = serde_json::to_value(row)
            .inspect_err(|e| warn!(error = %e, "analytics row serialization failed"))
            .ok()?;

        let client = self.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = client.insert_row(&body).await {
                warn!(error = %e, "analytics insert failed, continuing without it");
            }
        }))
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read analytics error body");
            "<failed to read error body>".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> AnalyticsClient {
        AnalyticsClient::new(AnalyticsClientConfig {
            endpoint: Some(format!("{}/rest/v1/team_dna_results", server.uri())),
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(2),
        })
        .expect("client builds")
    }

    #[tokio::test]
    async fn insert_row_posts_json_with_key_headers() {
        let server = MockServer::start().await;
        let row = json!({ "session_id": "abc", "top_categories": ["adventure"] });

        Mock::given(method("POST"))
            .and(path("/rest/v1/team_dna_results"))
            .and(header("apikey", "secret"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(&row))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret"));
        client.insert_row(&row).await.expect("row accepted");
    }

    #[tokio::test]
    async fn insert_row_surfaces_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client.insert_row(&json!({})).await.unwrap_err();
        match err {
            CommonError::AnalyticsRejected { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn detached_record_swallows_failures_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let handle = client
            .record_detached(&json!({ "session_id": "abc" }))
            .expect("task spawned");
        handle.await.expect("task never panics");
    }

    #[tokio::test]
    async fn disabled_client_skips_recording() {
        let client = AnalyticsClient::new(AnalyticsClientConfig::disabled()).unwrap();
        assert!(!client.is_enabled());
        assert!(client.record_detached(&json!({})).is_none());
        assert!(matches!(
            client.insert_row(&json!({})).await,
            Err(CommonError::AnalyticsDisabled)
        ));
    }
}
