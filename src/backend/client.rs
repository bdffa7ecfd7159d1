//! Async HTTP client for the assistant backend

use std::time::Duration;

use reqwest::{RequestBuilder, Url};
use tokio_util::sync::CancellationToken;

use super::BackendError;
use super::types::{AskRequest, AskResponse, Stop};
use crate::config::ServerConfig;
use crate::error::StopChatError;
use crate::session::SessionId;

const ASK_PATH: &str = "ask";
const SEARCH_STOPS_PATH: &str = "search_stops/";

/// Backend HTTP client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a client from the `[server]` config section
    pub fn from_config(config: &ServerConfig) -> Result<Self, StopChatError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StopChatError> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StopChatError::HttpClient(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ask the assistant a question within a session
    ///
    /// Returns the raw markdown answer.
    pub async fn ask(&self, query: &str, session_id: &SessionId) -> Result<String, BackendError> {
        let url = self.endpoint(ASK_PATH)?;
        let body = AskRequest {
            query,
            session_id: session_id.as_str(),
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let text = read_success_body(response).await?;
        let parsed: AskResponse =
            serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(parsed.gpt_answer)
    }

    /// Search stops whose name matches `query`, in backend order
    ///
    /// Returns `BackendError::Cancelled` as soon as `cancel_token` fires, whether
    /// before the request is sent or while waiting for the response.
    pub async fn search_stops(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<Stop>, BackendError> {
        if cancel_token.is_cancelled() {
            return Err(BackendError::Cancelled);
        }

        let url = self.endpoint(SEARCH_STOPS_PATH)?;
        let request = self.http.get(url).query(&[("query", query)]);

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(BackendError::Cancelled),
            result = fetch_stops(request) => result,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Network(format!("Invalid endpoint {}: {}", path, e)))
    }
}

async fn fetch_stops(request: RequestBuilder) -> Result<Vec<Stop>, BackendError> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let text = read_success_body(response).await?;
    serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))
}

async fn read_success_body(response: reqwest::Response) -> Result<String, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(BackendError::Api {
            code: status.as_u16(),
            message,
        });
    }

    response.text().await.map_err(map_reqwest_error)
}

fn map_reqwest_error(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::Parse(e.to_string())
    } else {
        BackendError::Network(e.to_string())
    }
}

/// Parse and normalize the configured base URL
///
/// The path always ends with `/` so that endpoint joins append rather than
/// replace the last segment (`http://host/app` + `ask` -> `http://host/app/ask`).
fn parse_base_url(raw: &str) -> Result<Url, StopChatError> {
    let invalid = |reason: String| StopChatError::InvalidServerUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
