//! Answer-service capability and its HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reply of the answering service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, rename = "contextItems", alias = "context_items")]
    pub context_items: Option<Vec<String>>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

impl AnswerResponse {
    pub fn answer(text: impl Into<String>) -> Self {
        Self { answer: Some(text.into()), ..Self::default() }
    }

    pub fn with_context(mut self, items: Vec<String>) -> Self {
        self.context_items = Some(items);
        self
    }
}

/// Errors from the answering service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Remote capability that answers a free-text question
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, ServiceError>;
}

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct HealthBody {
    status: Option<String>,
}

/// Answering service reached over HTTP
///
/// `POST {base}/ask` with `{"question": ...}`; the health check is `GET {base}/`.
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAnswerService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("askwhy/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url)
    }

    /// Query the service's health endpoint and return its status text
    pub async fn health(&self) -> Result<String, ServiceError> {
        let response = self.http.get(format!("{}/", self.base_url)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let health: HealthBody =
            serde_json::from_str(&body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
        Ok(health.status.unwrap_or_else(|| "unknown".to_string()))
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, ServiceError> {
        debug!(url = %self.ask_url(), "Sending question");
        let response = self.http.post(self.ask_url()).json(&AskRequest { question }).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_answer(&body)
    }
}

/// Decode a successful reply body
pub fn parse_answer(body: &str) -> Result<AnswerResponse, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))
}

/// Pull the `"error"` field out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.trim().to_string())
}
