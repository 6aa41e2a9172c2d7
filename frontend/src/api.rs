use std::fmt;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AnalyzeChatRequest, AnalyzerRequest, ChatAnalysis, ChatMessage, ChatReply, ChatRequest,
    ErrorBody, FallacyReport, ImprovementReport, ReferenceRecord, SourceKind,
};
use crate::orchestrator::DebateApi;

/// Base URL of the relay server.
const API_BASE: &str = "http://localhost:3001";

const UNREACHABLE: &str = "Unable to connect to the server. Please make sure the server is running.";
const GENERIC_FAILURE: &str = "Failed to get response from AI";

/// A failed relay call. `Display` is the sentence shown in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never got an HTTP response.
    Unreachable,
    /// The relay answered with a non-2xx status.
    Status { status: u16, message: String },
    /// The request could not be encoded or a 2xx body could not be read.
    Decode,
}

impl ApiError {
    /// Builds the error from a non-2xx status and the relay's `{error}` body,
    /// when one could be read.
    pub fn from_status(status: u16, error: Option<String>) -> Self {
        let message = error.filter(|e| !e.trim().is_empty()).unwrap_or_else(|| {
            match status {
                401 => "Invalid OpenAI API key",
                429 => "Rate limit exceeded. Please try again later.",
                _ => GENERIC_FAILURE,
            }
            .to_string()
        });
        ApiError::Status { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unreachable => f.write_str(UNREACHABLE),
            ApiError::Status { message, .. } => f.write_str(message),
            ApiError::Decode => f.write_str(GENERIC_FAILURE),
        }
    }
}

impl std::error::Error for ApiError {}

// ── Transport ─────────────────────────────────────────────────────────────────

async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let error = resp.json::<ErrorBody>().await.ok().map(|b| b.error);
        return Err(ApiError::from_status(resp.status(), error));
    }
    resp.json::<T>().await.map_err(|e| {
        log::error!("Unreadable response from {}: {e}", resp.url());
        ApiError::Decode
    })
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = Request::post(&format!("{API_BASE}{path}"))
        .json(body)
        .map_err(|e| {
            log::error!("Could not encode body for {path}: {e}");
            ApiError::Decode
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {path} failed: {e}");
            ApiError::Unreachable
        })?;
    read(resp).await
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = Request::get(url).send().await.map_err(|e| {
        log::error!("GET {url} failed: {e}");
        ApiError::Unreachable
    })?;
    read(resp).await
}

// ── Relay endpoints ───────────────────────────────────────────────────────────

/// The relay over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpDebateApi;

impl DebateApi for HttpDebateApi {
    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        post::<_, ChatReply>("/api/chat", request).await.map(|r| r.message)
    }

    async fn detect_fallacies(&self, utterance: &str) -> Result<FallacyReport, ApiError> {
        post("/api/detect-fallacies", &AnalyzerRequest { user_message: utterance }).await
    }

    async fn steel_man(&self, utterance: &str) -> Result<ImprovementReport, ApiError> {
        post("/api/steel-man", &AnalyzerRequest { user_message: utterance }).await
    }
}

/// Concepts, philosophers and schools mentioned so far.
pub async fn analyze_chat(messages: Vec<ChatMessage>) -> Result<ChatAnalysis, ApiError> {
    post("/api/analyze-chat", &AnalyzeChatRequest { messages }).await
}

/// Full reference lookup; the relay falls back to a local entry, so this only
/// fails on transport errors.
pub async fn lookup_reference(term: &str, preferred: SourceKind) -> Result<ReferenceRecord, ApiError> {
    let source = match preferred {
        SourceKind::Sep => "sep",
        SourceKind::Wikipedia | SourceKind::Fallback => "wikipedia",
    };
    let term = String::from(js_sys::encode_uri_component(term));
    get(&format!("{API_BASE}/api/reference/{term}?source={source}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_relay_message() {
        let err = ApiError::from_status(500, Some("Failed to get response from AI. Please try again.".into()));
        assert_eq!(err.to_string(), "Failed to get response from AI. Please try again.");
    }

    #[test]
    fn status_error_without_body_uses_plain_language() {
        let err = ApiError::from_status(429, None);
        assert!(matches!(err, ApiError::Status { status: 429, .. }));
        assert_eq!(err.to_string(), "Rate limit exceeded. Please try again later.");

        assert_eq!(ApiError::from_status(502, Some(" ".into())).to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn unreachable_server_message() {
        assert_eq!(ApiError::Unreachable.to_string(), UNREACHABLE);
    }
}
