pub mod prompts;

use async_trait::async_trait;
use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::prelude::CompletionClient;
use rig::providers::openai;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;
use crate::models::{ChatMessage, Sender};

pub const MODEL: &str = "gpt-4o-mini-2024-07-18";

/// Sampling parameters for one call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u64,
}

pub const CHAT_PARAMS: SamplingParams = SamplingParams { temperature: 0.7, max_tokens: 1000 };
pub const FALLACY_PARAMS: SamplingParams = SamplingParams { temperature: 0.1, max_tokens: 500 };
pub const STRENGTHENING_PARAMS: SamplingParams = SamplingParams { temperature: 0.2, max_tokens: 600 };
pub const CHAT_ANALYSIS_PARAMS: SamplingParams = SamplingParams { temperature: 0.3, max_tokens: 1000 };

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("completion endpoint rejected the credentials")]
    Unauthorized,

    #[error("completion endpoint is rate limiting requests")]
    RateLimited,

    #[error("completion endpoint rejected the request")]
    BadRequest,

    #[error("completion endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Raised once at startup when no API key is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("completion endpoint is not configured (OPENAI_API_KEY missing)")]
pub struct NotConfigured;

/// A single outbound completion call: system instruction plus transcript in,
/// text out.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        transcript: &[ChatMessage],
        params: SamplingParams,
    ) -> Result<String, GatewayError>;
}

/// Maps a browser transcript onto rig messages, `bot` becoming `assistant`.
fn to_rig_history(transcript: &[ChatMessage]) -> Vec<RigMessage> {
    transcript
        .iter()
        .map(|m| match m.sender {
            Sender::User => RigMessage::user(&m.text),
            Sender::Bot => RigMessage::assistant(&m.text),
        })
        .collect()
}

const UNAUTHORIZED_CODES: [&str; 2] = ["invalid_api_key", "invalid_organization"];
const RATE_LIMIT_CODES: [&str; 2] = ["rate_limit_exceeded", "insufficient_quota"];
const NOT_FOUND_CODES: [&str; 2] = ["model_not_found", "unknown_url"];

/// Sorts a provider failure into the gateway taxonomy. rig passes the OpenAI
/// error body through as text and drops the status code, so the body is the
/// primary signal; transport errors fall back to their reported status.
pub fn classify_failure(detail: &str) -> GatewayError {
    if let Some(body) = provider_error_body(detail) {
        return classify_provider_error(&body, detail);
    }

    match reported_status(detail) {
        Some(401) => return GatewayError::Unauthorized,
        Some(429) => return GatewayError::RateLimited,
        Some(400) => return GatewayError::BadRequest,
        _ => {}
    }

    if detail.trim_start().starts_with("HttpError") {
        let lower = detail.to_lowercase();
        if lower.contains("unauthorized") {
            return GatewayError::Unauthorized;
        }
        if lower.contains("too many requests") {
            return GatewayError::RateLimited;
        }
    }

    GatewayError::Unavailable(detail.to_string())
}

/// The `{"error": {...}}` object embedded in a provider error, if any.
fn provider_error_body(detail: &str) -> Option<serde_json::Value> {
    let start = detail.find('{')?;
    let value = serde_json::Deserializer::from_str(&detail[start..])
        .into_iter::<serde_json::Value>()
        .next()?
        .ok()?;
    value.get("error").filter(|e| e.is_object()).cloned()
}

fn classify_provider_error(body: &serde_json::Value, detail: &str) -> GatewayError {
    let field = |name: &str| body.get(name).and_then(|v| v.as_str()).unwrap_or_default();
    let code = field("code");
    let kind = field("type");
    let is = |codes: &[&str]| codes.contains(&code) || codes.contains(&kind);

    if is(&UNAUTHORIZED_CODES[..]) || kind == "authentication_error" {
        GatewayError::Unauthorized
    } else if is(&RATE_LIMIT_CODES[..]) {
        GatewayError::RateLimited
    } else if is(&NOT_FOUND_CODES[..]) {
        GatewayError::Unavailable(detail.to_string())
    } else if kind == "invalid_request_error" {
        GatewayError::BadRequest
    } else {
        GatewayError::Unavailable(detail.to_string())
    }
}

/// Status from rig's `Invalid status code NNN` transport message.
fn reported_status(detail: &str) -> Option<u16> {
    const MARKER: &str = "invalid status code ";
    let lower = detail.to_lowercase();
    let rest = &lower[lower.find(MARKER)? + MARKER.len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Completion gateway backed by the rig OpenAI provider.
/// A fresh agent is built per call so the system instruction and sampling
/// parameters can differ between call sites.
#[derive(Clone)]
pub struct OpenAiGateway {
    client: openai::Client,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, GatewayError> {
        let client = openai::Client::builder()
            .api_key(api_key)
            .base_url(base_url)
            .build()
            .map_err(|e| GatewayError::Unavailable(format!("failed to build OpenAI client: {e}")))?;
        Ok(Self { client, model: MODEL.to_string() })
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        system_instruction: &str,
        transcript: &[ChatMessage],
        params: SamplingParams,
    ) -> Result<String, GatewayError> {
        let mut history = to_rig_history(transcript);
        let Some(prompt) = history.pop() else {
            return Err(GatewayError::BadRequest);
        };

        let agent = self
            .client
            .agent(&self.model)
            .preamble(system_instruction)
            .temperature(params.temperature)
            .max_tokens(params.max_tokens)
            .build();

        debug!(
            "Calling {} with {} prior turns (temperature {}, max_tokens {})",
            self.model,
            history.len(),
            params.temperature,
            params.max_tokens
        );

        agent.chat(prompt, history).await.map_err(|e| {
            error!("OpenAI completion failed: {e}");
            classify_failure(&e.to_string())
        })
    }
}

/// Builds the gateway once at startup. A missing key is not fatal: the
/// server runs and every model-backed endpoint reports [`NotConfigured`].
pub fn configure(config: &Config) -> Result<OpenAiGateway, NotConfigured> {
    let api_key = config.openai_api_key.as_deref().ok_or(NotConfigured)?;
    OpenAiGateway::new(api_key, &config.openai_base_url).map_err(|e| {
        error!("OpenAI client could not be constructed: {e}");
        NotConfigured
    })
}
