use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::agent::prompts::{
    compose_system_instruction, fallacy_probe, strengthening_probe, CHAT_ANALYSIS_PROMPT,
    FALLACY_DETECTION_PROMPT, STRENGTHENING_PROMPT,
};
use crate::agent::{
    CompletionGateway, NotConfigured, SamplingParams, CHAT_ANALYSIS_PARAMS, CHAT_PARAMS,
    FALLACY_PARAMS, STRENGTHENING_PARAMS,
};
use crate::errors::AppError;
use crate::models::{
    ChatAnalysis, ChatMessage, ChatReply, ChatRequest, FallacyReport, ImprovementReport,
};

const MAX_MESSAGE_LENGTH: usize = 8000;

/// Relays chat turns and analyzer probes to the completion gateway.
#[derive(Clone)]
pub struct DebateService {
    gateway: Result<Arc<dyn CompletionGateway>, NotConfigured>,
}

impl DebateService {
    pub fn new(gateway: Result<Arc<dyn CompletionGateway>, NotConfigured>) -> Self {
        Self { gateway }
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_ok()
    }

    fn gateway(&self) -> Result<&dyn CompletionGateway, AppError> {
        self.gateway.as_deref().map_err(|e| AppError::from(*e))
    }

    /// One debate turn: picks the system instruction from the request's mode
    /// and replays the whole transcript.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply, AppError> {
        let mode = request.mode();
        let messages = validate_transcript(request.messages)?;
        let gateway = self.gateway()?;

        let instruction = compose_system_instruction(&mode);
        debug!(
            "Chat turn: {} messages, style '{}', steel-manning {}, strengthening {}, debate mode {}",
            messages.len(),
            mode.debate_style.as_str(),
            mode.steel_manning_enabled,
            mode.is_in_strengthening_phase,
            mode.is_debate_mode
        );

        let message = gateway
            .complete(&instruction, &messages, CHAT_PARAMS)
            .await
            .map_err(|e| AppError::from_gateway(e, "get response from AI"))?;
        Ok(ChatReply { message })
    }

    pub async fn detect_fallacies(
        &self,
        user_message: Option<String>,
    ) -> Result<FallacyReport, AppError> {
        let utterance = validate_utterance(user_message)?;
        let raw = self
            .probe(FALLACY_DETECTION_PROMPT, fallacy_probe(&utterance), FALLACY_PARAMS, "detect fallacies")
            .await?;
        Ok(parse_model_json(&raw, "fallacy detection"))
    }

    pub async fn steel_man(
        &self,
        user_message: Option<String>,
    ) -> Result<ImprovementReport, AppError> {
        let utterance = validate_utterance(user_message)?;
        let raw = self
            .probe(
                STRENGTHENING_PROMPT,
                strengthening_probe(&utterance),
                STRENGTHENING_PARAMS,
                "analyze argument",
            )
            .await?;
        Ok(parse_model_json(&raw, "steel manning"))
    }

    pub async fn analyze_chat(
        &self,
        messages: Option<Vec<ChatMessage>>,
    ) -> Result<ChatAnalysis, AppError> {
        let messages = messages
            .ok_or_else(|| AppError::validation("Messages array is required"))?;
        self.gateway()?;
        if messages.is_empty() {
            return Ok(ChatAnalysis::default());
        }

        let conversation = flatten_transcript(&messages);
        let raw = self
            .probe(CHAT_ANALYSIS_PROMPT, conversation, CHAT_ANALYSIS_PARAMS, "analyze chat content")
            .await?;
        Ok(parse_model_json(&raw, "chat analysis"))
    }

    /// Single-turn call used by the analyzers.
    async fn probe(
        &self,
        instruction: &str,
        user_turn: String,
        params: SamplingParams,
        action: &'static str,
    ) -> Result<String, AppError> {
        self.gateway()?
            .complete(instruction, &[ChatMessage::user(user_turn)], params)
            .await
            .map_err(|e| AppError::from_gateway(e, action))
    }
}

fn validate_transcript(messages: Option<Vec<ChatMessage>>) -> Result<Vec<ChatMessage>, AppError> {
    let messages = messages.ok_or_else(|| AppError::validation("Messages array is required"))?;
    if messages.is_empty() {
        return Err(AppError::validation("Messages array must not be empty"));
    }
    if let Some(long) = messages.iter().find(|m| m.text.len() > MAX_MESSAGE_LENGTH) {
        return Err(AppError::validation(format!(
            "Message exceeds max length of {MAX_MESSAGE_LENGTH} (actual: {})",
            long.text.len()
        )));
    }
    Ok(messages)
}

fn validate_utterance(user_message: Option<String>) -> Result<String, AppError> {
    match user_message {
        Some(text) if !text.trim().is_empty() => {
            if text.len() > MAX_MESSAGE_LENGTH {
                return Err(AppError::validation(format!(
                    "User message exceeds max length of {MAX_MESSAGE_LENGTH} (actual: {})",
                    text.len()
                )));
            }
            Ok(text)
        }
        _ => Err(AppError::validation("User message is required")),
    }
}

/// `sender: text` lines, one per transcript entry.
pub fn flatten_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.sender, m.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a JSON reply from the model. The model does not always honour the
/// output contract, so a malformed reply becomes the empty report.
pub fn parse_model_json<T: DeserializeOwned + Default>(raw: &str, what: &str) -> T {
    let body = strip_code_fence(raw);
    match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Failed to parse {what} result, using empty result: {e}");
            T::default()
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
