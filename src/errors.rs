use thiserror::Error;

use crate::agent::{GatewayError, NotConfigured};
use crate::reference::ReferenceError;

/// Top-level application error.
/// Every variant's message is safe to show to the browser as-is.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Request validation ───────────────────────────────────────────────────
    #[error("{message}")]
    Validation { message: String },

    // ── Completion endpoint ──────────────────────────────────────────────────
    #[error("OpenAI API key not configured. Please add OPENAI_API_KEY environment variable.")]
    NotConfigured,

    #[error("Invalid OpenAI API key")]
    UpstreamAuth,

    #[error("Rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,

    #[error("Bad request to OpenAI API")]
    UpstreamBadRequest,

    #[error("Failed to {action}. Please try again.")]
    UpstreamUnavailable { action: &'static str },

    // ── Reference lookups ────────────────────────────────────────────────────
    #[error("No {source_name} entry found for '{term}'")]
    NotFound { source_name: &'static str, term: String },

    #[error("Failed to fetch {source_name} entry for '{term}'")]
    ReferenceUnavailable { source_name: &'static str, term: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation { message: message.into() }
    }

    /// Maps a gateway failure onto the HTTP-facing taxonomy. `action` names
    /// what the caller was trying to do, for the generic failure message.
    pub fn from_gateway(err: GatewayError, action: &'static str) -> Self {
        match err {
            GatewayError::Unauthorized => AppError::UpstreamAuth,
            GatewayError::RateLimited => AppError::UpstreamRateLimited,
            GatewayError::BadRequest => AppError::UpstreamBadRequest,
            GatewayError::Unavailable(_) => AppError::UpstreamUnavailable { action },
        }
    }

    pub fn from_reference(err: ReferenceError, source_name: &'static str, term: &str) -> Self {
        match err {
            ReferenceError::NotFound => AppError::NotFound { source_name, term: term.to_string() },
            ReferenceError::Request(_) | ReferenceError::Parse(_) => {
                AppError::ReferenceUnavailable { source_name, term: term.to_string() }
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. } | AppError::UpstreamBadRequest)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<NotConfigured> for AppError {
    fn from(_: NotConfigured) -> Self {
        AppError::NotConfigured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_keep_their_category() {
        assert!(matches!(
            AppError::from_gateway(GatewayError::Unauthorized, "chat"),
            AppError::UpstreamAuth
        ));
        assert!(matches!(
            AppError::from_gateway(GatewayError::RateLimited, "chat"),
            AppError::UpstreamRateLimited
        ));
        assert!(AppError::from_gateway(GatewayError::BadRequest, "chat").is_validation());
    }

    #[test]
    fn unavailable_names_the_action() {
        let err = AppError::from_gateway(
            GatewayError::Unavailable("connection reset".into()),
            "detect fallacies",
        );
        assert_eq!(err.to_string(), "Failed to detect fallacies. Please try again.");
    }

    #[test]
    fn reference_miss_is_not_found() {
        let err = AppError::from_reference(ReferenceError::NotFound, "Wikipedia", "qualia");
        assert!(err.is_not_found());
        let err = AppError::from_reference(ReferenceError::Request("timeout".into()), "SEP", "qualia");
        assert!(!err.is_not_found());
    }
}
