use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::errors::AppError;
use crate::models::{
    AnalyzeChatRequest, AnalyzerRequest, ChatRequest, ErrorBody, HealthResponse, PreferredSource,
    ReferenceQuery,
};
use crate::reference::ReferenceService;
use crate::service::debate_service::DebateService;

#[derive(Clone)]
pub struct AppState {
    pub debate: DebateService,
    pub reference: ReferenceService,
}

// ── Completion endpoints ──────────────────────────────────────────────────────

/// POST `/api/chat`: one debate turn.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection, "Messages array is required"),
    };
    respond(state.debate.chat(request).await)
}

/// POST `/api/detect-fallacies`
pub async fn detect_fallacies_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzerRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection, "User message is required"),
    };
    respond(state.debate.detect_fallacies(request.user_message).await)
}

/// POST `/api/steel-man`
pub async fn steel_man_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzerRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection, "User message is required"),
    };
    respond(state.debate.steel_man(request.user_message).await)
}

/// POST `/api/analyze-chat`
pub async fn analyze_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection, "Messages array is required"),
    };
    respond(state.debate.analyze_chat(request.messages).await)
}

// ── Reference endpoints ───────────────────────────────────────────────────────

/// GET `/api/wikipedia/{term}`
pub async fn wikipedia_handler(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Response {
    respond(state.reference.fetch_direct(PreferredSource::Wikipedia, &term).await)
}

/// GET `/api/sep/{term}`
pub async fn sep_handler(State(state): State<AppState>, Path(term): Path<String>) -> Response {
    respond(state.reference.fetch_direct(PreferredSource::Sep, &term).await)
}

/// GET `/api/reference/{term}?source=wikipedia|sep`: full lookup with
/// variations and the local fallback.
pub async fn reference_handler(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<ReferenceQuery>,
) -> Response {
    if term.trim().is_empty() {
        return error_response(&AppError::validation("Term is required"));
    }
    Json(state.reference.lookup(&term, query.source).await).into_response()
}

// ── Service info ──────────────────────────────────────────────────────────────

/// GET `/api/health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Sophron-Bot server is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        has_api_key: state.debate.is_configured(),
    })
}

/// GET `/`
pub async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Sophron-Bot API",
        "endpoints": [
            "POST /api/chat",
            "POST /api/detect-fallacies",
            "POST /api/steel-man",
            "POST /api/analyze-chat",
            "GET /api/wikipedia/{term}",
            "GET /api/sep/{term}",
            "GET /api/reference/{term}?source=wikipedia|sep",
            "GET /api/health",
        ],
    }))
}

/// Fallback for known paths hit with the wrong method.
pub async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody { error: "Method not allowed".to_string() }),
    )
        .into_response()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn respond<T: serde::Serialize>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Unreadable bodies are reported the same way as a missing field.
fn rejected(rejection: JsonRejection, message: &str) -> Response {
    debug!("Rejected request body: {rejection}");
    error_response(&AppError::validation(message))
}

fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::UpstreamAuth => StatusCode::UNAUTHORIZED,
        AppError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
        _ if err.is_validation() => StatusCode::BAD_REQUEST,
        _ if err.is_not_found() => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &AppError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        error!("Request failed: {err}");
    } else {
        warn!("Request rejected ({status}): {err}");
    }
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
