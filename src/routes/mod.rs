pub mod api_routes;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::api_routes::{
    analyze_chat_handler, chat_handler, detect_fallacies_handler, health_handler,
    method_not_allowed_handler, reference_handler, root_handler, sep_handler, steel_man_handler,
    wikipedia_handler, AppState,
};

/// Full route table with CORS and request tracing. When `static_dir` is set,
/// unmatched paths are served from it.
pub fn app(state: AppState, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/api/chat", post(chat_handler).fallback(method_not_allowed_handler))
        .route(
            "/api/detect-fallacies",
            post(detect_fallacies_handler).fallback(method_not_allowed_handler),
        )
        .route("/api/steel-man", post(steel_man_handler).fallback(method_not_allowed_handler))
        .route(
            "/api/analyze-chat",
            post(analyze_chat_handler).fallback(method_not_allowed_handler),
        )
        .route("/api/wikipedia/{term}", get(wikipedia_handler))
        .route("/api/sep/{term}", get(sep_handler))
        .route("/api/reference/{term}", get(reference_handler))
        .route("/api/health", get(health_handler));

    if let Some(dir) = static_dir {
        info!("Serving static files from {dir}");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
