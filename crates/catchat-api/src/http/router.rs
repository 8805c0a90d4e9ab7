//! Axum router configuration with middleware.
//!
//! Routes live under `/api/`, plus a service banner at `/`.
//! Middleware: CORS, request tracing. Unmatched paths get an envelope 404.

use axum::Router;
use axum::http::{Method, Uri};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Health and status
        .route("/health", get(handlers::health::health))
        .route("/status", get(handlers::health::status))
        // Demo auth
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        // Chats
        .route("/chats", get(handlers::chat::list_chats))
        .route("/chats/{chat_id}", get(handlers::chat::get_chat))
        .route("/chats/{chat_id}/messages", post(handlers::chat::post_message))
        // Assistant
        .route("/ai/chat", post(handlers::ai::chat))
        // Settings
        .route(
            "/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        // Deployment metadata
        .route("/deployment", get(handlers::deployment::get_deployment));

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::state::tests::test_state;

    /// Send one request through a fresh router and decode the JSON body.
    pub(crate) async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_unknown_route_returns_envelope_404() {
        let router = build_router(test_state(&[]).await);
        let (status, json) = send(router, "GET", "/api/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["errors"][0]["code"], "NOT_FOUND");
        assert_eq!(json["errors"][0]["details"]["path"], "/api/nope");
        assert_eq!(json["errors"][0]["details"]["method"], "GET");
        assert!(json["errors"][0]["details"]["available_endpoints"].is_array());
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let router = build_router(test_state(&[]).await);
        let request = Request::builder()
            .uri("/api/health")
            .header("origin", "https://cat-chat.example")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
