//! Service banner, health, and operational status endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::json;
use tracing::warn;

use catchat_core::repository::archive::MessageArchive;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::{AppState, StorageBackend};

/// Paths listed in the service banner.
const BANNER_ENDPOINTS: &[&str] = &[
    "/api/health",
    "/api/status",
    "/api/auth/login",
    "/api/chats",
    "/api/ai/chat",
    "/api/deployment",
];

/// GET / - Service banner.
pub async fn root(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let data = json!({
        "message": format!("CatChat backend running on {}", state.config.platform_name),
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "platform": state.config.platform_name,
        "storage": state.storage,
        "uptime_secs": state.uptime_secs(),
        "endpoints": BANNER_ENDPOINTS,
    });

    Ok(Json(timer.finish(data).with_link("health", "/api/health")))
}

/// GET /api/health - Liveness plus in-memory counts.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let data = json!({
        "status": "healthy",
        "service": "CatChat Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": {
            "backend": state.storage,
            "connected": state.storage == StorageBackend::Sqlite,
        },
        "memory": {
            "users": state.users.count(),
            "messages": state.store.len(),
            "chats": state.store.chat_count(),
        },
        "runtime": {
            "environment": state.config.environment,
            "port": state.config.port,
            "on_platform": state.config.on_platform,
        },
    });

    Ok(Json(timer.finish(data).with_link("self", "/api/health")))
}

/// GET /api/status - Operational metrics and deployment identity.
pub async fn status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let archived = match &state.archive {
        Some(archive) => match archive.count_messages().await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(error = %e, "Failed to count archived messages");
                None
            }
        },
        None => None,
    };
    let limits = state.store.limits();

    let data = json!({
        "status": "operational",
        "metrics": {
            "uptime_secs": state.uptime_secs(),
            "messages": state.store.len(),
            "archived_messages": archived,
            "users": state.users.count(),
        },
        "limits": {
            "ceiling": limits.ceiling(),
            "floor": limits.floor(),
        },
        "assistant": {
            "provider": state.assistant.provider_name(),
        },
        "deployment": {
            "platform": state.config.platform_name,
            "region": state.deployment.region(),
            "service_id": state.deployment.service_id(),
        },
    });

    Ok(Json(timer.finish(data).with_link("self", "/api/status")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::http::router::build_router;
    use crate::http::router::tests::send;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_root_banner() {
        let state = test_state(&[]).await;
        let (status, json) = send(build_router(state), "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "online");
        assert_eq!(json["data"]["storage"], "memory");
        assert_eq!(json["data"]["environment"], "test");
        assert!(json["data"]["endpoints"].is_array());
    }

    #[tokio::test]
    async fn test_health_counts() {
        let state = test_state(&[]).await;
        let (status, json) = send(build_router(state), "GET", "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "healthy");
        assert_eq!(json["data"]["storage"]["connected"], false);
        assert_eq!(json["data"]["memory"]["users"], 1);
        assert_eq!(json["data"]["memory"]["messages"], 3);
        assert_eq!(json["data"]["memory"]["chats"], 2);
    }

    #[tokio::test]
    async fn test_status_reports_limits() {
        let state = test_state(&["--max-messages", "20", "--retain-messages", "10"]).await;
        let (status, json) = send(build_router(state), "GET", "/api/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "operational");
        assert_eq!(json["data"]["limits"]["ceiling"], 20);
        assert_eq!(json["data"]["limits"]["floor"], 10);
        assert!(json["data"]["metrics"]["archived_messages"].is_null());
        assert!(json["data"]["assistant"]["provider"].is_null());
        assert_eq!(json["data"]["deployment"]["region"], "unknown");
    }
}
