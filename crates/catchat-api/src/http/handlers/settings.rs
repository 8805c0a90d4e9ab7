//! Settings endpoints. Settings are not persisted; updates are echoed back.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use catchat_types::llm::Personality;
use catchat_types::user::UserSettings;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/settings - Default settings document.
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let data = json!({
        "theme": "dark",
        "aiPersonality": Personality::default(),
        "personalities": Personality::ALL,
        "user": UserSettings::default(),
        "features": {
            "realTime": true,
            "aiAssistant": true,
            "archive": state.archive.is_some(),
        },
        "deployment": {
            "platform": state.config.platform_name,
            "url": state.deployment.public_url(),
            "serviceId": state.deployment.service_id,
            "region": state.deployment.region(),
            "environment": state.config.environment,
        },
    });

    Ok(Json(timer.finish(data).with_link("self", "/api/settings")))
}

/// PUT /api/settings - Echo the submitted settings with an update timestamp.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(updates): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let data = json!({
        "settings": updates,
        "updatedAt": chrono::Utc::now().to_rfc3339(),
        "deployedOn": state.config.platform_name,
    });

    Ok(Json(timer.finish(data).with_link("self", "/api/settings")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::router::build_router;
    use crate::http::router::tests::send;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_default_settings() {
        let state = test_state(&[]).await;
        let (status, json) = send(build_router(state), "GET", "/api/settings", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["theme"], "dark");
        assert_eq!(json["data"]["aiPersonality"], "default");
        assert_eq!(json["data"]["personalities"].as_array().unwrap().len(), 5);
        assert_eq!(json["data"]["features"]["archive"], false);
    }

    #[tokio::test]
    async fn test_update_echoes_body() {
        let state = test_state(&[]).await;
        let (status, json) = send(
            build_router(state),
            "PUT",
            "/api/settings",
            Some(json!({"theme": "light", "haptics": false})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["settings"]["theme"], "light");
        assert_eq!(json["data"]["settings"]["haptics"], false);
        assert!(json["data"]["updatedAt"].is_string());
    }
}
