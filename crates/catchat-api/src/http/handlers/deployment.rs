//! Deployment metadata endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/deployment - What the hosting platform reports about this deployment.
pub async fn get_deployment(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let timer = RequestTimer::start();

    let deployment = &state.deployment;
    let url = deployment.public_url();
    let data = json!({
        "platform": state.config.platform_name,
        "service": deployment.service(),
        "environment": state.config.environment,
        "region": deployment.region(),
        "serviceId": deployment.service_id,
        "deploymentId": deployment.deployment_id,
        "github": deployment.github(),
        "health": format!("{url}/api/health"),
        "url": url,
    });

    Ok(Json(timer.finish(data).with_link("self", "/api/deployment")))
}
