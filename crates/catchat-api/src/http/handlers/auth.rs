//! Demo authentication endpoints. Any credentials are accepted.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catchat_types::user::{LoginGrant, UserProfile};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for registration. Every field is optional; the password is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Issued session: the user, an opaque token, and which backend issued it.
#[derive(Debug, Serialize)]
pub struct AuthSession {
    pub user: UserProfile,
    pub token: String,
    pub backend: String,
    pub url: String,
}

impl AuthSession {
    fn new(grant: LoginGrant, state: &AppState) -> Self {
        Self {
            user: grant.user,
            token: grant.token,
            backend: state.config.platform_name.clone(),
            url: state.deployment.public_url(),
        }
    }
}

/// POST /api/auth/register - Create a demo user.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let timer = RequestTimer::start();

    let grant = state.users.register(body.username, body.email);

    Ok(Json(timer.finish(AuthSession::new(grant, &state))))
}

/// POST /api/auth/login - Log in as the first demo user, whatever the credentials.
pub async fn login(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let timer = RequestTimer::start();

    let grant = state.users.login();

    Ok(Json(timer.finish(AuthSession::new(grant, &state))))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use catchat_core::auth::TOKEN_PREFIX;

    use crate::http::router::build_router;
    use crate::http::router::tests::send;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_login_accepts_any_credentials() {
        let state = test_state(&[]).await;
        let (status, json) = send(
            build_router(state),
            "POST",
            "/api/auth/login",
            Some(json!({"username": "anyone", "password": "wrong"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["user"]["id"], 1);
        assert!(json["data"]["token"].as_str().unwrap().starts_with(TOKEN_PREFIX));
        assert_eq!(json["data"]["backend"], "Railway");
    }

    #[tokio::test]
    async fn test_register_appends_user() {
        let state = test_state(&[]).await;
        let (status, json) = send(
            build_router(state.clone()),
            "POST",
            "/api/auth/register",
            Some(json!({"username": "whiskers", "password": "ignored"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["user"]["username"], "whiskers");
        assert_eq!(json["data"]["user"]["displayName"], "whiskers");
        assert_eq!(json["data"]["user"]["settings"]["notifications"], true);
        assert_eq!(state.users.count(), 2);
    }
}
