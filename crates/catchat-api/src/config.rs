//! Deployment metadata read from the hosting platform's environment.

use serde::Serialize;

/// Service name used when the platform does not report one.
pub const DEFAULT_SERVICE_NAME: &str = "catchat-backend";

/// What the hosting platform tells us about this deployment.
///
/// Every field is optional; local runs leave them all unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub service_name: Option<String>,
    pub region: Option<String>,
    pub service_id: Option<String>,
    pub deployment_id: Option<String>,
    pub static_url: Option<String>,
    pub github_repo: Option<String>,
}

impl DeploymentInfo {
    /// Read the `RAILWAY_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            service_name: get("RAILWAY_SERVICE_NAME"),
            region: get("RAILWAY_REGION"),
            service_id: get("RAILWAY_SERVICE_ID"),
            deployment_id: get("RAILWAY_DEPLOYMENT_ID"),
            static_url: get("RAILWAY_STATIC_URL"),
            github_repo: get("RAILWAY_GITHUB_REPO"),
        }
    }

    pub fn service(&self) -> &str {
        self.service_name.as_deref().unwrap_or(DEFAULT_SERVICE_NAME)
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("unknown")
    }

    pub fn service_id(&self) -> &str {
        self.service_id.as_deref().unwrap_or("local")
    }

    pub fn deployment_id(&self) -> &str {
        self.deployment_id.as_deref().unwrap_or("latest")
    }

    pub fn github(&self) -> &str {
        self.github_repo.as_deref().unwrap_or("Not connected")
    }

    /// Public base URL: the platform's static URL, or one derived from the service name.
    pub fn public_url(&self) -> String {
        match &self.static_url {
            Some(url) if url.starts_with("http") => url.clone(),
            Some(host) => format!("https://{host}"),
            None => format!("https://{}.railway.app", self.service()),
        }
    }
}
