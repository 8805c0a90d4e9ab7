//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances the REST handlers share.
//! Optional collaborators (database archive, AI provider) are resolved once
//! here at startup; handlers only ever see the outcome.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use catchat_core::auth::UserDirectory;
use catchat_core::llm::assistant::AssistantService;
use catchat_core::store::{MessageStore, StoreLimits};
use catchat_infra::llm::create_provider;
use catchat_infra::sqlite::archive::SqliteMessageArchive;
use catchat_infra::sqlite::pool::DatabasePool;

use crate::cli::ServeArgs;
use crate::config::DeploymentInfo;

/// Where accepted messages end up besides the in-memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Messages are also archived to SQLite.
    Sqlite,
    /// In-memory store only.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MessageStore>,
    pub users: Arc<UserDirectory>,
    pub assistant: Arc<AssistantService>,
    pub archive: Option<Arc<SqliteMessageArchive>>,
    pub storage: StorageBackend,
    pub config: Arc<ServeArgs>,
    pub deployment: Arc<DeploymentInfo>,
    pub started_at: Instant,
}

impl AppState {
    /// Initialize the application state: build the store, resolve collaborators.
    ///
    /// Fails only on invalid store limits. An unreachable database or a
    /// missing API key degrades to memory-only storage and canned replies.
    pub async fn init(config: ServeArgs, deployment: DeploymentInfo) -> anyhow::Result<Self> {
        let limits = StoreLimits::new(config.max_messages, config.retain_messages)?;
        let store = MessageStore::new(limits)
            .with_annotation("platform", config.platform_name.clone())
            .with_annotation("environment", config.environment.clone());

        if !config.no_demo_data {
            let seeded = store.seed_demo();
            info!(seeded, "Demo data initialized");
        }

        let provider = create_provider(
            config.openai_api_key.as_deref(),
            &config.openai_model,
            config.openai_base_url.as_deref(),
        );
        if provider.is_none() {
            info!("No OpenAI API key set, assistant will use canned replies");
        }
        let assistant = AssistantService::new(provider);

        let (archive, storage) = connect_archive(config.database_url.as_deref()).await;

        Ok(Self {
            store: Arc::new(store),
            users: Arc::new(UserDirectory::new()),
            assistant: Arc::new(assistant),
            archive,
            storage,
            config: Arc::new(config),
            deployment: Arc::new(deployment),
            started_at: Instant::now(),
        })
    }

    /// Seconds since the state was built.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Try the database once. Any failure means memory-only for the process lifetime.
async fn connect_archive(
    database_url: Option<&str>,
) -> (Option<Arc<SqliteMessageArchive>>, StorageBackend) {
    let Some(url) = database_url.map(str::trim).filter(|u| !u.is_empty()) else {
        info!("No DATABASE_URL set, running memory-only");
        return (None, StorageBackend::Memory);
    };

    match DatabasePool::new(url).await {
        Ok(pool) => {
            info!("Connected to SQLite message archive");
            (
                Some(Arc::new(SqliteMessageArchive::new(pool))),
                StorageBackend::Sqlite,
            )
        }
        Err(e) => {
            warn!(error = %e, "Database unavailable, running memory-only");
            (None, StorageBackend::Memory)
        }
    }
}
