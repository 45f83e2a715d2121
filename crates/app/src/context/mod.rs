//! Application context - dependency injection container

use std::sync::Arc;

use playerlog_core::auth::ports::AuthApi;
use playerlog_core::diary::ports::{MatchesApi, TrainingApi};
use playerlog_core::profile::ports::ProfileRepository as ProfileRepositoryPort;
use playerlog_core::session::ports::SessionStore as SessionStorePort;
use playerlog_core::{AuthService, ProfileService};
use playerlog_domain::{Config, Result};
use playerlog_infra::api::{ApiClient, ApiClientConfig, DiaryApiClient, SessionTokenProvider};
use playerlog_infra::database::SqliteProfileRepository;
use playerlog_infra::{DbManager, FileSessionStore};

/// Type alias for session store trait object
type DynSessionStore = dyn SessionStorePort + 'static;

/// Type alias for profile repository port trait object
type DynProfileRepository = dyn ProfileRepositoryPort + 'static;

/// Type alias for matches API port trait object
type DynMatchesApi = dyn MatchesApi + 'static;

/// Type alias for training API port trait object
type DynTrainingApi = dyn TrainingApi + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub session: Arc<DynSessionStore>,
    pub profiles: Arc<DynProfileRepository>,
    pub profile_service: Arc<ProfileService>,
    pub auth_service: Arc<AuthService>,
    pub matches: Arc<DynMatchesApi>,
    pub trainings: Arc<DynTrainingApi>,
}

impl AppContext {
    /// Create a new application context with default configuration
    ///
    /// # Errors
    ///
    /// Propagates wiring failures (database, session document, HTTP client).
    pub async fn new() -> Result<Self> {
        Self::new_with_config(Config::default()).await
    }

    /// Create a new application context with custom configuration
    ///
    /// Also the entry point for tests, which pass per-test database and
    /// session paths.
    ///
    /// # Errors
    ///
    /// Propagates wiring failures (database, session document, HTTP client).
    pub async fn new_with_config(config: Config) -> Result<Self> {
        // Initialize local storage and bring the schema up to date.
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        // Opening the store is the explicit session init: a persisted login
        // from an earlier run is picked up here.
        let session: Arc<DynSessionStore> = Arc::new(FileSessionStore::open(&config.session.path)?);

        let profiles: Arc<DynProfileRepository> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));

        // One shared transport for every endpoint group; bearer tokens come
        // straight from the session store.
        let api_client = Arc::new(ApiClient::new(
            ApiClientConfig::from(&config.api),
            Arc::new(SessionTokenProvider::new(Arc::clone(&session))),
        )?);
        let diary_api = Arc::new(DiaryApiClient::new(api_client));
        let auth_api: Arc<dyn AuthApi> = diary_api.clone();
        let matches: Arc<DynMatchesApi> = diary_api.clone();
        let trainings: Arc<DynTrainingApi> = diary_api;

        let profile_service =
            Arc::new(ProfileService::new(Arc::clone(&session), Arc::clone(&profiles)));
        let auth_service = Arc::new(AuthService::new(auth_api, Arc::clone(&session)));

        Ok(Self {
            config,
            db,
            session,
            profiles,
            profile_service,
            auth_service,
            matches,
            trainings,
        })
    }

    /// Check database connectivity.
    ///
    /// Uses `spawn_blocking` to keep the synchronous pool call off the async
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns the underlying database error when the check fails.
    pub async fn health_check(&self) -> Result<()> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|e| playerlog_domain::Error::Internal(format!("Task join error: {e}")))?
    }
}
