//! Shared helpers for app integration tests

use std::sync::Arc;

use playerlog_core::SessionStore;
use playerlog_domain::{ApiConfig, Config, DatabaseConfig, Session, SessionConfig};
use playerlog_lib::AppContext;
use tempfile::TempDir;

/// Create a test context with a unique database and session document.
///
/// Returns both the context and temp directory to keep the directory alive
/// for the lifetime of the test.
pub async fn create_test_context() -> (Arc<AppContext>, TempDir) {
    create_test_context_with_api(None).await
}

/// Create a test context whose API client points at the given base URL
/// (usually a wiremock server).
pub async fn create_test_context_with_api(
    api_base_url: Option<&str>,
) -> (Arc<AppContext>, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temporary test directory");

    let config = Config {
        database: DatabaseConfig {
            path: temp_dir.path().join("playerlog.db").to_string_lossy().to_string(),
            pool_size: 5,
        },
        session: SessionConfig {
            path: temp_dir.path().join("session.json").to_string_lossy().to_string(),
        },
        api: ApiConfig {
            // An unroutable default keeps accidental network calls failing
            // fast in tests that never talk to the API.
            base_url: api_base_url.unwrap_or("http://127.0.0.1:9").to_string(),
            timeout_seconds: 5,
        },
    };

    let ctx =
        AppContext::new_with_config(config).await.expect("failed to create test context");

    (Arc::new(ctx), temp_dir)
}

/// Seed the context's session store with an authenticated user.
pub fn seed_session(ctx: &AppContext, user_id: &str, name: &str) {
    ctx.session
        .save(Session::new("test-token", name, user_id, "test@example.com"))
        .expect("failed to seed session");
}
