//! Database connection manager backed by a pooled SQLite handle.

use std::path::{Path, PathBuf};

use playerlog_domain::{Error, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use tracing::{info, warn};

use crate::errors::InfraError;

const SCHEMA_VERSION: i64 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Pooled SQLite connection.
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database manager that wraps an [`r2d2`] SQLite pool.
///
/// The pool is opened once and reused for the lifetime of the owning
/// component; connections return to the pool on drop.
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    ///
    /// # Errors
    ///
    /// Returns `Error::Database` when the pool cannot be created (invalid
    /// path, unreadable file).
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    Error::Database(format!(
                        "failed to create database directory {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(&path).with_init(|conn| {
            conn.busy_timeout(std::time::Duration::from_secs(5))?;
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "foreign_keys", "ON")
        });

        let max_size = pool_size.max(1);
        let pool = Pool::builder().max_size(max_size).build(manager).map_err(InfraError::from)?;

        info!(
            db_path = %path.display(),
            max_connections = max_size,
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<DbConnection> {
        self.pool.get().map_err(|err| Error::from(InfraError::from(err)))
    }

    /// Ensure the schema exists at the current version.
    ///
    /// A version mismatch rebuilds the profile table from scratch: stored
    /// profiles are dropped, and the loss is logged. Idempotent when the
    /// version already matches.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;

        if let Some(stored) = stored_schema_version(&conn)? {
            if stored != SCHEMA_VERSION {
                warn!(
                    stored_version = stored,
                    schema_version = SCHEMA_VERSION,
                    "schema version changed; dropping and recreating profile storage"
                );
                conn.execute_batch(
                    "DROP TABLE IF EXISTS profiles;
                     DELETE FROM schema_version;",
                )
                .map_err(InfraError::from)?;
            }
        }

        conn.execute_batch(SCHEMA_SQL).map_err(InfraError::from)?;
        conn.execute(
            "INSERT INTO schema_version (version, applied_at)
             SELECT ?1, CAST(strftime('%s','now') AS INTEGER)
             WHERE NOT EXISTS (SELECT 1 FROM schema_version)",
            params![SCHEMA_VERSION],
        )
        .map_err(InfraError::from)?;

        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Perform a health check to verify database connectivity.
    ///
    /// Acquires a connection from the pool and executes a trivial query.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", params![], |row| row.get::<_, i32>(0))
            .map_err(InfraError::from)?;
        Ok(())
    }
}

fn stored_schema_version(conn: &DbConnection) -> Result<Option<i64>> {
    let table_exists: bool = conn
        .query_row(
            "SELECT EXISTS (
                 SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'
             )",
            params![],
            |row| row.get(0),
        )
        .map_err(InfraError::from)?;

    if !table_exists {
        return Ok(None);
    }

    conn.query_row("SELECT MAX(version) FROM schema_version", params![], |row| row.get(0))
        .map_err(|err| Error::from(InfraError::from(err)))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn migrations_create_schema_version() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("manager created");
        manager.run_migrations().expect("migrations run");

        let conn = manager.get_connection().expect("connection acquired");
        let version: i64 =
            conn.query_row("SELECT version FROM schema_version", [], |row| row.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("manager created");
        manager.run_migrations().expect("first run");
        manager.run_migrations().expect("second run");

        let conn = manager.get_connection().expect("connection acquired");
        let rows: i64 =
            conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0)).unwrap();
        assert_eq!(rows, 1, "version row must not duplicate");
    }

    #[test]
    fn version_bump_drops_stored_profiles() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("manager created");
        manager.run_migrations().expect("migrations run");

        let conn = manager.get_connection().expect("connection acquired");
        conn.execute(
            "INSERT INTO profiles (user_id, name, birth_date, phone, address, photo)
             VALUES ('u1', 'Ana', '', '', '', '')",
            [],
        )
        .unwrap();
        // Simulate a database written by an older build.
        conn.execute("UPDATE schema_version SET version = version - 1", []).unwrap();
        drop(conn);

        manager.run_migrations().expect("destructive migration run");

        let conn = manager.get_connection().expect("connection acquired");
        let rows: i64 =
            conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0)).unwrap();
        assert_eq!(rows, 0, "old profile rows are gone after a version change");

        let version: i64 =
            conn.query_row("SELECT version FROM schema_version", [], |row| row.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn health_check_succeeds_for_valid_database() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("manager created");
        manager.run_migrations().expect("migrations run");

        manager.health_check().expect("health check passed");
    }
}
