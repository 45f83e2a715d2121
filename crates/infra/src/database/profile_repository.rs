//! Local profile repository implementation using SQLite
//!
//! Provides persistence for device-local profile data keyed by the backend
//! account id.

use std::sync::Arc;

use async_trait::async_trait;
use playerlog_core::profile::ports::ProfileRepository as ProfileRepositoryPort;
use playerlog_domain::{Error, LocalProfile, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn upsert(&self, profile: LocalProfile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;

            // The unique index on user_id makes this a single atomic write:
            // either a fresh row or an in-place update of the existing one.
            conn.execute(
                "INSERT INTO profiles (user_id, name, birth_date, phone, address, photo)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(user_id) DO UPDATE SET
                    name = excluded.name,
                    birth_date = excluded.birth_date,
                    phone = excluded.phone,
                    address = excluded.address,
                    photo = excluded.photo",
                params![
                    &profile.user_id,
                    &profile.name,
                    &profile.birth_date,
                    &profile.phone,
                    &profile.address,
                    &profile.photo,
                ],
            )
            .map_err(InfraError::from)?;

            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<LocalProfile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<LocalProfile>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT id, user_id, name, birth_date, phone, address, photo
                 FROM profiles WHERE user_id = ?1",
                params![&user_id],
                map_profile_row,
            );

            match result {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(Error::from(InfraError::from(err))),
            }
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a LocalProfile
fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<LocalProfile> {
    Ok(LocalProfile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        birth_date: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        photo: row.get(6)?,
    })
}

fn map_join_error(err: task::JoinError) -> Error {
    Error::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(&db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    fn create_test_profile(user_id: &str, name: &str) -> LocalProfile {
        LocalProfile {
            id: 0,
            user_id: user_id.into(),
            name: name.into(),
            birth_date: "2001-03-15".into(),
            phone: "+55 11 91234-5678".into(),
            address: "Rua das Laranjeiras, 10".into(),
            photo: "content://media/external/images/42".into(),
        }
    }

    fn count_rows_for(db: &Arc<DbManager>, user_id: &str) -> i64 {
        let conn = db.get_connection().expect("connection");
        conn.query_row(
            "SELECT COUNT(*) FROM profiles WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .expect("count rows")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_upsert_then_find_round_trips_all_fields() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteProfileRepository::new(db);
        let profile = create_test_profile("u1", "Ana");

        repo.upsert(profile.clone()).await.expect("upsert profile");

        let retrieved =
            repo.find_by_user_id("u1").await.expect("find profile").expect("profile present");
        assert_eq!(retrieved.user_id, profile.user_id);
        assert_eq!(retrieved.name, profile.name);
        assert_eq!(retrieved.birth_date, profile.birth_date);
        assert_eq!(retrieved.phone, profile.phone);
        assert_eq!(retrieved.address, profile.address);
        assert_eq!(retrieved.photo, profile.photo);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_find_nonexistent_returns_none() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteProfileRepository::new(db);

        let retrieved = repo.find_by_user_id("u2").await.expect("find profile");
        assert!(retrieved.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_second_upsert_updates_in_place() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteProfileRepository::new(Arc::clone(&db));

        repo.upsert(create_test_profile("u1", "Ana")).await.expect("first upsert");

        let mut updated = create_test_profile("u1", "Ana Silva");
        updated.phone = "+55 11 99999-0000".into();
        repo.upsert(updated).await.expect("second upsert");

        let retrieved =
            repo.find_by_user_id("u1").await.expect("find profile").expect("profile present");
        assert_eq!(retrieved.name, "Ana Silva");
        assert_eq!(retrieved.phone, "+55 11 99999-0000");
        assert_eq!(count_rows_for(&db, "u1"), 1, "upsert must never duplicate the key");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_upsert_keeps_local_id_stable_across_updates() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteProfileRepository::new(db);

        repo.upsert(create_test_profile("u1", "Ana")).await.expect("first upsert");
        let first = repo.find_by_user_id("u1").await.expect("find").expect("present");

        repo.upsert(create_test_profile("u1", "Ana Silva")).await.expect("second upsert");
        let second = repo.find_by_user_id("u1").await.expect("find").expect("present");

        assert_eq!(first.id, second.id, "in-place update must not reassign the rowid");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_rows_are_isolated_per_user() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteProfileRepository::new(Arc::clone(&db));

        repo.upsert(create_test_profile("u1", "Ana")).await.expect("upsert u1");
        repo.upsert(create_test_profile("u9", "Bruno")).await.expect("upsert u9");

        let ana = repo.find_by_user_id("u1").await.expect("find u1").expect("u1 present");
        let bruno = repo.find_by_user_id("u9").await.expect("find u9").expect("u9 present");
        assert_eq!(ana.name, "Ana");
        assert_eq!(bruno.name, "Bruno");
        assert_eq!(count_rows_for(&db, "u1"), 1);
        assert_eq!(count_rows_for(&db, "u9"), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_upserts_same_key_keep_one_row() {
        let (db, _temp_dir) = setup_test_db();
        let repo = Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));

        let mut handles = Vec::new();
        for n in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.upsert(create_test_profile("u1", &format!("writer-{n}"))).await
            }));
        }
        for handle in handles {
            handle.await.expect("task join").expect("upsert");
        }

        assert_eq!(count_rows_for(&db, "u1"), 1, "conflict-resolving write must dedupe");
    }
}
