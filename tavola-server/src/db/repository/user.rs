//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;
use crate::db::models::user::{ROLE_ADMIN, STATUS_ACTIVE};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let user: Option<User> = self.base.db().select(thing).await?;
        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Idempotently ensure the administrative user exists
    ///
    /// Returns `true` if the user was created, `false` if it already existed.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> RepoResult<bool> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let hash_pass = User::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;
        let now = now_millis();

        let mut result = self
            .base
            .db()
            .query(
                "CREATE user SET username = $username, hash_pass = $hash_pass, \
                 role = $role, status = $status, created_at = $now, updated_at = $now",
            )
            .bind(("username", username.to_string()))
            .bind(("hash_pass", hash_pass))
            .bind(("role", ROLE_ADMIN.to_string()))
            .bind(("status", STATUS_ACTIVE.to_string()))
            .bind(("now", now))
            .await?;
        let created: Vec<User> = result.take(0)?;

        if created.is_empty() {
            return Err(RepoError::Database("Failed to create admin user".to_string()));
        }
        Ok(true)
    }
}
