//! Table Type Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{TableType, TableTypeCreate, TableTypeUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct TableTypeRepository {
    base: BaseRepository,
}

impl TableTypeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all table types ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<TableType>> {
        let types: Vec<TableType> = self
            .base
            .db()
            .query("SELECT * FROM table_type ORDER BY name")
            .await?
            .take(0)?;
        Ok(types)
    }

    /// Find table type by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<TableType>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let table_type: Option<TableType> = self.base.db().select(thing).await?;
        Ok(table_type)
    }

    /// Find table type by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<TableType>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM table_type WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let types: Vec<TableType> = result.take(0)?;
        Ok(types.into_iter().next())
    }

    /// Create a new table type, recording the creating user
    pub async fn create(&self, data: TableTypeCreate, created_by: RecordId) -> RepoResult<TableType> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table type '{}' already exists",
                data.name
            )));
        }

        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE table_type SET name = $name, description = $description, \
                 created_by = $created_by, updated_by = NONE, \
                 created_at = $now, updated_at = $now",
            )
            .bind(("name", data.name))
            .bind(("description", data.description))
            .bind(("created_by", created_by))
            .bind(("now", now))
            .await?;
        let created: Vec<TableType> = result.take(0)?;

        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create table type".to_string()))
    }

    /// Update a table type, recording the updating user
    pub async fn update(
        &self,
        id: &str,
        data: TableTypeUpdate,
        updated_by: RecordId,
    ) -> RepoResult<TableType> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table type {} not found", id)))?;

        // Check duplicate name if changing name
        if let Some(name) = &data.name
            && name != &existing.name
            && self.find_by_name(name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table type '{}' already exists",
                name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let description = data.description.or(existing.description);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, description = $description, \
                 updated_by = $updated_by, updated_at = $now",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("description", description))
            .bind(("updated_by", updated_by))
            .bind(("now", now_millis()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table type {} not found", id)))
    }
}
