//! Database Module
//!
//! Embedded SurrealDB storage, schema initialization and repositories.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "tavola";
const DATABASE: &str = "main";

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB/RocksDB)");

        Self::init(db).await
    }

    /// Select namespace/database and run one-time schema initialization
    ///
    /// 供测试注入内存引擎 (`Surreal::new::<Mem>`) 复用同一套初始化流程。
    pub async fn init(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        init_schema(&db).await?;

        Ok(Self { db })
    }
}

/// 一次性 schema 初始化 - 在启动序列中显式执行
///
/// 唯一性约束在这里声明，repository 的预检查只用于友好报错。
async fn init_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query("DEFINE INDEX IF NOT EXISTS idx_user_username ON TABLE user FIELDS username UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define user index: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define user index: {e}")))?;

    db.query("DEFINE INDEX IF NOT EXISTS idx_table_type_name ON TABLE table_type FIELDS name UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define table_type index: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define table_type index: {e}")))?;

    tracing::info!("Database schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_on_disk_database() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tavola.db");

        let service = DbService::new(&path.to_string_lossy())
            .await
            .expect("Failed to open on-disk database");

        // Schema initialization is idempotent
        DbService::init(service.db.clone())
            .await
            .expect("Schema re-initialization failed");
    }
}
