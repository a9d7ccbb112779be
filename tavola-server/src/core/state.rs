//! 服务器状态

use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::ServiceStatusRepository;
use crate::restock::{AutoRestocker, RestockRunner};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是整个后端的核心数据结构，使用 Arc 实现浅拷贝，
/// 克隆成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | restock | Arc<dyn RestockRunner> | 补货任务 (测试可注入替身) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 补货任务
    pub restock: Arc<dyn RestockRunner>,
    /// 补货 single-flight 守卫 - 同一时刻最多一个补货周期
    restock_guard: Arc<Mutex<()>>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试用它注入
    /// 内存数据库和补货替身。
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        restock: Arc<dyn RestockRunner>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            restock,
            restock_guard: Arc::new(Mutex::new(())),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/tavola.db) + schema
    /// 3. 营业状态单例 (全部开关默认开启)
    /// 4. JWT 服务、补货任务
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        // 1. Initialize DB
        let db_path = config.database_dir().join("tavola.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        // 2. Seed the service status singleton
        if let Err(e) = ServiceStatusRepository::new(db.clone()).get_or_create().await {
            tracing::warn!(error = %e, "Failed to seed service status singleton");
        }

        // 3. Configuration sanity warnings
        if config.cron_secret.is_none() {
            tracing::warn!(
                "CRON_SECRET is not set; the restock endpoint will accept unauthenticated triggers"
            );
        }
        if config.is_production() && config.admin_password == "admin123" {
            tracing::warn!("ADMIN_PASSWORD is still the default value in production");
        }

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let restock: Arc<dyn RestockRunner> = Arc::new(AutoRestocker::new(db.clone()));

        Self::new(config.clone(), db, jwt_service, restock)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 尝试获取补货 single-flight 守卫
    ///
    /// 已有周期在执行时返回 `None`，调用方应直接拒绝本次触发。
    pub fn try_begin_restock(&self) -> Option<OwnedMutexGuard<()>> {
        self.restock_guard.clone().try_lock_owned().ok()
    }
}
