//! SeaORM 存储实现
//!
//! 单文件 SQLite 存储：建表与种子数据走 SeaORM 连接池，
//! 模型生成的语句则在每次调用时单独开一条 sqlx 连接执行。

mod query;
mod students;

use crate::config::AppConfig;
use crate::errors::{Nl2SqlError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
    pub(crate) db_url: String,
    pub(crate) read_only: bool,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.database.url)?;
        let db = Self::connect_sqlite(&db_url, config).await?;

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| Nl2SqlError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self {
            db,
            db_url,
            read_only: config.query.read_only,
        })
    }

    /// SQLite 连接池（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| Nl2SqlError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size.max(1))
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                Nl2SqlError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 把配置中的数据库地址规范化为 sqlite:// URL
    fn build_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url.starts_with("sqlite://") || url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url.ends_with(".sqlite3") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else {
            Err(Nl2SqlError::database_config(format!(
                "Cannot infer database from URL: {url}. Expected sqlite:// or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::students::entities::Student;
use crate::storage::{QueryRows, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn bootstrap(&self) -> Result<()> {
        self.bootstrap_impl().await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn read_sql_query(&self, sql: &str) -> Result<QueryRows> {
        self.read_sql_query_impl(sql).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 在临时目录里建一个全新的数据库
    pub(crate) async fn temp_storage(read_only: bool) -> (tempfile::TempDir, SeaOrmStorage) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.database.url = dir.path().join("student.db").display().to_string();
        config.query.read_only = read_only;
        let storage = SeaOrmStorage::new_async(&config).await.unwrap();
        storage.bootstrap().await.unwrap();
        (dir, storage)
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("student.db").unwrap(),
            "sqlite://student.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://data/app.sqlite").unwrap(),
            "sqlite://data/app.sqlite"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://localhost/db").is_err());
    }
}
