use std::sync::Arc;

use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::students::entities::Student;

pub mod sea_orm_storage;

/// 一次查询取回的结果集
///
/// 列名来自预编译语句，单元格按 SQLite 的存储类型转换为 JSON 值。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 数据库初始化
    // 建表（若不存在）并在表为空时写入种子数据，可重复调用
    async fn bootstrap(&self) -> Result<()>;

    /// 学生数据
    // 统计学生表行数
    async fn count_students(&self) -> Result<u64>;
    // 列出学生表全部数据
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// 语句执行
    // 在独立连接上原样执行一条语句并取回全部行，连接用完即关闭
    async fn read_sql_query(&self, sql: &str) -> Result<QueryRows>;
}

pub async fn create_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
